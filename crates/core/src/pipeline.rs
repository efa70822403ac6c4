//! The fixed relay pipelines behind the three demo programs.
//!
//! A pipeline is a short, fixed sequence of relay calls with optional
//! data passing or branching between them. Each pipeline owns the
//! personas for its roles; the instruction texts live as Markdown files
//! next to this module.

mod country;
mod mood;
mod suggest;

pub use country::CountryPipeline;
pub use mood::{MoodOutcome, MoodPipeline};
pub use suggest::ProductSuggester;
