//! Three small command-line demos that relay user text to a hosted
//! completion endpoint through fixed personas: a mood analyzer, a
//! country info orchestrator, and a product suggester.
//!
//! The binaries are thin I/O shells; the relay and the pipelines live
//! in [`prompt_relay_core`].

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;
pub mod console;

pub use config::{ConfigError, provider_from_env};
