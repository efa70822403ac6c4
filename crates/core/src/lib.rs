//! Core logic for the prompt relay: personas, the relay client, and the
//! demo pipelines built on top of it.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod persona;
pub mod pipeline;
mod relay;

pub use persona::Persona;
pub use relay::{Relay, RelayError};
