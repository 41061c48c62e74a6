//! Core data model and shared infrastructure
//!
//! The model types mirror the shape handed over by the external analysis
//! collaborator; the renderers in [`crate::render`] consume them read-only.

mod error;
pub mod logging;
mod member;
mod model;

pub use error::*;
pub use member::*;
pub use model::*;
