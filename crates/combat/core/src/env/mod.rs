//! Environment collaborators injected into the combat math.
//!
//! The only collaborator today is the uniform random source; keeping it behind a
//! trait lets tests replay exact combat sequences.

pub mod rng;

pub use rng::{FnSource, PcgSource, ScriptedSource, UniformSource, draw_unit};
#[cfg(feature = "std")]
pub use rng::{RandSource, SystemSource};
