//! Persona domain
//!
//! A persona is a named calling profile: a sampling temperature, a pool of
//! acceptable backend models and a set of standing instructions. The
//! [`PersonaRegistry`] holds the three personas for the lifetime of the
//! process and is never mutated after boot.

pub mod entities;
pub mod random;
pub mod registry;
pub mod selection;

pub use entities::{Persona, PersonaId};
pub use random::RandomSource;
pub use registry::PersonaRegistry;
pub use selection::select_next_persona;
