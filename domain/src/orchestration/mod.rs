//! Ideation orchestration domain
//!
//! Phases, the session state machine, and the records produced while a
//! session runs.

pub mod entities;
pub mod report;
pub mod session;
pub mod value_objects;
