//! Prompt domain
//!
//! Templates for every phase of an ideation session, plus the local
//! fallback text substituted when a backend call fails.

mod fallback;
mod template;

pub use fallback::FallbackTemplate;
pub use template::IdeationPrompt;
