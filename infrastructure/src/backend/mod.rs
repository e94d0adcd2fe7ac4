//! Generative backend adapters.

mod http;
mod reasoning;
mod retry;

pub use http::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, HttpBackend, HttpBackendConfig};
pub use reasoning::strip_reasoning_trace;
pub use retry::{RetryPolicy, RetryingBackend};
