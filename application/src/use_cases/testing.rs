//! Test doubles shared by the use case tests.

use crate::ports::backend::{BackendError, BackendRequest, GenerativeBackend};
use async_trait::async_trait;
use ideaforge_domain::{ConfigurationError, PersonaId, PersonaRegistry, RandomSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

type Responder = Box<dyn Fn(&BackendRequest, usize) -> Result<String, BackendError> + Send + Sync>;
type Latency = Box<dyn Fn(&BackendRequest) -> Duration + Send + Sync>;

pub(crate) fn registry() -> PersonaRegistry {
    PersonaRegistry::with_shared_pool(&["model-a", "model-b"]).unwrap()
}

/// Scriptable backend. Calls are numbered from 0 in the order they start.
pub(crate) struct MockBackend {
    responder: Responder,
    latency: Option<Latency>,
    failing: Vec<usize>,
    missing_credentials: Option<String>,
    requests: Mutex<Vec<BackendRequest>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        Self {
            responder: Box::new(|req, n| {
                Ok(format!(
                    "{} contribution #{}",
                    req.persona.default_display_name(),
                    n
                ))
            }),
            latency: None,
            failing: Vec::new(),
            missing_credentials: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn responding(
        mut self,
        responder: impl Fn(&BackendRequest, usize) -> Result<String, BackendError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.responder = Box::new(responder);
        self
    }

    pub(crate) fn with_latency(
        mut self,
        latency: impl Fn(&BackendRequest) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.latency = Some(Box::new(latency));
        self
    }

    pub(crate) fn failing_on(mut self, calls: &[usize]) -> Self {
        self.failing = calls.to_vec();
        self
    }

    pub(crate) fn without_credentials(mut self, env_var: &str) -> Self {
        self.missing_credentials = Some(env_var.to_string());
        self
    }

    pub(crate) fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.user_prompt).collect()
    }

    pub(crate) fn invoked_personas(&self) -> Vec<PersonaId> {
        self.requests().into_iter().map(|r| r.persona).collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    fn validate(&self) -> Result<(), ConfigurationError> {
        match &self.missing_credentials {
            Some(env_var) => Err(ConfigurationError::MissingCredentials {
                env_var: env_var.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn invoke(&self, request: &BackendRequest) -> Result<String, BackendError> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };
        if let Some(latency) = &self.latency {
            tokio::time::sleep(latency(request)).await;
        }
        if self.failing.contains(&n) {
            return Err(BackendError::Transport("simulated failure".to_string()));
        }
        (self.responder)(request, n)
    }
}

/// Reproducible random source
pub(crate) struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub(crate) fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, upper: usize) -> usize {
        self.0.lock().unwrap().gen_range(0..upper)
    }
}
