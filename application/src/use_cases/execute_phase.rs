//! Execute Phase use case
//!
//! Runs one phase of an ideation session: picks personas according to the
//! phase's selection policy, builds each prompt from the accumulated
//! session state, invokes the backend, and seals a [`PhaseRecord`].
//!
//! # Deadlines
//!
//! The phase deadline is checked before every new call. A call that has
//! already started is never aborted by the phase deadline; it runs until it
//! answers or its own `call_timeout` expires. Fixed-order steps that can no
//! longer start receive a local fallback so the record still carries one
//! entry per declared persona.
//!
//! # Failures
//!
//! Backend errors never escape. Each failed call is replaced by
//! deterministic fallback text and the phase continues as if it were real
//! output. No retries happen here: a fast fallback keeps deadlines intact.

use crate::config::OrchestrationConfig;
use crate::ports::backend::{BackendError, BackendRequest, GenerativeBackend};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::ports::progress::ProgressNotifier;
use crate::ports::response_cache::{CacheKey, CachedResponse, NoCache, ResponseCache};
use ideaforge_domain::{
    AgentCallResult, FallbackTemplate, IdeationPrompt, OpenPhase, PersonaId, PersonaRegistry,
    Phase, PhaseRecord, PhaseSelection, RandomSource, SessionState, select_next_persona,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, timeout};
use tracing::{debug, info, warn};

/// Stand-in for "no deadline" when a budget overflows `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Executes single phases against a generative backend
pub struct PhaseExecutor<B: GenerativeBackend + 'static> {
    backend: Arc<B>,
    registry: Arc<PersonaRegistry>,
    random: Arc<dyn RandomSource>,
    cache: Arc<dyn ResponseCache>,
    logger: Arc<dyn ConversationLogger>,
    config: OrchestrationConfig,
}

impl<B: GenerativeBackend + 'static> PhaseExecutor<B> {
    pub fn new(
        backend: Arc<B>,
        registry: Arc<PersonaRegistry>,
        random: Arc<dyn RandomSource>,
        config: OrchestrationConfig,
    ) -> Self {
        Self {
            backend,
            registry,
            random,
            cache: Arc::new(NoCache),
            logger: Arc::new(NoConversationLogger),
            config,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &OrchestrationConfig {
        &self.config
    }

    /// Run `phase` with the configured selection policy and budget.
    pub async fn run(
        &self,
        phase: Phase,
        state: &SessionState,
        progress: &dyn ProgressNotifier,
    ) -> PhaseRecord {
        let selection = self.config.selection_for(phase);
        let budget = self.config.budgets.get(phase);
        self.run_with(phase, &selection, budget, state, progress)
            .await
    }

    /// Run `phase` with an explicit selection policy and budget.
    pub async fn run_with(
        &self,
        phase: Phase,
        selection: &PhaseSelection,
        budget: Duration,
        state: &SessionState,
        progress: &dyn ProgressNotifier,
    ) -> PhaseRecord {
        info!(
            phase = phase.as_str(),
            budget_ms = budget.as_millis() as u64,
            "Phase {}: {}",
            phase.number(),
            phase
        );
        progress.on_phase_start(phase, selection.planned_calls());

        let now = Instant::now();
        let deadline = now
            .checked_add(budget)
            .unwrap_or_else(|| now + FAR_FUTURE);
        let mut open = OpenPhase::start(phase, budget);

        match selection {
            PhaseSelection::FixedOrder(order) => {
                self.run_fixed_order(&mut open, order, deadline, state, progress)
                    .await
            }
            PhaseSelection::RandomNoRepeat {
                personas,
                max_iterations,
            } => {
                self.run_random_walk(
                    &mut open,
                    personas,
                    *max_iterations,
                    deadline,
                    state,
                    progress,
                )
                .await
            }
            PhaseSelection::Single(persona) => {
                self.run_single(&mut open, *persona, deadline, state, progress)
                    .await
            }
        }

        let record = open.seal();
        info!(
            phase = phase.as_str(),
            results = record.results().len(),
            fallbacks = record.fallback_count(),
            elapsed_ms = record.elapsed().as_millis() as u64,
            "Phase {} sealed",
            phase
        );
        self.logger.log(ConversationEvent::new(
            events::PHASE_SEALED,
            json!({
                "phase": phase.as_str(),
                "results": record.results().len(),
                "fallbacks": record.fallback_count(),
                "started_at": record.started_at().to_rfc3339(),
                "deadline": record.deadline().to_rfc3339(),
            }),
        ));
        progress.on_phase_complete(&record);
        record
    }

    /// Invoke personas strictly in `order`; each step sees every earlier
    /// step of this phase.
    async fn run_fixed_order(
        &self,
        open: &mut OpenPhase,
        order: &[PersonaId],
        deadline: Instant,
        state: &SessionState,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = open.phase();
        for persona in order {
            let result = if Instant::now() >= deadline {
                warn!(
                    phase = phase.as_str(),
                    persona = persona.as_str(),
                    "Phase deadline elapsed, substituting fallback without a call"
                );
                self.deadline_fallback(phase, *persona, state)
            } else {
                self.step(phase, *persona, state, open.results()).await
            };
            progress.on_call_complete(&result);
            open.push(result);
        }
    }

    /// One call (synthesis). Subject to the deadline like any fixed step.
    async fn run_single(
        &self,
        open: &mut OpenPhase,
        persona: PersonaId,
        deadline: Instant,
        state: &SessionState,
        progress: &dyn ProgressNotifier,
    ) {
        self.run_fixed_order(open, &[persona], deadline, state, progress)
            .await
    }

    /// Serial random walk over `personas` until the deadline passes or
    /// `max_iterations` results exist.
    async fn run_random_walk(
        &self,
        open: &mut OpenPhase,
        personas: &[PersonaId],
        max_iterations: usize,
        deadline: Instant,
        state: &SessionState,
        progress: &dyn ProgressNotifier,
    ) {
        let phase = open.phase();
        let mut previous = None;

        while open.len() < max_iterations {
            if Instant::now() >= deadline {
                debug!(
                    phase = phase.as_str(),
                    iterations = open.len(),
                    "Phase budget exhausted"
                );
                break;
            }
            let Some(persona) = select_next_persona(personas, previous, self.random.as_ref())
            else {
                warn!(phase = phase.as_str(), "No eligible personas for random walk");
                break;
            };

            let result = self.step(phase, persona, state, open.results()).await;
            progress.on_call_complete(&result);
            open.push(result);
            previous = Some(persona);
        }

        if open.len() >= max_iterations {
            debug!(
                phase = phase.as_str(),
                max_iterations, "Iteration cap reached"
            );
        }
    }

    /// One persona call, with cache lookup and fallback substitution.
    async fn step(
        &self,
        phase: Phase,
        persona_id: PersonaId,
        state: &SessionState,
        current: &[AgentCallResult],
    ) -> AgentCallResult {
        let prompt = Self::prompt_for(phase, persona_id, state, current);
        let key = CacheKey::new(prompt.as_str(), persona_id, phase);

        if let Some(hit) = self.cache.get(&key) {
            debug!(
                phase = phase.as_str(),
                persona = persona_id.as_str(),
                "Response cache hit"
            );
            let result = self.named(
                AgentCallResult::success(persona_id, phase, hit.content, hit.model, 0).from_cache(),
            );
            self.log_call(&result, &prompt);
            return result;
        }

        let persona = self.registry.lookup(persona_id);
        let model = self
            .registry
            .pick_model(persona_id, self.random.as_ref())
            .to_string();
        let request = BackendRequest {
            persona: persona_id,
            model: model.clone(),
            system_prompt: persona.instructions().to_string(),
            user_prompt: prompt,
            temperature: persona.temperature(),
            max_tokens: self.config.max_tokens_for(phase),
            timeout: self.config.call_timeout,
        };

        debug!(
            phase = phase.as_str(),
            persona = persona_id.as_str(),
            model = %model,
            prompt_bytes = request.user_prompt.len(),
            "Invoking backend"
        );

        let started = Instant::now();
        let outcome = match timeout(request.timeout, self.backend.invoke(&request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(BackendError::Timeout(request.timeout)),
        };
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let result = match outcome {
            Ok(content) if !content.trim().is_empty() => {
                debug!(
                    phase = phase.as_str(),
                    persona = persona_id.as_str(),
                    model = %model,
                    duration_ms,
                    "Backend call succeeded"
                );
                self.cache.put(
                    key,
                    CachedResponse {
                        content: content.clone(),
                        model: model.clone(),
                    },
                );
                self.named(AgentCallResult::success(
                    persona_id,
                    phase,
                    content,
                    model,
                    duration_ms,
                ))
            }
            Ok(_) => self.fallback(
                phase,
                persona_id,
                state,
                model,
                duration_ms,
                BackendError::EmptyContent,
            ),
            Err(error) => self.fallback(phase, persona_id, state, model, duration_ms, error),
        };

        self.log_call(&result, &request.user_prompt);
        result
    }

    fn fallback(
        &self,
        phase: Phase,
        persona: PersonaId,
        state: &SessionState,
        model: String,
        duration_ms: u64,
        error: BackendError,
    ) -> AgentCallResult {
        warn!(
            phase = phase.as_str(),
            persona = persona.as_str(),
            model = %model,
            duration_ms,
            "Backend call failed, using fallback: {}",
            error
        );
        self.named(AgentCallResult::fallback(
            persona,
            phase,
            Self::fallback_for(phase, persona, state),
            model,
            duration_ms,
            error.to_string(),
        ))
    }

    /// Stamps the registry's display name onto a result
    fn named(&self, result: AgentCallResult) -> AgentCallResult {
        let name = self.registry.lookup(result.persona).display_name().to_string();
        result.with_persona_name(name)
    }

    fn deadline_fallback(
        &self,
        phase: Phase,
        persona: PersonaId,
        state: &SessionState,
    ) -> AgentCallResult {
        let result = self.named(AgentCallResult::fallback(
            persona,
            phase,
            Self::fallback_for(phase, persona, state),
            "",
            0,
            "phase deadline elapsed before the call could start",
        ));
        self.log_call(&result, "");
        result
    }

    fn prompt_for(
        phase: Phase,
        persona: PersonaId,
        state: &SessionState,
        current: &[AgentCallResult],
    ) -> String {
        match phase {
            Phase::Synthesis => IdeationPrompt::synthesis(state),
            _ => IdeationPrompt::phase_step(phase, persona, state, current),
        }
    }

    fn fallback_for(phase: Phase, persona: PersonaId, state: &SessionState) -> String {
        match phase {
            Phase::Synthesis => FallbackTemplate::synthesis(state),
            _ => FallbackTemplate::agent(persona, phase, state.original_prompt()),
        }
    }

    fn log_call(&self, result: &AgentCallResult, prompt: &str) {
        self.logger.log(ConversationEvent::new(
            events::AGENT_CALL,
            json!({
                "phase": result.phase.as_str(),
                "persona": result.persona.as_str(),
                "persona_name": result.persona_name,
                "model": result.model_used,
                "succeeded": result.succeeded,
                "cached": result.cached,
                "duration_ms": result.duration_ms,
                "error": result.error,
                "prompt": prompt,
                "content": result.content,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{MockBackend, SeededRandom, registry};
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn executor(backend: MockBackend, config: OrchestrationConfig) -> PhaseExecutor<MockBackend> {
        PhaseExecutor::new(
            Arc::new(backend),
            Arc::new(registry()),
            Arc::new(SeededRandom::new(7)),
            config,
        )
    }

    fn fixed_order() -> PhaseSelection {
        PhaseSelection::FixedOrder(vec![
            PersonaId::Creative,
            PersonaId::Logical,
            PersonaId::Reasoning,
        ])
    }

    fn walk(max_iterations: usize) -> PhaseSelection {
        PhaseSelection::RandomNoRepeat {
            personas: PersonaId::ALL.to_vec(),
            max_iterations,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_order_ignores_call_latency() {
        let backend = MockBackend::new().with_latency(|req| match req.persona {
            PersonaId::Creative => Duration::from_millis(300),
            PersonaId::Logical => Duration::from_millis(1),
            PersonaId::Reasoning => Duration::from_millis(50),
        });
        let exec = executor(backend, OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(
                Phase::Foundation,
                &fixed_order(),
                Duration::from_secs(60),
                &state,
                &NoProgress,
            )
            .await;

        let personas: Vec<_> = record.results().iter().map(|r| r.persona).collect();
        assert_eq!(
            personas,
            vec![PersonaId::Creative, PersonaId::Logical, PersonaId::Reasoning]
        );
        assert_eq!(
            exec.backend.invoked_personas(),
            vec![PersonaId::Creative, PersonaId::Logical, PersonaId::Reasoning]
        );
        assert!(record.results().iter().all(|r| r.succeeded));
    }

    #[tokio::test]
    async fn test_fixed_order_chains_context_within_phase() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(
                Phase::Foundation,
                &fixed_order(),
                Duration::from_secs(60),
                &state,
                &NoProgress,
            )
            .await;

        let prompts = exec.backend.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(!prompts[0].contains(&record.results()[0].content));
        assert!(prompts[1].contains(&record.results()[0].content));
        assert!(prompts[2].contains(&record.results()[0].content));
        assert!(prompts[2].contains(&record.results()[1].content));
    }

    #[tokio::test]
    async fn test_failed_step_is_replaced_and_chain_continues() {
        let backend = MockBackend::new().failing_on(&[0]);
        let exec = executor(backend, OrchestrationConfig::default());
        let state = SessionState::new("sustainable urban transport", vec![]);

        let record = exec
            .run_with(
                Phase::Foundation,
                &fixed_order(),
                Duration::from_secs(60),
                &state,
                &NoProgress,
            )
            .await;

        assert_eq!(record.results().len(), 3);
        let first = &record.results()[0];
        assert!(!first.succeeded);
        assert_eq!(
            first.content,
            FallbackTemplate::agent(
                PersonaId::Creative,
                Phase::Foundation,
                "sustainable urban transport"
            )
        );
        assert!(record.results()[1].succeeded);
        // the fallback is fed forward like real output
        assert!(exec.backend.prompts()[1].contains(&first.content));
    }

    #[tokio::test]
    async fn test_zero_budget_fixed_order_issues_no_calls() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(Phase::Refinement, &fixed_order(), Duration::ZERO, &state, &NoProgress)
            .await;

        assert_eq!(exec.backend.call_count(), 0);
        assert_eq!(record.results().len(), 3);
        assert!(record.results().iter().all(|r| !r.succeeded && !r.content.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_stops_fixed_order_mid_phase() {
        let backend = MockBackend::new().with_latency(|_| Duration::from_secs(2));
        let exec = executor(backend, OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(
                Phase::Foundation,
                &fixed_order(),
                Duration::from_secs(3),
                &state,
                &NoProgress,
            )
            .await;

        // first two calls start before the deadline, the third cannot
        assert_eq!(exec.backend.call_count(), 2);
        let succeeded: Vec<_> = record.results().iter().map(|r| r.succeeded).collect();
        assert_eq!(succeeded, vec![true, true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_walk_respects_budget() {
        let call_timeout = Duration::from_secs(5);
        let backend = MockBackend::new().with_latency(|_| Duration::from_millis(400));
        let config = OrchestrationConfig::default().with_call_timeout(call_timeout);
        let exec = executor(backend, config);
        let state = SessionState::new("topic", vec![]);
        let budget = Duration::from_secs(3);

        let started = Instant::now();
        let record = exec
            .run_with(Phase::Expansion, &walk(1000), budget, &state, &NoProgress)
            .await;
        let elapsed = started.elapsed();

        assert!(elapsed <= budget + call_timeout);
        // 400ms per call: calls start at 0, 0.4, ..., 2.8s
        assert_eq!(record.results().len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_walk_overrun_bounded_by_one_call_timeout() {
        let call_timeout = Duration::from_secs(2);
        let backend = MockBackend::new().with_latency(|_| Duration::from_secs(30));
        let config = OrchestrationConfig::default().with_call_timeout(call_timeout);
        let exec = executor(backend, config);
        let state = SessionState::new("topic", vec![]);
        let budget = Duration::from_secs(3);

        let started = Instant::now();
        let record = exec
            .run_with(Phase::Expansion, &walk(1000), budget, &state, &NoProgress)
            .await;

        assert!(started.elapsed() <= budget + call_timeout);
        assert_eq!(record.results().len(), 2);
        assert!(record.results().iter().all(|r| !r.succeeded));
        assert!(
            record.results()[0]
                .error
                .as_deref()
                .unwrap_or_default()
                .contains("timed out")
        );
    }

    #[tokio::test]
    async fn test_random_walk_hits_iteration_cap() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(Phase::Expansion, &walk(5), Duration::from_secs(600), &state, &NoProgress)
            .await;

        assert_eq!(record.results().len(), 5);
        assert_eq!(exec.backend.call_count(), 5);
    }

    #[tokio::test]
    async fn test_random_walk_zero_budget_runs_nothing() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(Phase::Expansion, &walk(5), Duration::ZERO, &state, &NoProgress)
            .await;

        assert!(record.results().is_empty());
        assert_eq!(exec.backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_random_walk_never_repeats_previous_persona() {
        for seed in 0..20 {
            let exec = PhaseExecutor::new(
                Arc::new(MockBackend::new()),
                Arc::new(registry()),
                Arc::new(SeededRandom::new(seed)),
                OrchestrationConfig::default(),
            );
            let state = SessionState::new("topic", vec![]);

            let record = exec
                .run_with(
                    Phase::Expansion,
                    &walk(200),
                    Duration::from_secs(600),
                    &state,
                    &NoProgress,
                )
                .await;

            assert_eq!(record.results().len(), 200);
            for pair in record.results().windows(2) {
                assert_ne!(pair[0].persona, pair[1].persona, "seed {}", seed);
            }
        }
    }

    #[tokio::test]
    async fn test_random_walk_sees_all_prior_iterations() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(Phase::Expansion, &walk(4), Duration::from_secs(600), &state, &NoProgress)
            .await;

        let last_prompt = exec.backend.prompts().pop().unwrap();
        for result in &record.results()[..3] {
            assert!(last_prompt.contains(&result.content));
        }
    }

    #[tokio::test]
    async fn test_empty_content_becomes_fallback() {
        let backend = MockBackend::new().responding(|_, _| Ok("   ".to_string()));
        let exec = executor(backend, OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(
                Phase::Synthesis,
                &PhaseSelection::Single(PersonaId::Reasoning),
                Duration::from_secs(60),
                &state,
                &NoProgress,
            )
            .await;

        let result = &record.results()[0];
        assert!(!result.succeeded);
        assert_eq!(result.error.as_deref(), Some("Backend returned empty content"));
        assert!(result.content.contains("## Recommendation"));
    }

    #[tokio::test]
    async fn test_request_uses_persona_profile() {
        let exec = executor(MockBackend::new(), OrchestrationConfig::default());
        let state = SessionState::new("topic", vec![]);

        exec.run_with(
            Phase::Synthesis,
            &PhaseSelection::Single(PersonaId::Reasoning),
            Duration::from_secs(60),
            &state,
            &NoProgress,
        )
        .await;

        let request = exec.backend.requests().pop().unwrap();
        let persona = exec.registry.lookup(PersonaId::Reasoning);
        assert_eq!(request.temperature, persona.temperature());
        assert_eq!(request.system_prompt, persona.instructions());
        assert!(persona.model_pool().contains(&request.model));
        assert_eq!(request.max_tokens, 4000);
        assert_eq!(request.timeout, Duration::from_secs(60));
    }

    struct MapCache(Mutex<HashMap<CacheKey, CachedResponse>>);

    impl ResponseCache for MapCache {
        fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
            self.0.lock().unwrap().get(key).cloned()
        }

        fn put(&self, key: CacheKey, response: CachedResponse) {
            self.0.lock().unwrap().insert(key, response);
        }
    }

    #[tokio::test]
    async fn test_results_carry_configured_display_names() {
        let personas = PersonaId::ALL
            .iter()
            .map(|id| {
                ideaforge_domain::Persona::new(*id, 0.5, vec!["m".to_string()])
                    .with_display_name(format!("{} (custom)", id))
            })
            .collect();
        let registry = ideaforge_domain::PersonaRegistry::new(personas).unwrap();
        let exec = PhaseExecutor::new(
            Arc::new(MockBackend::new().failing_on(&[1])),
            Arc::new(registry),
            Arc::new(SeededRandom::new(7)),
            OrchestrationConfig::default(),
        );
        let state = SessionState::new("topic", vec![]);

        let record = exec
            .run_with(
                Phase::Foundation,
                &fixed_order(),
                Duration::from_secs(60),
                &state,
                &NoProgress,
            )
            .await;

        for result in record.results() {
            assert_eq!(result.display_name(), format!("{} (custom)", result.persona));
        }
        assert!(!record.results()[1].succeeded);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_backend() {
        let cache = Arc::new(MapCache(Mutex::new(HashMap::new())));
        let exec = executor(MockBackend::new(), OrchestrationConfig::default())
            .with_cache(cache.clone());
        let state = SessionState::new("topic", vec![]);
        let single = PhaseSelection::Single(PersonaId::Creative);

        let first = exec
            .run_with(Phase::Foundation, &single, Duration::from_secs(60), &state, &NoProgress)
            .await;
        let second = exec
            .run_with(Phase::Foundation, &single, Duration::from_secs(60), &state, &NoProgress)
            .await;

        assert_eq!(exec.backend.call_count(), 1);
        assert!(second.results()[0].cached);
        assert_eq!(first.results()[0].content, second.results()[0].content);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache = Arc::new(MapCache(Mutex::new(HashMap::new())));
        let backend = MockBackend::new().failing_on(&[0]);
        let exec = executor(backend, OrchestrationConfig::default()).with_cache(cache.clone());
        let state = SessionState::new("topic", vec![]);
        let single = PhaseSelection::Single(PersonaId::Creative);

        exec.run_with(Phase::Foundation, &single, Duration::from_secs(60), &state, &NoProgress)
            .await;
        let retry = exec
            .run_with(Phase::Foundation, &single, Duration::from_secs(60), &state, &NoProgress)
            .await;

        assert_eq!(exec.backend.call_count(), 2);
        assert!(retry.results()[0].succeeded);
        assert!(!retry.results()[0].cached);
    }
}
