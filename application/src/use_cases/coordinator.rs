//! Coordinator use case
//!
//! Owns the full per-query pipeline and the lifecycle of the external
//! connection resource:
//!
//! ```text
//! query ─▶ router ─▶ registry lookup ─▶ handler.execute ─▶ synthesizer ─▶ answer
//! ```
//!
//! Per-query failures (handler errors, panics, timeouts) are folded into a
//! failed [`HandlerResult`] and still rendered by the synthesizer. Only the
//! lifecycle (`start`/`stop`) and the defensive "not started" / "handler not
//! found" checks surface as [`CoordinatorError`].

use super::handler_registry::HandlerRegistry;
use crate::config::ExecutionParams;
use crate::ports::connection::{ConnectionError, ConnectionPort};
use crate::ports::domain_handler::DomainHandler;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::routing::QueryRouter;
use crate::synthesizer::Synthesizer;
use futures::FutureExt;
use serde_json::{Value, json};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use super_agent_domain::{Domain, HandlerResult, Query, RoutingDecision};
use thiserror::Error;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can surface from the coordinator
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Coordinator not started")]
    NotStarted,

    #[error("No handler registered for domain '{0}'")]
    HandlerNotFound(Domain),

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
}

/// Everything produced while processing one query
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub query: Query,
    pub decision: RoutingDecision,
    pub results: Vec<HandlerResult>,
    pub answer: String,
    pub elapsed: Duration,
}

impl ProcessOutcome {
    pub fn to_json(&self) -> Value {
        json!({
            "query": self.query.text(),
            "domain": self.decision.domain,
            "rationale": self.decision.rationale,
            "results": self.results.iter().map(HandlerResult::to_json).collect::<Vec<_>>(),
            "answer": self.answer,
            "elapsed_ms": self.elapsed.as_millis() as u64,
        })
    }
}

enum Lifecycle {
    Stopped,
    Running(CancellationToken),
}

/// Routes, executes and synthesizes queries
pub struct Coordinator {
    router: Arc<dyn QueryRouter>,
    registry: HandlerRegistry,
    synthesizer: Synthesizer,
    connection: Arc<dyn ConnectionPort>,
    params: ExecutionParams,
    lifecycle: RwLock<Lifecycle>,
}

impl Coordinator {
    pub fn new(
        router: Arc<dyn QueryRouter>,
        registry: HandlerRegistry,
        connection: Arc<dyn ConnectionPort>,
    ) -> Self {
        let missing = registry.missing();
        if !missing.is_empty() {
            warn!("No handler registered for: {:?}", missing);
        }

        Self {
            router,
            registry,
            synthesizer: Synthesizer::new(),
            connection,
            params: ExecutionParams::default(),
            lifecycle: RwLock::new(Lifecycle::Stopped),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn router(&self) -> &dyn QueryRouter {
        self.router.as_ref()
    }

    pub async fn is_running(&self) -> bool {
        matches!(*self.lifecycle.read().await, Lifecycle::Running(_))
    }

    /// Acquire the connection resource. A second call while running is a no-op.
    pub async fn start(&self) -> Result<(), CoordinatorError> {
        let mut lifecycle = self.lifecycle.write().await;
        if matches!(*lifecycle, Lifecycle::Running(_)) {
            debug!("Coordinator already started");
            return Ok(());
        }

        info!(
            connection = %self.connection.describe(),
            router = %self.router.strategy(),
            "Starting coordinator"
        );
        self.connection.connect().await?;
        *lifecycle = Lifecycle::Running(CancellationToken::new());
        Ok(())
    }

    /// Release the connection resource and cancel in-flight handler calls.
    ///
    /// Stopping a coordinator that is not running is a no-op.
    pub async fn stop(&self) -> Result<(), CoordinatorError> {
        let mut lifecycle = self.lifecycle.write().await;
        let Lifecycle::Running(token) = std::mem::replace(&mut *lifecycle, Lifecycle::Stopped)
        else {
            debug!("Coordinator not running, nothing to stop");
            return Ok(());
        };

        info!("Stopping coordinator");
        token.cancel();
        self.connection.disconnect().await?;
        Ok(())
    }

    /// Process a query and return the synthesized answer
    pub async fn process(&self, query: &Query) -> Result<String, CoordinatorError> {
        Ok(self.process_detailed(query).await?.answer)
    }

    /// Process a query and return the routing decision and results as well
    pub async fn process_detailed(&self, query: &Query) -> Result<ProcessOutcome, CoordinatorError> {
        self.process_with_progress(query, &NoProgress).await
    }

    /// Process a query with progress callbacks
    pub async fn process_with_progress(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> Result<ProcessOutcome, CoordinatorError> {
        let token = self.running_token().await?;
        let started = Instant::now();

        let decision = self.router.route(query).await;
        progress.on_routed(&decision);

        let handler = self
            .registry
            .get(decision.domain)
            .ok_or(CoordinatorError::HandlerNotFound(decision.domain))?;

        progress.on_handler_start(decision.domain);
        let result = self.invoke(handler.as_ref(), query, &token).await;
        progress.on_handler_complete(decision.domain, result.is_success());

        let results = vec![result];
        let answer = self.synthesizer.synthesize(&results);
        let elapsed = started.elapsed();

        info!(
            domain = %decision.domain,
            success = results.iter().all(HandlerResult::is_success),
            elapsed_ms = elapsed.as_millis() as u64,
            "Query processed"
        );

        Ok(ProcessOutcome {
            query: query.clone(),
            decision,
            results,
            answer,
            elapsed,
        })
    }

    async fn running_token(&self) -> Result<CancellationToken, CoordinatorError> {
        match &*self.lifecycle.read().await {
            Lifecycle::Running(token) => Ok(token.clone()),
            Lifecycle::Stopped => Err(CoordinatorError::NotStarted),
        }
    }

    /// Run one handler, bounded by the handler timeout and the stop signal
    async fn invoke(
        &self,
        handler: &dyn DomainHandler,
        query: &Query,
        token: &CancellationToken,
    ) -> HandlerResult {
        let domain = handler.domain();
        let call = AssertUnwindSafe(handler.execute(query)).catch_unwind();

        tokio::select! {
            _ = token.cancelled() => {
                warn!(domain = %domain, "Handler cancelled by shutdown");
                HandlerResult::failure(domain, "coordinator stopped")
            }
            outcome = tokio::time::timeout(self.params.handler_timeout, call) => match outcome {
                Ok(Ok(Ok(result))) => result,
                Ok(Ok(Err(e))) => {
                    warn!(domain = %domain, "Handler failed: {}", e);
                    HandlerResult::failure(domain, e.to_string())
                }
                Ok(Err(panic)) => {
                    warn!(domain = %domain, "Handler panicked");
                    HandlerResult::failure(
                        domain,
                        format!("handler panicked: {}", panic_message(panic.as_ref())),
                    )
                }
                Err(_) => {
                    warn!(
                        domain = %domain,
                        "Handler timed out after {:?}", self.params.handler_timeout
                    );
                    HandlerResult::failure(domain, "handler timeout")
                }
            },
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
