//! Request/response state machine for improving one field's text.
//!
//! ```text
//!            start                 Ok(text)
//!   Idle ───────────▶ Generating ───────────▶ Ready(text)
//!    ▲                    │                      │
//!    │   Err / timeout    │                      │ apply(setter) / discard
//!    └────────────────────┴──────────────────────┘
//! ```
//!
//! - At most one request is outstanding; `start` while generating is a no-op.
//! - The session never touches the aggregate. `apply` hands the text to a
//!   caller-supplied setter, and only from `Ready`.
//! - The request runs as a spawned task owned by the session. `discard` while
//!   generating, or dropping the session, aborts it, so a late result has
//!   nowhere to land.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::enhance::{EnhanceError, Enhancer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementStatus {
    Idle,
    Generating,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOutcome {
    Started,
    /// A request is already in flight; nothing new was issued.
    AlreadyGenerating,
    /// A result is waiting to be applied or discarded.
    AwaitingDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no improved text to apply (session is {0:?})")]
    NothingToApply(EnhancementStatus),
}

enum State {
    Idle,
    Generating(JoinHandle<Result<String, EnhanceError>>),
    Ready(String),
}

pub struct EnhancementSession {
    field: String,
    content: String,
    enhancer: Arc<dyn Enhancer>,
    timeout: Option<Duration>,
    state: State,
    last_error: Option<EnhanceError>,
}

impl EnhancementSession {
    /// `content` is copied; later edits to the source field do not affect
    /// this session.
    pub fn new(
        field: impl Into<String>,
        content: impl Into<String>,
        enhancer: Arc<dyn Enhancer>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            field: field.into(),
            content: content.into(),
            enhancer,
            timeout,
            state: State::Idle,
            last_error: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> EnhancementStatus {
        match self.state {
            State::Idle => EnhancementStatus::Idle,
            State::Generating(_) => EnhancementStatus::Generating,
            State::Ready(_) => EnhancementStatus::Ready,
        }
    }

    pub fn improved(&self) -> Option<&str> {
        match &self.state {
            State::Ready(text) => Some(text),
            _ => None,
        }
    }

    /// Why the most recent request did not reach `Ready`, if it didn't.
    pub fn last_error(&self) -> Option<&EnhanceError> {
        self.last_error.as_ref()
    }

    /// Issues a request. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> StartOutcome {
        match self.state {
            State::Generating(_) => {
                debug!("Ignoring start for '{}': already generating", self.field);
                return StartOutcome::AlreadyGenerating;
            }
            State::Ready(_) => {
                debug!("Ignoring start for '{}': result awaiting decision", self.field);
                return StartOutcome::AwaitingDecision;
            }
            State::Idle => {}
        }

        let enhancer = Arc::clone(&self.enhancer);
        let field = self.field.clone();
        let content = self.content.clone();
        let timeout = self.timeout;

        let handle = tokio::spawn(async move {
            let request = enhancer.improve(&field, &content);
            match timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or(Err(EnhanceError::TimedOut(limit))),
                None => request.await,
            }
        });

        info!("Started enhancement for '{}'", self.field);
        self.last_error = None;
        self.state = State::Generating(handle);
        StartOutcome::Started
    }

    /// Waits for the in-flight request, if any, and records its outcome.
    ///
    /// Cancel-safe: if this future is dropped early the request stays in
    /// flight and the session stays `Generating`.
    pub async fn settle(&mut self) -> EnhancementStatus {
        if let State::Generating(handle) = &mut self.state {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(join_error) if join_error.is_cancelled() => Err(EnhanceError::Cancelled),
                Err(join_error) => Err(EnhanceError::Backend(join_error.to_string())),
            };
            self.finish(outcome);
        }
        self.status()
    }

    /// Records the outcome only if the request has already completed.
    pub async fn poll(&mut self) -> EnhancementStatus {
        let finished = matches!(&self.state, State::Generating(handle) if handle.is_finished());
        if finished {
            self.settle().await
        } else {
            self.status()
        }
    }

    /// Hands the improved text to `setter` and returns to `Idle`.
    pub fn apply<F>(&mut self, setter: F) -> Result<(), TransitionError>
    where
        F: FnOnce(String),
    {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Ready(text) => {
                info!("Applying enhancement for '{}'", self.field);
                setter(text);
                Ok(())
            }
            other => {
                self.state = other;
                Err(TransitionError::NothingToApply(self.status()))
            }
        }
    }

    /// Drops any result and cancels any in-flight request. Always ends `Idle`.
    pub fn discard(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Generating(handle) => {
                handle.abort();
                info!("Cancelled in-flight enhancement for '{}'", self.field);
            }
            State::Ready(_) => info!("Discarded enhancement for '{}'", self.field),
            State::Idle => {}
        }
    }

    fn finish(&mut self, outcome: Result<String, EnhanceError>) {
        match outcome {
            Ok(text) => {
                info!("Enhancement ready for '{}'", self.field);
                self.state = State::Ready(text);
            }
            Err(error) => {
                warn!("Enhancement for '{}' did not complete: {error}", self.field);
                self.last_error = Some(error);
                self.state = State::Idle;
            }
        }
    }
}

impl Drop for EnhancementSession {
    fn drop(&mut self) {
        if let State::Generating(handle) = &self.state {
            handle.abort();
        }
    }
}
