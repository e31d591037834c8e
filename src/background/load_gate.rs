//! Gated remote loads.
//!
//! [`AsyncLoadGate`] publishes a [`LoadState`] stream for one logical
//! resource. Every `load` call takes a token; only the most recent call may
//! change the state or hand its data back, so a slow response can never
//! overwrite a newer one.

use crate::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Visible state of a gated resource
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No load has been issued yet
    Idle,
    Loading,
    Ready,
    /// Human-readable cause of the last failure
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(cause) => Some(cause),
            _ => None,
        }
    }
}

/// What a single `load` call produced
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Data from the most recent call
    Fresh(T),
    /// The most recent call failed; the state now carries the cause
    Failed(Error),
    /// A newer call was issued while this one was in flight
    Superseded,
}

impl<T> LoadOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, LoadOutcome::Superseded)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            LoadOutcome::Fresh(value) => LoadOutcome::Fresh(f(value)),
            LoadOutcome::Failed(err) => LoadOutcome::Failed(err),
            LoadOutcome::Superseded => LoadOutcome::Superseded,
        }
    }
}

struct GateShared {
    min_duration: Duration,
    latest: AtomicU64,
    state: watch::Sender<LoadState>,
}

/// Wraps remote fetches with a loading floor and latest-call-wins semantics.
/// Clones share the same state and token counter.
#[derive(Clone)]
pub struct AsyncLoadGate {
    shared: Arc<GateShared>,
}

impl AsyncLoadGate {
    pub fn new(min_duration: Duration) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            shared: Arc::new(GateShared {
                min_duration,
                latest: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Stream of state changes
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.shared.state.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.shared.state.borrow().clone()
    }

    pub fn min_duration(&self) -> Duration {
        self.shared.min_duration
    }

    /// Runs `fetch`, reporting `Loading` immediately.
    ///
    /// Success is reported no earlier than `min_duration` after the call
    /// started; failure is reported as soon as it is known. A call that is no
    /// longer the latest leaves the state untouched and returns `Superseded`.
    pub async fn load<T, F, Fut>(&self, fetch: F) -> LoadOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let started = Instant::now();
        self.shared.state.send_replace(LoadState::Loading);
        log::debug!("load #{} started", token);

        let result = fetch().await;
        if !self.is_latest(token) {
            log::debug!("load #{} superseded, discarding response", token);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(value) => {
                let ready_at = started + self.shared.min_duration;
                if Instant::now() < ready_at {
                    tokio::time::sleep_until(ready_at).await;
                }
                if !self.is_latest(token) {
                    log::debug!("load #{} superseded during loading floor", token);
                    return LoadOutcome::Superseded;
                }
                self.shared.state.send_replace(LoadState::Ready);
                log::debug!("load #{} ready", token);
                LoadOutcome::Fresh(value)
            }
            Err(err) => {
                log::warn!("load #{} failed: {}", token, err);
                self.shared.state.send_replace(LoadState::Error(err.to_string()));
                LoadOutcome::Failed(err)
            }
        }
    }

    fn is_latest(&self, token: u64) -> bool {
        self.shared.latest.load(Ordering::SeqCst) == token
    }
}

impl std::fmt::Debug for AsyncLoadGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncLoadGate")
            .field("min_duration", &self.shared.min_duration)
            .field("latest", &self.shared.latest.load(Ordering::SeqCst))
            .field("state", &*self.shared.state.borrow())
            .finish()
    }
}
