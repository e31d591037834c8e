//! Top-level dashboard state.
//!
//! The [`Dashboard`] owns the rep roster and the selection. Input and
//! completed fetches arrive as [`DashboardEvent`]s on a FIFO queue and are
//! applied one at a time; markers, the list view and the sub-pages are
//! projections recomputed from that owned state on demand.

use crate::{
    background::load_gate::{AsyncLoadGate, LoadOutcome, LoadState},
    core::{config::DashboardConfig, viewport::Viewport},
    data::{api::SalesApi, identity::encode_rep_id, model::SalesRep},
    layers::marker::{Marker, MarkerAggregator},
    selection::{
        controller::{SelectionChange, SelectionController, SelectionState},
        navigator::{ListNavigator, ListView, Step},
    },
    views::{
        clients::ClientDirectory,
        deals::DealBoard,
        notices::{AssetKind, AssetNotices},
        profile::{ProfileLookup, RepProfile},
    },
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::future::{BoxFuture, FutureExt};
use instant::Instant;
use std::sync::Arc;

pub const LOAD_FAILURE_BANNER: &str =
    "Failed to load sales reps. Please check your connection or try again later.";

#[derive(Debug)]
pub enum DashboardEvent {
    /// Marker click or region filter; `None` selects all regions
    SelectRegion(Option<String>),
    Reset,
    SearchChanged(String),
    Next,
    Previous,
    RosterLoaded(LoadOutcome<Vec<SalesRep>>),
    AssetFailed(AssetKind),
}

#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    reps: Vec<SalesRep>,
    markers: Vec<Marker>,
    aggregator: MarkerAggregator,
    selection: SelectionController,
    search: String,
    error_banner: Option<&'static str>,
    /// Follows the applied roster, not the gate
    load_state: LoadState,
    notices: AssetNotices,
    roster_gate: AsyncLoadGate,
    events_tx: Sender<DashboardEvent>,
    events_rx: Receiver<DashboardEvent>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let selection = SelectionController::from_config(&config);
        let aggregator = MarkerAggregator::new(selection.projector().clone());
        let roster_gate = AsyncLoadGate::new(config.loading.min_duration());
        let (events_tx, events_rx) = unbounded();
        Self {
            config,
            reps: Vec::new(),
            markers: Vec::new(),
            aggregator,
            selection,
            search: String::new(),
            error_banner: None,
            load_state: LoadState::Idle,
            notices: AssetNotices::default(),
            roster_gate,
            events_tx,
            events_rx,
        }
    }

    /// Handle for queueing events from other tasks
    pub fn sender(&self) -> Sender<DashboardEvent> {
        self.events_tx.clone()
    }

    pub fn push(&self, event: DashboardEvent) {
        // The receiver lives in `self`, so the queue cannot be disconnected here
        let _ = self.events_tx.send(event);
    }

    /// Fetches the roster through the load gate and queues the outcome as a
    /// [`DashboardEvent::RosterLoaded`]. The future can be spawned on any
    /// runtime; the dashboard itself is not borrowed.
    ///
    /// The dashboard reports `Loading` from here until the outcome is applied
    /// by [`Dashboard::process_pending`].
    pub fn roster_task(&mut self, api: Arc<dyn SalesApi>) -> BoxFuture<'static, ()> {
        self.load_state = LoadState::Loading;
        let gate = self.roster_gate.clone();
        let events = self.events_tx.clone();
        async move {
            let outcome = gate.load(|| async move { api.fetch_roster().await }).await;
            if events.send(DashboardEvent::RosterLoaded(outcome)).is_err() {
                log::debug!("dashboard dropped before the roster arrived");
            }
        }
        .boxed()
    }

    /// Applies every queued event in arrival order
    pub fn process_pending(&mut self, now: Instant) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle(event, now);
            handled += 1;
        }
        handled
    }

    pub fn handle(&mut self, event: DashboardEvent, now: Instant) {
        match event {
            DashboardEvent::SelectRegion(region) => {
                self.select_region(region.as_deref(), now);
            }
            DashboardEvent::Reset => {
                self.selection.reset(now);
            }
            DashboardEvent::SearchChanged(search) => self.set_search(search),
            DashboardEvent::Next => {
                self.step(Step::Next);
            }
            DashboardEvent::Previous => {
                self.step(Step::Previous);
            }
            DashboardEvent::RosterLoaded(outcome) => self.apply_roster(outcome),
            DashboardEvent::AssetFailed(kind) => self.notices.record_failure(kind),
        }
    }

    pub fn select_region(&mut self, region: Option<&str>, now: Instant) -> SelectionChange {
        self.selection.select_region(region, now)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        let navigator = ListNavigator::new(&self.reps, &self.search);
        self.selection.clamp_index(&navigator);
    }

    pub fn step(&mut self, step: Step) -> bool {
        let navigator = ListNavigator::new(&self.reps, &self.search);
        self.selection.step(&navigator, step)
    }

    fn apply_roster(&mut self, outcome: LoadOutcome<Vec<SalesRep>>) {
        match outcome {
            LoadOutcome::Fresh(reps) => {
                log::info!("roster loaded with {} rep(s)", reps.len());
                self.reps = reps;
                self.markers = self.aggregator.aggregate(&self.reps);
                self.error_banner = None;
                self.load_state = LoadState::Ready;
                let navigator = ListNavigator::new(&self.reps, &self.search);
                self.selection.clamp_index(&navigator);
            }
            LoadOutcome::Failed(err) => {
                if err.is_network_failure() {
                    log::warn!("roster unreachable, keeping {} rep(s): {}", self.reps.len(), err);
                } else {
                    log::error!("roster rejected, keeping {} rep(s): {}", self.reps.len(), err);
                }
                self.error_banner = Some(LOAD_FAILURE_BANNER);
                self.load_state = LoadState::Error(err.to_string());
            }
            LoadOutcome::Superseded => {}
        }
    }

    /// Advances the viewport animation; call once per frame
    pub fn tick(&mut self, now: Instant) -> Viewport {
        self.selection.tick(now)
    }

    pub fn viewport(&self) -> Viewport {
        self.selection.viewport()
    }

    pub fn is_animating(&self) -> bool {
        self.selection.animator().is_animating()
    }

    pub fn reps(&self) -> &[SalesRep] {
        &self.reps
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListNavigator::new(&self.reps, &self.search).view(self.selection.state())
    }

    /// Region filter entries, "All" excluded
    pub fn region_options(&self) -> Vec<&str> {
        ListNavigator::region_options(&self.reps)
    }

    /// State of the roster as the views see it. Changes together with the
    /// roster and the banner, never ahead of them.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn loading_gate(&self) -> &AsyncLoadGate {
        &self.roster_gate
    }

    pub fn error_banner(&self) -> Option<&'static str> {
        self.error_banner
    }

    pub fn notices(&self) -> &AssetNotices {
        &self.notices
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Profile link token for a rep in the roster
    pub fn profile_token(&self, rep_id: u64) -> Option<String> {
        self.reps
            .iter()
            .any(|rep| rep.id == rep_id)
            .then(|| encode_rep_id(rep_id))
    }

    pub fn open_profile(&self, token: &str) -> ProfileLookup<'_> {
        RepProfile::open(
            token,
            &self.reps,
            self.config.pagination.profile_deals_per_page,
        )
    }

    pub fn deal_board(&self) -> DealBoard<'_> {
        DealBoard::new(&self.reps, self.config.pagination.board_deals_per_page)
    }

    pub fn client_directory(&self) -> ClientDirectory<'_> {
        ClientDirectory::new(&self.reps)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
