//! Single source of truth for the active region.
//!
//! Every selection request (marker click, region filter, reset) goes through
//! [`SelectionController`]. The list subset follows the new state at once;
//! the viewport catches up over the following ticks.

use crate::{
    animation::animator::ViewportAnimator,
    core::{
        config::DashboardConfig,
        projector::{GeoProjector, ViewTarget},
        viewport::Viewport,
    },
    selection::navigator::{ListNavigator, Step},
};
use instant::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    AllRegions,
    RegionFocused(String),
}

impl Selection {
    pub fn region(&self) -> Option<&str> {
        match self {
            Selection::AllRegions => None,
            Selection::RegionFocused(region) => Some(region),
        }
    }

    pub fn is_focused_on(&self, region: &str) -> bool {
        self.region() == Some(region)
    }
}

/// Selected region plus the carousel position inside it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selection: Selection,
    active_index: usize,
}

impl SelectionState {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selection.region()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Keeps the index inside `[0, count - 1]`; 0 for an empty subset
    pub fn clamp_to(&mut self, count: usize) {
        self.active_index = self.active_index.min(count.saturating_sub(1));
    }

    pub(crate) fn set_active_index(&mut self, index: usize) {
        self.active_index = index;
    }

    fn focus(&mut self, selection: Selection) {
        self.selection = selection;
        self.active_index = 0;
    }
}

/// Effects of one selection request
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub selection: Selection,
    /// Destination handed to the animator, if the viewport has to move
    pub viewport_target: Option<Viewport>,
    /// A new transition was started (not merely continued)
    pub animation_started: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    projector: GeoProjector,
    animator: ViewportAnimator,
}

impl SelectionController {
    pub fn new(projector: GeoProjector, animator: ViewportAnimator) -> Self {
        Self {
            state: SelectionState::default(),
            projector,
            animator,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        let projector = GeoProjector::new(Viewport::world(), config.animation.focus_zoom);
        let animator = ViewportAnimator::new(projector.home(), config.animation.duration());
        Self::new(projector, animator)
    }

    /// Focuses `region`, or returns to all regions for `None`
    pub fn select_region(&mut self, region: Option<&str>, now: Instant) -> SelectionChange {
        let Some(region) = region else {
            return self.reset(now);
        };

        if self.state.selection.is_focused_on(region) {
            log::debug!("region {} already selected, rewinding carousel", region);
            self.state.active_index = 0;
            return SelectionChange {
                selection: self.state.selection.clone(),
                viewport_target: None,
                animation_started: false,
            };
        }

        log::info!("selecting region {}", region);
        self.state.focus(Selection::RegionFocused(region.to_string()));
        let target = self.projector.project(ViewTarget::Region(region));
        if target.is_none() {
            log::debug!("region {} has no map coordinate, viewport stays", region);
        }
        self.apply_target(target, now)
    }

    /// Back to all regions and the world framing
    pub fn reset(&mut self, now: Instant) -> SelectionChange {
        log::info!("resetting region selection");
        self.state.focus(Selection::AllRegions);
        let target = self.projector.project(ViewTarget::Reset);
        self.apply_target(target, now)
    }

    /// Moves the carousel one step within `navigator`'s subset
    pub fn step(&mut self, navigator: &ListNavigator<'_>, step: Step) -> bool {
        navigator.step(&mut self.state, step)
    }

    /// Re-clamps the carousel after the subset changed underneath it
    pub fn clamp_index(&mut self, navigator: &ListNavigator<'_>) {
        navigator.clamp(&mut self.state);
    }

    /// Advances the viewport animation to `now`
    pub fn tick(&mut self, now: Instant) -> Viewport {
        self.animator.tick(now)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.animator.viewport()
    }

    pub fn animator(&self) -> &ViewportAnimator {
        &self.animator
    }

    pub fn projector(&self) -> &GeoProjector {
        &self.projector
    }

    fn apply_target(&mut self, target: Option<Viewport>, now: Instant) -> SelectionChange {
        let animation_started = target
            .map(|t| self.animator.animate_to(t, now))
            .unwrap_or(false);
        SelectionChange {
            selection: self.state.selection.clone(),
            viewport_target: target,
            animation_started,
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Point;
    use crate::data::model::SalesRep;
    use std::time::Duration;

    fn rep(id: u64, region: &str) -> SalesRep {
        SalesRep {
            id,
            name: format!("Rep {id}"),
            role: "AE".into(),
            region: region.into(),
            skills: vec![],
            clients: vec![],
            deals: vec![],
        }
    }

    #[test]
    fn test_select_region_starts_animation() {
        let now = Instant::now();
        let mut controller = SelectionController::default();

        let change = controller.select_region(Some("Europe"), now);

        assert_eq!(change.selection, Selection::RegionFocused("Europe".into()));
        assert_eq!(change.viewport_target, Some(Viewport::new(Point::new(10.0, 50.0), 3.0)));
        assert!(change.animation_started);
        assert_eq!(controller.state().active_index(), 0);
        // list state is already focused while the map is still moving
        assert_eq!(controller.state().selected_region(), Some("Europe"));
        assert_eq!(controller.viewport(), Viewport::world());
    }

    #[test]
    fn test_reset_returns_exactly_to_world() {
        let now = Instant::now();
        let mut controller = SelectionController::default();
        controller.select_region(Some("Asia-Pacific"), now);
        controller.tick(now + Duration::from_millis(400));

        let later = now + Duration::from_millis(400);
        let change = controller.reset(later);
        assert_eq!(change.selection, Selection::AllRegions);
        controller.tick(later + Duration::from_millis(300));

        let settled = controller.tick(later + Duration::from_millis(1000));
        assert_eq!(settled, Viewport::new(Point::new(10.0, 10.0), 1.0));
    }

    #[test]
    fn test_select_none_is_reset() {
        let now = Instant::now();
        let mut controller = SelectionController::default();
        controller.select_region(Some("Europe"), now);
        let change = controller.select_region(None, now);
        assert_eq!(change.selection, Selection::AllRegions);
        assert_eq!(change.viewport_target, Some(Viewport::world()));
    }

    #[test]
    fn test_reselect_rewinds_index_without_moving() {
        let now = Instant::now();
        let reps = vec![rep(1, "Europe"), rep(2, "Europe"), rep(3, "Europe")];
        let navigator = ListNavigator::new(&reps, "");
        let mut controller = SelectionController::default();

        controller.select_region(Some("Europe"), now);
        let target = controller.animator().target();
        assert!(controller.step(&navigator, Step::Next));
        assert!(controller.step(&navigator, Step::Next));
        assert_eq!(controller.state().active_index(), 2);

        let change = controller.select_region(Some("Europe"), now + Duration::from_millis(100));
        assert!(!change.animation_started);
        assert_eq!(change.viewport_target, None);
        assert_eq!(controller.animator().target(), target);
        assert_eq!(controller.animator().transitions_started(), 1);
        assert_eq!(controller.state().active_index(), 0);
    }

    #[test]
    fn test_unknown_region_filters_without_moving() {
        let now = Instant::now();
        let mut controller = SelectionController::default();
        let change = controller.select_region(Some("Antarctica"), now);
        assert_eq!(change.viewport_target, None);
        assert!(!change.animation_started);
        assert!(!controller.animator().is_animating());
        assert_eq!(controller.state().selected_region(), Some("Antarctica"));
    }

    #[test]
    fn test_clamp_index() {
        let mut state = SelectionState::default();
        state.set_active_index(5);
        state.clamp_to(3);
        assert_eq!(state.active_index(), 2);
        state.clamp_to(0);
        assert_eq!(state.active_index(), 0);
    }
}
