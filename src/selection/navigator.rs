//! Read-only projections of the rep list for the side panel.

use crate::{
    data::model::SalesRep,
    prelude::HashMap,
    selection::controller::{Selection, SelectionState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Reps of one region, in roster order
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup<'a> {
    pub region: &'a str,
    pub reps: Vec<&'a SalesRep>,
}

/// Single-rep browsing inside the focused region. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<'a> {
    region: String,
    reps: Vec<&'a SalesRep>,
    index: usize,
}

impl<'a> Carousel<'a> {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn current(&self) -> &'a SalesRep {
        self.reps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.reps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.reps.len()
    }

    /// Position dots, `true` for the active rep
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.reps.len()).map(|i| i == self.index).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    /// All regions: every rep, grouped by region in first-seen order
    Grouped(Vec<RegionGroup<'a>>),
    /// One region focused
    Carousel(Carousel<'a>),
    /// Nothing matches the filters; `region` is the focused region, if any
    Empty { region: Option<String> },
}

impl ListView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty { .. })
    }
}

/// Browses the text-filtered roster according to a [`SelectionState`]
#[derive(Debug, Clone)]
pub struct ListNavigator<'a> {
    reps: Vec<&'a SalesRep>,
}

impl<'a> ListNavigator<'a> {
    /// Applies the search text to the roster
    pub fn new(reps: &'a [SalesRep], query: &str) -> Self {
        Self {
            reps: reps.iter().filter(|rep| rep.matches(query)).collect(),
        }
    }

    /// Wraps a roster that was filtered elsewhere
    pub fn from_filtered(reps: Vec<&'a SalesRep>) -> Self {
        Self { reps }
    }

    /// Reps visible under `selection`
    pub fn subset(&self, selection: &Selection) -> Vec<&'a SalesRep> {
        match selection.region() {
            None => self.reps.clone(),
            Some(region) => self
                .reps
                .iter()
                .copied()
                .filter(|rep| rep.region == region)
                .collect(),
        }
    }

    pub fn view(&self, state: &SelectionState) -> ListView<'a> {
        let subset = self.subset(state.selection());
        if subset.is_empty() {
            return ListView::Empty {
                region: state.selected_region().map(str::to_string),
            };
        }

        match state.selected_region() {
            None => ListView::Grouped(group_by_region(subset)),
            Some(region) => {
                let index = state.active_index().min(subset.len() - 1);
                ListView::Carousel(Carousel {
                    region: region.to_string(),
                    reps: subset,
                    index,
                })
            }
        }
    }

    /// Moves the carousel one step, clamped to the subset. Returns whether the
    /// index changed; in grouped mode nothing moves.
    pub fn step(&self, state: &mut SelectionState, step: Step) -> bool {
        if state.selected_region().is_none() {
            return false;
        }
        let count = self.subset(state.selection()).len();
        state.clamp_to(count);
        let index = state.active_index();
        let moved = match step {
            Step::Next if index + 1 < count => index + 1,
            Step::Previous if index > 0 => index - 1,
            _ => return false,
        };
        state.set_active_index(moved);
        true
    }

    pub fn next(&self, state: &mut SelectionState) -> bool {
        self.step(state, Step::Next)
    }

    pub fn previous(&self, state: &mut SelectionState) -> bool {
        self.step(state, Step::Previous)
    }

    pub fn clamp(&self, state: &mut SelectionState) {
        let count = self.subset(state.selection()).len();
        state.clamp_to(count);
    }

    pub fn len(&self) -> usize {
        self.reps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }

    /// Distinct regions of the whole roster, for the region filter
    pub fn region_options(reps: &'a [SalesRep]) -> Vec<&'a str> {
        group_by_region(reps.iter().collect())
            .into_iter()
            .map(|group| group.region)
            .collect()
    }
}

fn group_by_region(reps: Vec<&SalesRep>) -> Vec<RegionGroup<'_>> {
    let mut groups: Vec<RegionGroup<'_>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::default();
    for rep in reps {
        let region = rep.region.as_str();
        let slot = *slots.entry(region).or_insert_with(|| {
            groups.push(RegionGroup {
                region,
                reps: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].reps.push(rep);
    }
    groups
}
