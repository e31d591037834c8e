//! Deal board across every rep.

use crate::{
    data::model::{Deal, DealStatus, SalesRep, StatusTotals},
    selection::pager::Pager,
};
use std::cmp::Ordering;

/// One deal with the rep who owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealRow<'a> {
    pub deal: &'a Deal,
    pub rep_name: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DealStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: DealStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DealSortKey {
    #[default]
    Value,
    Client,
    RepName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DealBoard<'a> {
    rows: Vec<DealRow<'a>>,
    search: String,
    filter: StatusFilter,
    sort_key: DealSortKey,
    direction: SortDirection,
    pager: Pager,
}

impl<'a> DealBoard<'a> {
    pub fn new(reps: &'a [SalesRep], per_page: usize) -> Self {
        let rows = reps
            .iter()
            .flat_map(|rep| {
                rep.deals.iter().map(move |deal| DealRow {
                    deal,
                    rep_name: rep.name.as_str(),
                })
            })
            .collect();
        let mut board = Self {
            rows,
            search: String::new(),
            filter: StatusFilter::default(),
            sort_key: DealSortKey::default(),
            direction: SortDirection::Descending,
            pager: Pager::new(per_page),
        };
        board.refresh_total();
        board
    }

    /// Matches client or rep name, case-insensitively
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.pager.reset();
        self.refresh_total();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.pager.reset();
        self.refresh_total();
    }

    /// Sorts by `key`; the active column flips direction, a new one starts
    /// ascending
    pub fn sort_by(&mut self, key: DealSortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
        self.pager.reset();
    }

    pub fn sort_key(&self) -> DealSortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    pub fn visible(&self) -> Vec<DealRow<'a>> {
        let query = self.search.trim().to_lowercase();
        let mut rows: Vec<DealRow<'a>> = self
            .rows
            .iter()
            .copied()
            .filter(|row| self.filter.accepts(row.deal.status))
            .filter(|row| {
                query.is_empty()
                    || row.deal.client.to_lowercase().contains(&query)
                    || row.rep_name.to_lowercase().contains(&query)
            })
            .collect();
        rows.sort_by(|a, b| self.direction.apply(self.compare(a, b)));
        rows
    }

    pub fn page_rows(&self) -> Vec<DealRow<'a>> {
        let rows = self.visible();
        self.pager.slice(&rows).to_vec()
    }

    /// Totals over the filtered deals
    pub fn status_totals(&self) -> StatusTotals {
        StatusTotals::from_deals(self.visible().into_iter().map(|row| row.deal))
    }

    pub fn grand_total(&self) -> f64 {
        self.status_totals().total()
    }

    pub fn is_empty(&self) -> bool {
        self.pager.total_pages() == 0
    }

    fn compare(&self, a: &DealRow<'_>, b: &DealRow<'_>) -> Ordering {
        match self.sort_key {
            DealSortKey::Value => a.deal.value.total_cmp(&b.deal.value),
            DealSortKey::Client => a.deal.client.cmp(&b.deal.client),
            DealSortKey::RepName => a.rep_name.cmp(b.rep_name),
        }
    }

    fn refresh_total(&mut self) {
        let total = self.visible().len();
        self.pager.set_total(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(client: &str, value: f64, status: DealStatus) -> Deal {
        Deal {
            client: client.into(),
            value,
            status,
        }
    }

    fn roster() -> Vec<SalesRep> {
        let rep = |id, name: &str, deals| SalesRep {
            id,
            name: name.into(),
            role: "Account Manager".into(),
            region: "Europe".into(),
            skills: Vec::new(),
            clients: Vec::new(),
            deals,
        };
        vec![
            rep(
                1,
                "Bob",
                vec![
                    deal("Acme", 120.0, DealStatus::ClosedWon),
                    deal("Globex", 80.0, DealStatus::InProgress),
                ],
            ),
            rep(
                2,
                "Alice",
                vec![
                    deal("Initech", 300.0, DealStatus::ClosedLost),
                    deal("Umbrella", 50.0, DealStatus::ClosedWon),
                ],
            ),
        ]
    }

    fn clients(rows: &[DealRow<'_>]) -> Vec<String> {
        rows.iter().map(|row| row.deal.client.clone()).collect()
    }

    #[test]
    fn test_default_sort_value_descending() {
        let reps = roster();
        let board = DealBoard::new(&reps, 8);
        assert_eq!(
            clients(&board.visible()),
            vec!["Initech", "Acme", "Globex", "Umbrella"]
        );
        assert_eq!(board.grand_total(), 550.0);
    }

    #[test]
    fn test_sort_toggle_and_new_column() {
        let reps = roster();
        let mut board = DealBoard::new(&reps, 8);

        board.sort_by(DealSortKey::Value);
        assert_eq!(board.direction(), SortDirection::Ascending);
        assert_eq!(clients(&board.visible())[0], "Umbrella");

        board.sort_by(DealSortKey::RepName);
        assert_eq!(board.direction(), SortDirection::Ascending);
        assert_eq!(board.visible()[0].rep_name, "Alice");

        board.sort_by(DealSortKey::RepName);
        assert_eq!(board.visible()[0].rep_name, "Bob");
    }

    #[test]
    fn test_filter_and_search() {
        let reps = roster();
        let mut board = DealBoard::new(&reps, 8);

        board.set_filter(StatusFilter::Only(DealStatus::ClosedWon));
        assert_eq!(board.visible().len(), 2);
        assert_eq!(board.status_totals().closed_won, 170.0);
        assert_eq!(board.status_totals().closed_lost, 0.0);

        board.set_search("alice");
        assert_eq!(clients(&board.visible()), vec!["Umbrella"]);

        board.set_search("nobody");
        assert!(board.is_empty());
    }

    #[test]
    fn test_changes_reset_page() {
        let reps: Vec<SalesRep> = (0..3)
            .map(|id| SalesRep {
                id,
                name: format!("Rep {}", id),
                role: "AE".into(),
                region: "Asia-Pacific".into(),
                skills: Vec::new(),
                clients: Vec::new(),
                deals: (0..4)
                    .map(|i| deal(&format!("C{}{}", id, i), i as f64, DealStatus::InProgress))
                    .collect(),
            })
            .collect();
        let mut board = DealBoard::new(&reps, 8);
        assert_eq!(board.pager().total_pages(), 2);
        assert!(board.next_page());
        assert_eq!(board.page_rows().len(), 4);

        board.sort_by(DealSortKey::Client);
        assert_eq!(board.pager().page(), 1);
        assert_eq!(board.page_rows().len(), 8);
    }
}
