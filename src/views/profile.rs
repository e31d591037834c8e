//! Single-rep profile page, addressed by an opaque identity token.

use crate::{
    data::{
        identity::decode_rep_id,
        model::{Client, Deal, SalesRep, StatusTotals},
    },
    selection::pager::Pager,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Deals,
    Clients,
}

/// Deal ordering by value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileSort {
    #[default]
    Highest,
    Lowest,
}

#[derive(Debug, Clone)]
pub enum ProfileLookup<'a> {
    Found(RepProfile<'a>),
    /// Malformed token or unknown id
    NotFound,
}

impl<'a> ProfileLookup<'a> {
    pub fn found(self) -> Option<RepProfile<'a>> {
        match self {
            ProfileLookup::Found(profile) => Some(profile),
            ProfileLookup::NotFound => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepProfile<'a> {
    rep: &'a SalesRep,
    tab: ProfileTab,
    search: String,
    sort: ProfileSort,
    pager: Pager,
}

impl<'a> RepProfile<'a> {
    /// Resolves `token` against `reps`
    pub fn open(token: &str, reps: &'a [SalesRep], per_page: usize) -> ProfileLookup<'a> {
        let id = match decode_rep_id(token) {
            Ok(id) => id,
            Err(e) => {
                log::debug!("profile token rejected: {}", e);
                return ProfileLookup::NotFound;
            }
        };
        match reps.iter().find(|rep| rep.id == id) {
            Some(rep) => ProfileLookup::Found(Self::new(rep, per_page)),
            None => {
                log::debug!("no rep with id {}", id);
                ProfileLookup::NotFound
            }
        }
    }

    pub fn new(rep: &'a SalesRep, per_page: usize) -> Self {
        let mut profile = Self {
            rep,
            tab: ProfileTab::default(),
            search: String::new(),
            sort: ProfileSort::default(),
            pager: Pager::new(per_page),
        };
        profile.refresh_total();
        profile
    }

    pub fn rep(&self) -> &'a SalesRep {
        self.rep
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.pager.reset();
        self.refresh_total();
    }

    pub fn sort(&self) -> ProfileSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: ProfileSort) {
        self.sort = sort;
        self.pager.reset();
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

    /// Deals matching the search, in sort order
    pub fn filtered_deals(&self) -> Vec<&'a Deal> {
        let query = self.search.trim().to_lowercase();
        let mut deals: Vec<&Deal> = self
            .rep
            .deals
            .iter()
            .filter(|deal| {
                query.is_empty()
                    || format!("{} {}", deal.client, deal.status)
                        .to_lowercase()
                        .contains(&query)
            })
            .collect();
        match self.sort {
            ProfileSort::Highest => deals.sort_by(|a, b| b.value.total_cmp(&a.value)),
            ProfileSort::Lowest => deals.sort_by(|a, b| a.value.total_cmp(&b.value)),
        }
        deals
    }

    /// Deals on the current page
    pub fn page_deals(&self) -> Vec<&'a Deal> {
        let deals = self.filtered_deals();
        self.pager.slice(&deals).to_vec()
    }

    /// Totals over all of the rep's deals, independent of the search
    pub fn status_totals(&self) -> StatusTotals {
        self.rep.deal_totals()
    }

    pub fn clients(&self) -> &'a [Client] {
        &self.rep.clients
    }

    pub fn skills(&self) -> &'a [String] {
        &self.rep.skills
    }

    pub fn has_skills(&self) -> bool {
        !self.rep.skills.is_empty()
    }

    fn refresh_total(&mut self) {
        let total = self.filtered_deals().len();
        self.pager.set_total(total);
    }
}
