//! Typed records for the sales API payloads.

use crate::{prelude::HashSet, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sales representative as delivered by the roster endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRep {
    pub id: u64,
    pub name: String,
    pub role: String,
    /// Territory name; may fall outside [`crate::Region`]
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

impl SalesRep {
    /// Avatar letter
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Case-insensitive match against name, role and client names
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_text().contains(&query)
    }

    fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.role);
        for client in &self.clients {
            text.push(' ');
            text.push_str(&client.name);
        }
        text.to_lowercase()
    }

    pub fn deal_totals(&self) -> StatusTotals {
        StatusTotals::from_deals(self.deals.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub industry: String,
    pub contact: String,
}

impl Client {
    /// Two-letter badge shown in the rep card
    pub fn badge(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub client: String,
    pub value: f64,
    pub status: DealStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStatus {
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl DealStatus {
    pub const ALL: [DealStatus; 3] = [
        DealStatus::ClosedWon,
        DealStatus::InProgress,
        DealStatus::ClosedLost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::ClosedWon => "Closed Won",
            DealStatus::InProgress => "In Progress",
            DealStatus::ClosedLost => "Closed Lost",
        }
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Summed deal value per status, handed to the chart collaborator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusTotals {
    pub closed_won: f64,
    pub in_progress: f64,
    pub closed_lost: f64,
}

impl StatusTotals {
    pub fn from_deals<'a>(deals: impl IntoIterator<Item = &'a Deal>) -> Self {
        let mut totals = Self::default();
        for deal in deals {
            *totals.slot_mut(deal.status) += deal.value;
        }
        totals
    }

    pub fn get(&self, status: DealStatus) -> f64 {
        match status {
            DealStatus::ClosedWon => self.closed_won,
            DealStatus::InProgress => self.in_progress,
            DealStatus::ClosedLost => self.closed_lost,
        }
    }

    pub fn total(&self) -> f64 {
        self.closed_won + self.in_progress + self.closed_lost
    }

    /// Chart slices in fixed status order
    pub fn entries(&self) -> [(DealStatus, f64); 3] {
        DealStatus::ALL.map(|status| (status, self.get(status)))
    }

    fn slot_mut(&mut self, status: DealStatus) -> &mut f64 {
        match status {
            DealStatus::ClosedWon => &mut self.closed_won,
            DealStatus::InProgress => &mut self.in_progress,
            DealStatus::ClosedLost => &mut self.closed_lost,
        }
    }
}

/// Checks invariants serde cannot express
pub fn validate_roster(reps: &[SalesRep]) -> Result<()> {
    let mut seen = HashSet::default();
    for rep in reps {
        if !seen.insert(rep.id) {
            return Err(Error::MalformedResponse(format!("duplicate rep id {}", rep.id)));
        }
        if rep.name.trim().is_empty() {
            return Err(Error::MalformedResponse(format!("rep {} has no name", rep.id)));
        }
        if let Some(deal) = rep
            .deals
            .iter()
            .find(|d| !d.value.is_finite() || d.value < 0.0)
        {
            return Err(Error::MalformedResponse(format!(
                "rep {} has a deal with {} of invalid value {}",
                rep.id, deal.client, deal.value
            )));
        }
    }
    Ok(())
}
