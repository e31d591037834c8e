use crate::data::model::{Client, SalesRep};

pub const ALL_INDUSTRIES: &str = "All";

/// A client with the rep who manages it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientEntry<'a> {
    pub client: &'a Client,
    pub rep_id: u64,
    pub rep_name: &'a str,
}

/// Client list with industry filter pills
#[derive(Debug, Clone)]
pub struct ClientDirectory<'a> {
    entries: Vec<ClientEntry<'a>>,
    industry: Option<String>,
}

impl<'a> ClientDirectory<'a> {
    pub fn new(reps: &'a [SalesRep]) -> Self {
        let entries = reps
            .iter()
            .flat_map(|rep| {
                rep.clients.iter().map(move |client| ClientEntry {
                    client,
                    rep_id: rep.id,
                    rep_name: rep.name.as_str(),
                })
            })
            .collect();
        Self {
            entries,
            industry: None,
        }
    }

    /// "All" followed by each distinct industry in first-seen order
    pub fn industries(&self) -> Vec<&'a str> {
        let mut industries: Vec<&'a str> = vec![ALL_INDUSTRIES];
        for entry in &self.entries {
            let industry = entry.client.industry.as_str();
            if !industries.contains(&industry) {
                industries.push(industry);
            }
        }
        industries
    }

    /// Selects an industry pill; "All" clears the filter
    pub fn select_industry(&mut self, industry: &str) {
        self.industry = (industry != ALL_INDUSTRIES).then(|| industry.to_string());
    }

    pub fn selected_industry(&self) -> &str {
        self.industry.as_deref().unwrap_or(ALL_INDUSTRIES)
    }

    pub fn visible(&self) -> Vec<ClientEntry<'a>> {
        self.entries
            .iter()
            .copied()
            .filter(|entry| match &self.industry {
                Some(industry) => entry.client.industry == *industry,
                None => true,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.visible().is_empty()
    }
}
