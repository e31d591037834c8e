//! Boundary to the remote sales API.
//!
//! Responses arrive either bare (`{"salesReps": [...]}`) or wrapped in the
//! backend envelope (`{"success": .., "data": .., "message": ..}`). Both are
//! mapped to typed records here; anything that does not fit is a
//! [`Error::MalformedResponse`].

use crate::{
    core::config::DashboardConfig,
    data::model::{validate_roster, SalesRep},
    Error, Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROSTER_PATH: &str = "/api/data";
pub const CHAT_PATH: &str = "/api/ai";

/// The remote collaborator behind the dashboard
#[async_trait]
pub trait SalesApi: Send + Sync {
    /// Full rep roster
    async fn fetch_roster(&self) -> Result<Vec<SalesRep>>;

    /// Answer to a free-form question; `Ok(None)` when the service replied
    /// without an answer
    async fn ask(&self, question: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
struct RosterBody {
    #[serde(rename = "salesReps")]
    sales_reps: Vec<SalesRep>,
}

#[derive(Debug, Deserialize)]
struct AnswerBody {
    #[serde(default)]
    answer: Option<String>,
}

/// HTTP implementation of [`SalesApi`]
#[derive(Debug, Clone)]
pub struct HttpSalesApi {
    client: reqwest::Client,
    roster_url: String,
    chat_url: String,
}

impl HttpSalesApi {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("repmap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            roster_url: config.endpoint(ROSTER_PATH),
            chat_url: config.endpoint(CHAT_PATH),
        })
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SalesApi for HttpSalesApi {
    async fn fetch_roster(&self) -> Result<Vec<SalesRep>> {
        log::debug!("GET {}", self.roster_url);
        let response = self.client.get(&self.roster_url).send().await?;
        let body = Self::read_body(response).await?;
        parse_roster(&body)
    }

    async fn ask(&self, question: &str) -> Result<Option<String>> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }
        log::debug!("POST {}", self.chat_url);
        let response = self
            .client
            .post(&self.chat_url)
            .json(&ChatRequest { question })
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        parse_answer(&body)
    }
}

/// Parses and validates a roster response body
pub fn parse_roster(body: &str) -> Result<Vec<SalesRep>> {
    let data = unwrap_envelope(parse_json(body)?)?;
    let roster: RosterBody = serde_json::from_value(data).map_err(malformed)?;
    validate_roster(&roster.sales_reps)?;
    Ok(roster.sales_reps)
}

/// Parses a chat response body; a missing or blank answer is `None`
pub fn parse_answer(body: &str) -> Result<Option<String>> {
    let data = unwrap_envelope(parse_json(body)?)?;
    let answer: AnswerBody = serde_json::from_value(data).map_err(malformed)?;
    Ok(answer.answer.filter(|a| !a.trim().is_empty()))
}

fn parse_json(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(malformed)
}

fn unwrap_envelope(value: Value) -> Result<Value> {
    let Some(object) = value.as_object() else {
        return Err(Error::MalformedResponse("expected a JSON object".into()));
    };
    let Some(success) = object.get("success") else {
        return Ok(value);
    };

    let success = success
        .as_bool()
        .ok_or_else(|| Error::MalformedResponse("`success` is not a boolean".into()))?;
    if !success {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request was not successful");
        return Err(Error::Rejected(message.to_string()));
    }
    match object.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(Error::MalformedResponse("envelope has no `data`".into())),
    }
}

fn malformed(err: serde_json::Error) -> Error {
    Error::MalformedResponse(err.to_string())
}
