//! Conversational Q&A panel.

use crate::{
    background::load_gate::{AsyncLoadGate, LoadOutcome, LoadState},
    data::api::SalesApi,
    session::SessionStore,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session key of the persisted transcript
pub const TRANSCRIPT_KEY: &str = "chatHistory";

pub const NO_ANSWER: &str = "No answer received from AI.";

pub const APOLOGY: &str =
    "Oops! Something went wrong while getting the answer. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Rendered as an error bubble
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_string(),
            is_error: false,
        }
    }

    fn assistant(text: &str, is_error: bool) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.to_string(),
            is_error,
        }
    }
}

#[derive(Debug)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    gate: AsyncLoadGate,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            gate: AsyncLoadGate::new(Duration::ZERO),
        }
    }

    /// Restores the transcript saved earlier in this session. An unreadable
    /// transcript starts a fresh conversation.
    pub fn restore(store: &SessionStore) -> Self {
        let mut session = Self::new();
        match store.load_json::<Vec<ChatMessage>>(TRANSCRIPT_KEY) {
            Ok(Some(transcript)) => session.transcript = transcript,
            Ok(None) => {}
            Err(e) => log::warn!("discarding unreadable chat transcript: {}", e),
        }
        session
    }

    pub fn persist(&self, store: &mut SessionStore) -> Result<()> {
        store.save_json(TRANSCRIPT_KEY, &self.transcript)
    }

    /// Sends `question` and appends both sides of the exchange.
    ///
    /// A blank question is rejected before anything is recorded. Remote
    /// failures become an apology message, never an error.
    pub async fn ask(&mut self, api: &dyn SalesApi, question: &str) -> Result<Option<&ChatMessage>> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }
        self.transcript.push(ChatMessage::user(question));

        let reply = match self.gate.load(|| api.ask(question)).await {
            LoadOutcome::Fresh(Some(answer)) => ChatMessage::assistant(&answer, false),
            LoadOutcome::Fresh(None) => ChatMessage::assistant(NO_ANSWER, false),
            LoadOutcome::Failed(err) => {
                log::warn!("chat request failed: {}", err);
                ChatMessage::assistant(APOLOGY, true)
            }
            LoadOutcome::Superseded => return Ok(None),
        };
        self.transcript.push(reply);
        Ok(self.transcript.last())
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn load_state(&self) -> LoadState {
        self.gate.state()
    }

    pub fn is_waiting(&self) -> bool {
        self.gate.state().is_loading()
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
