//! Session-scoped key/value storage.
//!
//! A [`SessionStore`] is created when a dashboard session starts and cleared
//! when it ends. Components persist into it explicitly; nothing global.

use crate::{prelude::HashMap, Result};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    items: HashMap<String, String>,
    ended: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Stores `value`; ignored once the session has ended
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if self.ended {
            log::debug!("session ended, not storing item");
            return;
        }
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// Serializes `value` as JSON under `key`
    pub fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.set_item(key, json);
        Ok(())
    }

    /// Reads a JSON value stored by [`SessionStore::save_json`]
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_item(key)
            .map(|json| serde_json::from_str::<T>(json))
            .transpose()
            .map_err(Into::into)
    }

    /// Ends the session and drops everything stored in it
    pub fn end(&mut self) {
        log::debug!("ending session, clearing {} item(s)", self.items.len());
        self.items.clear();
        self.ended = true;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
