//! Thoughts service
//!
//! High-level business logic for the thought board.
//! Validates submissions, stamps them, and hands them to the store.

use crate::error::{AppError, Result};
use crate::models::{StoredItem, SubmittedThought, Thought};
use crate::services::validator;
use crate::storage::ThoughtStore;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service for listing and submitting thoughts
#[derive(Clone)]
pub struct ThoughtsService {
    store: ThoughtStore,
}

impl ThoughtsService {
    pub fn new(store: ThoughtStore) -> Self {
        Self { store }
    }

    /// All stored entries, oldest first
    pub async fn list_thoughts(&self) -> Vec<StoredItem> {
        self.store.load().await.items
    }

    /// Validate and persist a submission
    pub async fn submit_thought(&self, submitted: SubmittedThought) -> Result<Thought> {
        if let Some(reason) = validator::spam_reason(&submitted.name, &submitted.text) {
            tracing::debug!("Rejected thought: {}", reason);
            return Err(AppError::Validation(reason.to_string()));
        }

        let thought = Thought {
            name: submitted.name,
            text: collapse_whitespace(&submitted.text),
            theme: submitted.theme,
            ts: Utc::now().timestamp_millis(),
        };

        let thought = self.store.append(thought).await?;

        tracing::info!("Accepted thought ({}) at {}", thought.theme, thought.ts);

        Ok(thought)
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}
