//! Copyright © 2025-2026 Corpusforge Team. All Rights Reserved.
//!
//! This file is part of Corpusforge.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Corpus Record Module
//!
//! This module provides the core data structure for a single labeled
//! text sample flowing through the assembly pipeline.
//!
//! ## Lifecycle
//!
//! Records are created by source adapters, labeled at creation (either
//! taken from the source or assigned by the stage classifier), and may
//! later give rise to derived augmented records appended by the
//! balancer. An existing record is never mutated after creation; the
//! deduplicator and splitter only move or drop whole records.
//!
//! ## Persisted form
//!
//! The serialized shape matches the training-side contract: `text`,
//! `label`, `source` always present; `augmented`, `augmentation_method`,
//! `conversation_id`, `is_predator_author`, `context`, and `timestamp`
//! only when set. Non-ASCII text is persisted unescaped.

use serde::{Deserialize, Serialize};

use crate::label::CfStageLabel;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single labeled text sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CfRecord {
    /// The message or conversation text.
    pub text: String,

    /// Canonical six-stage label.
    pub label: CfStageLabel,

    /// Origin tag naming the adapter that produced the record.
    pub source: String,

    /// True for records synthesized by the balancer.
    #[serde(default, skip_serializing_if = "is_false")]
    pub augmented: bool,

    /// Augmentation method name when `augmented` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub augmentation_method: Option<String>,

    /// Conversation the text was extracted from, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// Whether the author is listed in the predator registry. `None`
    /// for sources without author attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_predator_author: Option<bool>,

    /// Up to the last few prior message texts from the same
    /// conversation, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,

    /// Original message time, carried through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CfRecord {
    /// Constructs a record with the mandatory fields.
    pub fn new(
        text: impl Into<String>,
        label: CfStageLabel,
        source: impl Into<String>,
    ) -> Self {
        CfRecord {
            text: text.into(),
            label,
            source: source.into(),
            augmented: false,
            augmentation_method: None,
            conversation_id: None,
            is_predator_author: None,
            context: None,
            timestamp: None,
        }
    }

    /// Attaches conversation provenance.
    pub fn with_conversation(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    /// Marks predator attribution.
    pub fn with_predator_author(mut self, is_predator: bool) -> Self {
        self.is_predator_author = Some(is_predator);
        self
    }

    /// Attaches the prior-message context window.
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        if !context.is_empty() {
            self.context = Some(context);
        }
        self
    }

    /// Attaches the original message time.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Derives an augmented copy carrying the given candidate text.
    /// The label and provenance are inherited; the context window is
    /// not, since the synthesized text no longer belongs to the
    /// original conversation flow.
    pub fn derive_augmented(&self, text: String, method: &str) -> Self {
        CfRecord {
            text,
            label: self.label,
            source: self.source.clone(),
            augmented: true,
            augmentation_method: Some(method.to_string()),
            conversation_id: self.conversation_id.clone(),
            is_predator_author: self.is_predator_author,
            context: None,
            timestamp: None,
        }
    }

    /// Normalized text used for deduplication and the uniqueness
    /// assertion: trimmed and lower-cased.
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// Convenience alias for an ordered corpus of records.
pub type CfRecordBatch = Vec<CfRecord>;
