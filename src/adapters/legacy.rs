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

//! # Legacy / Translated JSON Adapter
//!
//! Loads previously produced JSON corpora (including translated sets).
//! Six-stage string labels pass through unchanged. Binary labels are
//! remapped to the canonical taxonomy: `0` becomes `SAFE`; `1` is
//! re-classified through the shared stage classifier with
//! `is_predator_author` assumed true, since a binary positive implies a
//! grooming attribution but carries no stage information and must not
//! be trusted verbatim.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::adapters::{CfAdapterOutput, CfSourceAdapter};
use crate::classify::CfStageClassifier;
use crate::errors::{CfError, Result};
use crate::label::CfStageLabel;
use crate::record::CfRecord;

const ADAPTER_NAME: &str = "legacy_json";

pub struct CfLegacyJsonAdapter {
    path: PathBuf,
    classifier: CfStageClassifier,
}

impl CfLegacyJsonAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CfLegacyJsonAdapter {
            path: path.into(),
            classifier: CfStageClassifier::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: CfStageClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    fn parse_entry(&self, entry: &Value) -> Option<CfRecord> {
        let obj = entry.as_object()?;
        let text = obj.get("text")?.as_str()?.trim();
        if text.is_empty() {
            return None;
        }

        let label = match obj.get("label") {
            Some(Value::String(stage)) => stage.parse::<CfStageLabel>().ok()?,
            Some(Value::Number(binary)) => match binary.as_u64() {
                Some(0) => CfStageLabel::Safe,
                Some(1) => self.classifier.classify(text, true),
                _ => return None,
            },
            _ => return None,
        };

        let mut record = CfRecord::new(text, label, ADAPTER_NAME);
        if let Some(id) = obj.get("conversation_id").and_then(Value::as_str) {
            record = record.with_conversation(id);
        }
        if let Some(is_predator) = obj.get("is_predator_author").and_then(Value::as_bool) {
            record = record.with_predator_author(is_predator);
        }
        if obj.get("augmented").and_then(Value::as_bool) == Some(true) {
            record.augmented = true;
            record.augmentation_method = obj
                .get("augmentation_method")
                .and_then(Value::as_str)
                .map(str::to_string);
        }
        Some(record)
    }

    fn load_from(&self, path: &Path) -> Result<CfAdapterOutput> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            CfError::missing_source(ADAPTER_NAME, path.display().to_string())
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|err| {
            CfError::adapter(ADAPTER_NAME, format!("invalid JSON: {}", err))
        })?;
        let entries = value.as_array().ok_or_else(|| {
            CfError::adapter(ADAPTER_NAME, "top-level JSON must be an array")
        })?;

        let mut output = CfAdapterOutput::default();
        for (index, entry) in entries.iter().enumerate() {
            match self.parse_entry(entry) {
                Some(record) => output.records.push(record),
                None => {
                    output.skipped += 1;
                    log::warn!("legacy_json: skipping malformed entry {}", index);
                }
            }
        }

        log::info!(
            "legacy_json: {} records, {} skipped from {}",
            output.records.len(),
            output.skipped,
            path.display()
        );
        Ok(output)
    }
}

impl CfSourceAdapter for CfLegacyJsonAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn load(&self) -> Result<CfAdapterOutput> {
        self.load_from(&self.path)
    }
}
