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

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::{CfError, Result};
use crate::record::CfRecordBatch;

/// Minimum normalized length a record must have to survive.
pub const DEFAULT_MIN_CHARS: usize = 10;

/// Counters reported after a dedup pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CfDedupStats {
    pub kept: usize,
    pub dropped_duplicate: usize,
    pub dropped_short: usize,
}

impl CfDedupStats {
    pub fn dropped(&self) -> usize {
        self.dropped_duplicate + self.dropped_short
    }
}

/// Exact deduplication over normalized (trimmed, lower-cased) text.
///
/// The first-seen record wins on any duplicate; order is otherwise
/// preserved. Records whose normalized text is shorter than the
/// threshold are dropped as near-empty noise.
#[derive(Debug)]
pub struct CfDeduplicator {
    min_chars: usize,
}

impl Default for CfDeduplicator {
    fn default() -> Self {
        CfDeduplicator {
            min_chars: DEFAULT_MIN_CHARS,
        }
    }
}

impl CfDeduplicator {
    pub fn with_min_chars(min_chars: usize) -> Self {
        CfDeduplicator { min_chars }
    }

    pub fn apply(&self, batch: CfRecordBatch) -> (CfRecordBatch, CfDedupStats) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::with_capacity(batch.len());
        let mut stats = CfDedupStats::default();

        for record in batch {
            let normalized = record.normalized_text();
            if normalized.chars().count() < self.min_chars {
                stats.dropped_short += 1;
                continue;
            }
            if !seen.insert(normalized) {
                stats.dropped_duplicate += 1;
                continue;
            }
            out.push(record);
        }

        stats.kept = out.len();
        log::info!(
            "dedup: kept {} records, dropped {} duplicates, {} too short",
            stats.kept,
            stats.dropped_duplicate,
            stats.dropped_short
        );
        (out, stats)
    }
}

/// Pre-persist uniqueness assertion. A violation here means an earlier
/// stage reintroduced a duplicate and is a non-recoverable pipeline
/// defect.
pub fn verify_unique<'a>(
    batches: impl IntoIterator<Item = &'a CfRecordBatch>,
) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();
    for batch in batches {
        for record in batch {
            let normalized = record.normalized_text();
            if !seen.insert(normalized.clone()) {
                return Err(CfError::internal(format!(
                    "duplicate normalized text reached persistence: '{}'",
                    normalized
                )));
            }
        }
    }
    Ok(())
}
