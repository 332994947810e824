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

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::label::CfStageLabel;
use crate::record::CfRecord;

/// Per-label count summary, queryable at any pipeline stage.
///
/// This is the reporting side-channel of the pipeline; it is logged,
/// embedded in the export manifest, and never part of the persisted
/// corpus arrays themselves.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CfLabelDistribution {
    counts: BTreeMap<CfStageLabel, usize>,
    total: usize,
}

impl CfLabelDistribution {
    pub fn compute(records: &[CfRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for record in records {
            *counts.entry(record.label).or_insert(0) += 1;
        }
        CfLabelDistribution {
            counts,
            total: records.len(),
        }
    }

    pub fn count(&self, label: CfStageLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Labels present in the corpus, in canonical order.
    pub fn labels(&self) -> impl Iterator<Item = CfStageLabel> + '_ {
        self.counts.keys().copied()
    }

    /// Count of records that project to binary grooming (non-SAFE).
    pub fn grooming_total(&self) -> usize {
        self.total - self.count(CfStageLabel::Safe)
    }

    /// Logs the distribution under a stage name.
    pub fn log_summary(&self, stage: &str) {
        log::info!("{}: {} records total", stage, self.total);
        for (label, count) in &self.counts {
            let share = if self.total > 0 {
                *count as f64 / self.total as f64 * 100.0
            } else {
                0.0
            };
            log::info!("{}:   {}: {} ({:.1}%)", stage, label, count, share);
        }
    }
}

impl fmt::Display for CfLabelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total: {}", self.total)?;
        for (label, count) in &self.counts {
            let share = if self.total > 0 {
                *count as f64 / self.total as f64 * 100.0
            } else {
                0.0
            };
            writeln!(f, "  {}: {} ({:.1}%)", label, count, share)?;
        }
        Ok(())
    }
}
