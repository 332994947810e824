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

//! # Corpus Combiner
//!
//! Drains every registered source adapter into a single record stream,
//! deduplicates it, and reports the resulting label distribution. An
//! adapter whose input file is missing is skipped with a warning and
//! listed in the report; the combiner fails outright only when *no*
//! adapter yields records, since an empty corpus is unusable downstream.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::adapters::CfSourceAdapter;
use crate::dedup::{CfDedupStats, CfDeduplicator};
use crate::errors::{CfError, Result};
use crate::record::{CfRecord, CfRecordBatch};
use crate::report::CfLabelDistribution;

/// Per-source ingest counters.
#[derive(Clone, Debug, Serialize)]
pub struct CfSourceStats {
    pub source: String,
    pub loaded: usize,
    pub skipped_entries: usize,
}

/// Everything the combiner learned while assembling the corpus.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CfCombineReport {
    pub sources: Vec<CfSourceStats>,
    /// Adapters skipped because their input was missing or unreadable.
    pub failed_sources: Vec<String>,
    pub dedup: CfDedupStats,
    pub distribution: CfLabelDistribution,
}

/// Assembles the unified corpus from heterogeneous sources.
#[derive(Default)]
pub struct CfCombiner {
    adapters: Vec<Box<dyn CfSourceAdapter>>,
    deduplicator: CfDeduplicator,
}

impl CfCombiner {
    pub fn new() -> Self {
        CfCombiner {
            adapters: Vec::new(),
            deduplicator: CfDeduplicator::default(),
        }
    }

    pub fn with_deduplicator(mut self, deduplicator: CfDeduplicator) -> Self {
        self.deduplicator = deduplicator;
        self
    }

    pub fn add_adapter(mut self, adapter: impl CfSourceAdapter + 'static) -> Self {
        self.adapters.push(Box::new(adapter));
        self
    }

    /// Loads all adapters, concatenates their streams in registration
    /// order, then deduplicates. First registration wins on duplicates
    /// across sources.
    pub fn combine(&self) -> Result<(CfRecordBatch, CfCombineReport)> {
        let mut all = CfRecordBatch::new();
        let mut report = CfCombineReport::default();

        for adapter in &self.adapters {
            match adapter.load() {
                Ok(output) => {
                    report.sources.push(CfSourceStats {
                        source: adapter.name().to_string(),
                        loaded: output.records.len(),
                        skipped_entries: output.skipped,
                    });
                    all.extend(output.records);
                }
                Err(err) => {
                    log::warn!("combine: skipping source '{}': {}", adapter.name(), err);
                    report.failed_sources.push(adapter.name().to_string());
                }
            }
        }

        if all.is_empty() {
            return Err(CfError::pipeline(
                "combine",
                "no adapter produced any records",
            ));
        }

        let (deduped, stats) = self.deduplicator.apply(all);
        report.dedup = stats;
        report.distribution = CfLabelDistribution::compute(&deduped);
        report.distribution.log_summary("combine");
        Ok((deduped, report))
    }
}

/// Flat record of the derived binary view. `label` is 0 for SAFE and 1
/// for every grooming stage; `stage` retains the canonical label so the
/// projection stays reversible.
#[derive(Clone, Debug, Serialize)]
pub struct CfBinaryRecord {
    pub text: String,
    pub label: u8,
    pub stage: String,
    pub source: String,
}

/// Derives the read-only binary projection of a corpus. The six-stage
/// records themselves are never rewritten.
pub fn to_binary(corpus: &[CfRecord]) -> Vec<CfBinaryRecord> {
    corpus
        .iter()
        .map(|record| CfBinaryRecord {
            text: record.text.clone(),
            label: record.label.binary(),
            stage: record.label.as_str().to_string(),
            source: record.source.clone(),
        })
        .collect()
}

/// Seeded downsample capping the corpus at `per_class` records per
/// binary class. Records beyond the cap are dropped uniformly at
/// random; classes already at or under the cap are kept whole.
pub fn sample_balanced_binary(
    corpus: &[CfRecord],
    per_class: usize,
    seed: u64,
) -> Result<CfRecordBatch> {
    if per_class == 0 {
        return Err(CfError::validation("per-class cap must be positive"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut safe: Vec<CfRecord> = corpus
        .iter()
        .filter(|record| record.label.is_safe())
        .cloned()
        .collect();
    let mut grooming: Vec<CfRecord> = corpus
        .iter()
        .filter(|record| !record.label.is_safe())
        .cloned()
        .collect();

    for class in [&mut safe, &mut grooming] {
        if class.len() > per_class {
            class.shuffle(&mut rng);
            class.truncate(per_class);
        }
    }

    let mut sampled = safe;
    sampled.extend(grooming);
    sampled.shuffle(&mut rng);
    log::info!(
        "balanced sample: {} records at cap {} per binary class",
        sampled.len(),
        per_class
    );
    Ok(sampled)
}
