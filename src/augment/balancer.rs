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

//! # Label Balancer
//!
//! Tops up each under-represented grooming label toward a per-label
//! target by appending derived records. Balancing is append-only:
//! existing records are never removed, so a label above the target is
//! left as-is. Candidate texts come from guarded transformations of
//! non-augmented source records; a candidate is accepted only when its
//! normalized text is not already present in the corpus, which covers
//! both no-op transformations and collisions between attempts. The
//! attempt budget bounds the loop so a synonym-poor label cannot spin
//! forever.

use std::collections::HashSet;

use rand::rngs::{SmallRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::augment::synonym::CfSynonymTable;
use crate::augment::translate::CfTranslator;
use crate::augment::CfAugmentationMethod;
use crate::errors::{CfError, Result};
use crate::label::CfStageLabel;
use crate::record::{CfRecord, CfRecordBatch};

/// Balancing parameters.
#[derive(Clone, Copy, Debug)]
pub struct CfBalanceConfig {
    /// Desired minimum record count per grooming label.
    pub target_per_label: usize,
    /// Attempt budget per label: `attempt_factor × deficit`.
    pub attempt_factor: usize,
    /// Seed for method choice, source sampling, and the final shuffle.
    pub seed: u64,
}

impl CfBalanceConfig {
    pub fn new(target_per_label: usize, seed: u64) -> Self {
        CfBalanceConfig {
            target_per_label,
            attempt_factor: 10,
            seed,
        }
    }
}

impl Default for CfBalanceConfig {
    fn default() -> Self {
        CfBalanceConfig::new(150, 42)
    }
}

/// Per-label balancing outcome.
#[derive(Clone, Debug)]
pub struct CfLabelOutcome {
    pub label: CfStageLabel,
    /// Count before balancing.
    pub before: usize,
    /// Derived records appended.
    pub added: usize,
    /// Remaining deficit when the attempt budget ran out.
    pub shortfall: usize,
    /// Candidate generation attempts consumed.
    pub attempts: usize,
}

/// Outcome across all grooming labels.
#[derive(Clone, Debug, Default)]
pub struct CfBalanceReport {
    pub outcomes: Vec<CfLabelOutcome>,
}

impl CfBalanceReport {
    pub fn total_added(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.added).sum()
    }

    pub fn has_shortfall(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.shortfall > 0)
    }
}

/// Appends derived records until each grooming label reaches the
/// configured target, then shuffles the whole corpus with the
/// configured seed.
pub struct CfBalancer<'a> {
    config: CfBalanceConfig,
    synonyms: &'a CfSynonymTable,
    translator: Option<&'a dyn CfTranslator>,
}

impl<'a> CfBalancer<'a> {
    pub fn new(config: CfBalanceConfig, synonyms: &'a CfSynonymTable) -> Self {
        CfBalancer {
            config,
            synonyms,
            translator: None,
        }
    }

    /// Enables round-trip translation as a second candidate method.
    pub fn with_translator(mut self, translator: &'a dyn CfTranslator) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn balance(&self, mut corpus: CfRecordBatch) -> Result<(CfRecordBatch, CfBalanceReport)> {
        if self.config.target_per_label == 0 {
            return Err(CfError::validation("balance target must be positive"));
        }

        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut report = CfBalanceReport::default();
        let mut seen: HashSet<String> = corpus
            .iter()
            .map(|record| record.normalized_text())
            .collect();

        for label in CfStageLabel::SCORING_ORDER {
            // Only original records seed transformations; chaining
            // augmented text through further transformations compounds
            // drift away from plausible chat language.
            let sources: Vec<CfRecord> = corpus
                .iter()
                .filter(|record| record.label == label && !record.augmented)
                .cloned()
                .collect();
            let before = corpus
                .iter()
                .filter(|record| record.label == label)
                .count();

            if before >= self.config.target_per_label || sources.is_empty() {
                if before < self.config.target_per_label {
                    log::warn!(
                        "balance: no source records for {}, leaving at {}",
                        label,
                        before
                    );
                }
                report.outcomes.push(CfLabelOutcome {
                    label,
                    before,
                    added: 0,
                    shortfall: self.config.target_per_label.saturating_sub(before),
                    attempts: 0,
                });
                continue;
            }

            let deficit = self.config.target_per_label - before;
            let budget = self.config.attempt_factor * deficit;
            let mut added = 0;
            let mut attempts = 0;

            while added < deficit && attempts < budget {
                attempts += 1;
                let source = &sources[rng.gen_range(0..sources.len())];
                let (candidate, method) = self.generate_candidate(&source.text, &mut rng);
                let derived = source.derive_augmented(candidate, method.as_str());
                if seen.insert(derived.normalized_text()) {
                    corpus.push(derived);
                    added += 1;
                }
            }

            let shortfall = deficit - added;
            if shortfall > 0 {
                log::warn!(
                    "balance: {} short by {} after {} attempts",
                    label,
                    shortfall,
                    attempts
                );
            } else {
                log::info!("balance: {} topped up with {} records", label, added);
            }
            report.outcomes.push(CfLabelOutcome {
                label,
                before,
                added,
                shortfall,
                attempts,
            });
        }

        corpus.shuffle(&mut StdRng::seed_from_u64(self.config.seed));
        Ok((corpus, report))
    }

    /// One translation attempt in three when a translator is present,
    /// synonym substitution otherwise. A failed round trip falls back
    /// to the original text, which the acceptance rule then rejects.
    fn generate_candidate(
        &self,
        text: &str,
        rng: &mut SmallRng,
    ) -> (String, CfAugmentationMethod) {
        if let Some(translator) = self.translator {
            if rng.gen_range(0..3) == 0 {
                let round_trip = translator
                    .translate(text, "de", "en")
                    .and_then(|english| translator.translate(&english, "en", "de"));
                return match round_trip {
                    Ok(back) => (back, CfAugmentationMethod::RoundTripTranslation),
                    Err(err) => {
                        log::warn!("balance: round trip failed, skipping: {}", err);
                        (text.to_string(), CfAugmentationMethod::RoundTripTranslation)
                    }
                };
            }
        }
        (
            self.synonyms.substitute(text, rng),
            CfAugmentationMethod::SynonymSubstitution,
        )
    }
}
