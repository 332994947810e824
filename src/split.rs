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

//! # Stratified Splitter
//!
//! Partitions a corpus into train and test sets label by label so the
//! class distribution survives the split. Each label group is shuffled
//! with the configured seed and cut at `floor(count × ratio)`; a label
//! with fewer than two records cannot be represented on both sides and
//! is pinned whole to the training set.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::errors::{CfError, Result};
use crate::label::CfStageLabel;
use crate::record::{CfRecord, CfRecordBatch};

/// Split parameters.
#[derive(Clone, Copy, Debug)]
pub struct CfSplitConfig {
    /// Fraction of each label group assigned to train, in (0, 1).
    pub train_ratio: f64,
    pub seed: u64,
}

impl CfSplitConfig {
    pub fn new(train_ratio: f64, seed: u64) -> Self {
        CfSplitConfig { train_ratio, seed }
    }
}

impl Default for CfSplitConfig {
    fn default() -> Self {
        CfSplitConfig::new(0.8, 42)
    }
}

/// A stratified train/test partition.
#[derive(Clone, Debug, Default)]
pub struct CfSplit {
    pub train: CfRecordBatch,
    pub test: CfRecordBatch,
    /// Labels too small to stratify, pinned whole to train.
    pub pinned_labels: Vec<CfStageLabel>,
}

/// Seeded stratified splitter.
pub struct CfSplitter {
    config: CfSplitConfig,
}

impl CfSplitter {
    pub fn new(config: CfSplitConfig) -> Self {
        CfSplitter { config }
    }

    pub fn split(&self, corpus: CfRecordBatch) -> Result<CfSplit> {
        if !(self.config.train_ratio > 0.0 && self.config.train_ratio < 1.0) {
            return Err(CfError::validation(format!(
                "train ratio must be in (0, 1), got {}",
                self.config.train_ratio
            )));
        }

        // BTreeMap keyed by label keeps group iteration in canonical
        // order, so one seed yields one partition.
        let mut groups: BTreeMap<CfStageLabel, Vec<CfRecord>> = BTreeMap::new();
        for record in corpus {
            groups.entry(record.label).or_default().push(record);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut split = CfSplit::default();

        for (label, mut group) in groups {
            if group.len() < 2 {
                log::warn!(
                    "split: label {} has {} record(s), pinning to train",
                    label,
                    group.len()
                );
                split.pinned_labels.push(label);
                split.train.append(&mut group);
                continue;
            }

            group.shuffle(&mut rng);
            let train_count = (group.len() as f64 * self.config.train_ratio) as usize;
            let test_part = group.split_off(train_count);
            log::info!(
                "split: {} -> {} train / {} test",
                label,
                group.len(),
                test_part.len()
            );
            split.train.extend(group);
            split.test.extend(test_part);
        }

        Ok(split)
    }
}
