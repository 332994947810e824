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

use corpusforge::label::CfStageLabel;
use corpusforge::record::{CfRecord, CfRecordBatch};
use corpusforge::split::{CfSplitConfig, CfSplitter};

use proptest::prelude::*;

fn batch(label: CfStageLabel, count: usize) -> CfRecordBatch {
    (0..count)
        .map(|index| CfRecord::new(format!("{} text {}", label, index), label, "t"))
        .collect()
}

#[test]
fn stratified_counts_use_floor_of_ratio() {
    let mut corpus = batch(CfStageLabel::Safe, 100);
    corpus.extend(batch(CfStageLabel::Isolation, 20));

    let split = CfSplitter::new(CfSplitConfig::new(0.8, 42))
        .split(corpus)
        .unwrap();

    let train_safe = split
        .train
        .iter()
        .filter(|r| r.label == CfStageLabel::Safe)
        .count();
    let train_isolation = split
        .train
        .iter()
        .filter(|r| r.label == CfStageLabel::Isolation)
        .count();
    assert_eq!(train_safe, 80);
    assert_eq!(train_isolation, 16);
    assert_eq!(split.test.len(), 24);
}

#[test]
fn odd_group_sizes_floor_toward_test() {
    // floor(7 × 0.8) = 5 train, 2 test.
    let split = CfSplitter::new(CfSplitConfig::new(0.8, 1))
        .split(batch(CfStageLabel::Trust, 7))
        .unwrap();
    assert_eq!(split.train.len(), 5);
    assert_eq!(split.test.len(), 2);
}

#[test]
fn singleton_labels_are_pinned_to_train_and_flagged() {
    let mut corpus = batch(CfStageLabel::Safe, 50);
    corpus.extend(batch(CfStageLabel::Sexual, 1));

    let split = CfSplitter::new(CfSplitConfig::default())
        .split(corpus)
        .unwrap();

    assert_eq!(split.pinned_labels, vec![CfStageLabel::Sexual]);
    assert_eq!(
        split
            .train
            .iter()
            .filter(|r| r.label == CfStageLabel::Sexual)
            .count(),
        1
    );
    assert!(split.test.iter().all(|r| r.label != CfStageLabel::Sexual));
}

#[test]
fn seed_controls_the_partition() {
    let make = || {
        let mut corpus = batch(CfStageLabel::Safe, 40);
        corpus.extend(batch(CfStageLabel::Needs, 10));
        corpus
    };

    let a = CfSplitter::new(CfSplitConfig::new(0.8, 7)).split(make()).unwrap();
    let b = CfSplitter::new(CfSplitConfig::new(0.8, 7)).split(make()).unwrap();
    let c = CfSplitter::new(CfSplitConfig::new(0.8, 8)).split(make()).unwrap();

    assert_eq!(a.train, b.train);
    assert_eq!(a.test, b.test);
    // A different seed reshuffles group membership but not the counts.
    assert_ne!(a.train, c.train);
    assert_eq!(a.train.len(), c.train.len());
}

#[test]
fn bad_ratios_are_rejected() {
    for ratio in [0.0, 1.0, 1.5, -0.2] {
        let splitter = CfSplitter::new(CfSplitConfig::new(ratio, 42));
        assert!(splitter.split(Vec::new()).is_err(), "ratio {}", ratio);
    }
}

proptest! {
    // Partition property: every input record lands on exactly one side.
    #[test]
    fn split_is_a_partition(
        safe in 0usize..60,
        trust in 0usize..30,
        sexual in 0usize..30,
        seed in 0u64..1000,
    ) {
        let mut corpus = batch(CfStageLabel::Safe, safe);
        corpus.extend(batch(CfStageLabel::Trust, trust));
        corpus.extend(batch(CfStageLabel::Sexual, sexual));
        let expected: HashSet<String> =
            corpus.iter().map(|r| r.text.clone()).collect();
        let total = corpus.len();

        let split = CfSplitter::new(CfSplitConfig::new(0.8, seed))
            .split(corpus)
            .unwrap();

        prop_assert_eq!(split.train.len() + split.test.len(), total);
        let mut seen: HashSet<String> = HashSet::new();
        for record in split.train.iter().chain(split.test.iter()) {
            prop_assert!(seen.insert(record.text.clone()), "duplicated record");
        }
        prop_assert_eq!(seen, expected);
    }
}
