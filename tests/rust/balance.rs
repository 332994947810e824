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

use corpusforge::augment::{CfBalanceConfig, CfBalancer, CfSynonymTable, CfTranslator};
use corpusforge::dedup::verify_unique;
use corpusforge::errors::Result;
use corpusforge::label::CfStageLabel;
use corpusforge::record::{CfRecord, CfRecordBatch};
use corpusforge::report::CfLabelDistribution;

fn seed_corpus() -> CfRecordBatch {
    let mut corpus = CfRecordBatch::new();
    for index in 0..30 {
        corpus.push(CfRecord::new(
            format!("ganz normaler schulchat nummer {}", index),
            CfStageLabel::Safe,
            "synthetic",
        ));
    }
    for text in [
        "das bleibt unser geheimnis okay",
        "sag niemandem davon, du bist allein",
        "ich schicken dir ein geschenk als geheimnis",
    ] {
        corpus.push(CfRecord::new(text, CfStageLabel::Isolation, "curated"));
    }
    for text in ["du bist so besonders und reif", "nur du kannst mich verstehen"] {
        corpus.push(CfRecord::new(text, CfStageLabel::Trust, "curated"));
    }
    corpus
}

#[test]
fn deficient_labels_are_topped_up_to_the_target() {
    let synonyms = CfSynonymTable::default_german();
    let balancer = CfBalancer::new(CfBalanceConfig::new(6, 42), &synonyms);
    let (balanced, report) = balancer.balance(seed_corpus()).unwrap();

    let distribution = CfLabelDistribution::compute(&balanced);
    assert_eq!(distribution.count(CfStageLabel::Isolation), 6);
    assert_eq!(distribution.count(CfStageLabel::Trust), 6);
    // SAFE is not a balancing target and stays untouched.
    assert_eq!(distribution.count(CfStageLabel::Safe), 30);
    assert_eq!(report.total_added(), 7);
}

#[test]
fn augmented_output_stays_duplicate_free() {
    let synonyms = CfSynonymTable::default_german();
    let balancer = CfBalancer::new(CfBalanceConfig::new(6, 42), &synonyms);
    let (balanced, _) = balancer.balance(seed_corpus()).unwrap();
    assert!(verify_unique([&balanced]).is_ok());
}

#[test]
fn balancing_is_append_only() {
    let corpus = seed_corpus();
    let originals: Vec<String> = corpus.iter().map(|r| r.text.clone()).collect();

    let synonyms = CfSynonymTable::default_german();
    let balancer = CfBalancer::new(CfBalanceConfig::new(6, 42), &synonyms);
    let (balanced, _) = balancer.balance(corpus).unwrap();

    for text in originals {
        assert!(
            balanced.iter().any(|record| record.text == text),
            "original record lost: {}",
            text
        );
    }
}

#[test]
fn attempt_budget_caps_work_and_shortfall_is_reported() {
    // No synonym-table word appears, so every candidate is a no-op.
    let corpus = vec![CfRecord::new(
        "willst du robux haben",
        CfStageLabel::Needs,
        "curated",
    )];
    let synonyms = CfSynonymTable::default_german();
    let balancer = CfBalancer::new(CfBalanceConfig::new(4, 42), &synonyms);
    let (balanced, report) = balancer.balance(corpus).unwrap();

    assert_eq!(balanced.len(), 1);
    assert!(report.has_shortfall());
    let needs = report
        .outcomes
        .iter()
        .find(|outcome| outcome.label == CfStageLabel::Needs)
        .unwrap();
    assert_eq!(needs.shortfall, 3);
    assert_eq!(needs.attempts, 30);
}

#[test]
fn same_seed_same_corpus() {
    let synonyms = CfSynonymTable::default_german();
    let balancer = CfBalancer::new(CfBalanceConfig::new(6, 42), &synonyms);
    let (first, _) = balancer.balance(seed_corpus()).unwrap();
    let (second, _) = balancer.balance(seed_corpus()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn round_trip_translation_contributes_candidates() {
    struct TaggingTranslator;
    impl CfTranslator for TaggingTranslator {
        fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String> {
            Ok(format!("{} ({})", text, target))
        }
    }

    let corpus = vec![CfRecord::new(
        "bist du gerade ganz zuhause",
        CfStageLabel::Assessment,
        "curated",
    )];
    let synonyms = CfSynonymTable::default_german();
    let translator = TaggingTranslator;
    let balancer = CfBalancer::new(CfBalanceConfig::new(4, 42), &synonyms)
        .with_translator(&translator);
    let (balanced, _) = balancer.balance(corpus).unwrap();

    // The translator is deterministic, so only one distinct round-trip
    // candidate exists and the duplicate guard admits it exactly once.
    let round_trips = balanced
        .iter()
        .filter(|record| {
            record.augmentation_method.as_deref() == Some("round_trip_translation")
        })
        .count();
    assert_eq!(round_trips, 1);
}

#[test]
fn failing_translator_degrades_to_shortfall_not_error() {
    struct BrokenTranslator;
    impl CfTranslator for BrokenTranslator {
        fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
            Err(corpusforge::errors::CfError::translation("service down"))
        }
    }

    // Source text has no synonym-table words either, so no method can
    // produce an accepted candidate.
    let corpus = vec![CfRecord::new(
        "kommst du morgen zum sport",
        CfStageLabel::Trust,
        "curated",
    )];
    let synonyms = CfSynonymTable::default_german();
    let translator = BrokenTranslator;
    let balancer = CfBalancer::new(CfBalanceConfig::new(3, 42), &synonyms)
        .with_translator(&translator);

    let (balanced, report) = balancer.balance(corpus).unwrap();
    assert_eq!(balanced.len(), 1);
    assert!(report.has_shortfall());
}
