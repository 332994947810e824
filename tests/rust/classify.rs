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

use corpusforge::classify::{CfPatternTable, CfStageClassifier};
use corpusforge::label::CfStageLabel;

use proptest::prelude::*;

#[test]
fn predator_guard_dominates_keyword_hits() {
    let classifier = CfStageClassifier::default();
    // Heavy grooming vocabulary, but without predator attribution the
    // text never scores.
    let loaded = "schick mir ein bild, das bleibt unser geheimnis, bist du allein?";
    assert_eq!(classifier.classify(loaded, false), CfStageLabel::Safe);
    assert_ne!(classifier.classify(loaded, true), CfStageLabel::Safe);
}

#[test]
fn isolation_wins_the_documented_tie() {
    let classifier = CfStageClassifier::default();
    assert_eq!(
        classifier.classify("Bist du allein zuhause? Sag niemandem davon.", true),
        CfStageLabel::Isolation
    );
}

#[test]
fn stage_vocabulary_maps_to_the_expected_labels() {
    let classifier = CfStageClassifier::default();
    let cases = [
        ("du bist so reif für dein alter", CfStageLabel::Trust),
        ("i have a gift for you", CfStageLabel::Needs),
        ("this is our secret", CfStageLabel::Isolation),
        ("are you alone right now", CfStageLabel::Assessment),
        ("send me a picture", CfStageLabel::Sexual),
        ("wann ist das fußballtraining?", CfStageLabel::Safe),
    ];
    for (text, expected) in cases {
        assert_eq!(classifier.classify(text, true), expected, "text: {}", text);
    }
}

#[test]
fn matching_is_case_insensitive_via_lowering() {
    let classifier = CfStageClassifier::default();
    assert_eq!(
        classifier.classify("SCHICK MIR DEIN BILD", true),
        classifier.classify("schick mir dein bild", true)
    );
}

#[test]
fn custom_table_replaces_the_default() {
    let table = CfPatternTable::compile(&[
        (CfStageLabel::Needs, &[r"\b(gutschein)\b"] as &[&str]),
        (CfStageLabel::Sexual, &[r"\b(cam)\b"] as &[&str]),
    ])
    .unwrap();
    let classifier = CfStageClassifier::new(table);

    assert_eq!(
        classifier.classify("ich hab einen gutschein für dich", true),
        CfStageLabel::Needs
    );
    // Default vocabulary is gone.
    assert_eq!(
        classifier.classify("schick mir dein bild", true),
        CfStageLabel::Safe
    );
}

#[test]
fn injected_table_order_does_not_change_the_tie_break() {
    // ASSESSMENT declared before NEEDS; a one-hit-each tie must still
    // resolve to NEEDS, the earlier canonical stage.
    let table = CfPatternTable::compile(&[
        (CfStageLabel::Assessment, &[r"\b(eltern)\b"] as &[&str]),
        (CfStageLabel::Needs, &[r"\b(geschenk)\b"] as &[&str]),
    ])
    .unwrap();
    let classifier = CfStageClassifier::new(table);
    assert_eq!(
        classifier.classify("ein geschenk wenn deine eltern weg sind", true),
        CfStageLabel::Needs
    );
}

#[test]
fn invalid_patterns_fail_at_compile_time() {
    let result = CfPatternTable::compile(&[(
        CfStageLabel::Trust,
        &[r"(unclosed"] as &[&str],
    )]);
    assert!(result.is_err());
}

proptest! {
    // Pure-function property: the same input always yields the same
    // label, and non-predator input is always SAFE.
    #[test]
    fn classification_is_deterministic(text in ".{0,120}") {
        let classifier = CfStageClassifier::default();
        prop_assert_eq!(
            classifier.classify(&text, true),
            classifier.classify(&text, true)
        );
        prop_assert_eq!(classifier.classify(&text, false), CfStageLabel::Safe);
    }
}
