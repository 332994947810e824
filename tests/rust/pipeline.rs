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
use std::fs;
use std::io::Write;

use corpusforge::adapters::{
    CfChatArchiveAdapter, CfCuratedPatternAdapter, CfLegacyJsonAdapter, CfSyntheticAdapter,
};
use corpusforge::augment::CfBalanceConfig;
use corpusforge::combine::{sample_balanced_binary, to_binary};
use corpusforge::export::CfExporter;
use corpusforge::label::CfStageLabel;
use corpusforge::pipeline::CfPipeline;
use corpusforge::record::CfRecord;
use corpusforge::registry::CfPredatorRegistry;
use corpusforge::split::CfSplitConfig;

const ARCHIVE: &str = r#"<conversations>
  <conversation id="c1">
    <message><author>pred1</author><text>du bist so besonders und reif für dein alter</text></message>
    <message><author>kid1</author><text>findest du wirklich?</text></message>
    <message><author>pred1</author><text>bist du allein? sag niemandem von uns</text></message>
    <message><author>pred1</author><text>schick mir mal ein bild von dir</text></message>
  </conversation>
</conversations>"#;

fn archive_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ARCHIVE.as_bytes()).unwrap();
    file
}

fn legacy_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
            {"text": "alte safe nachricht aus dem export", "label": 0},
            {"text": "zeig mir wie du gerade aussiehst ok", "label": 1}
        ]"#,
    )
    .unwrap();
    file
}

#[test]
fn full_assembly_produces_persisted_train_and_test_corpora() {
    let archive = archive_file();
    let legacy = legacy_file();
    let out_dir = tempfile::tempdir().unwrap();

    let pipeline = CfPipeline::new()
        .add_adapter(CfChatArchiveAdapter::new(
            archive.path(),
            CfPredatorRegistry::from_ids(["pred1"]),
        ))
        .add_adapter(CfSyntheticAdapter::default_german())
        .add_adapter(CfCuratedPatternAdapter::default_german())
        .add_adapter(CfLegacyJsonAdapter::new(legacy.path()))
        .with_balance(CfBalanceConfig::new(30, 42))
        .with_split(CfSplitConfig::new(0.8, 42))
        .with_exporter(CfExporter::new(out_dir.path(), "grooming"));

    let (split, summary) = pipeline.run().unwrap();

    assert!(summary.combine.failed_sources.is_empty());
    assert_eq!(summary.combine.sources.len(), 4);
    assert!(summary.balance.is_some());
    assert_eq!(
        summary.train_records + summary.test_records,
        summary.final_distribution.total()
    );

    let export = summary.export.unwrap();
    let train: Vec<CfRecord> =
        serde_json::from_str(&fs::read_to_string(&export.train_path).unwrap()).unwrap();
    let test: Vec<CfRecord> =
        serde_json::from_str(&fs::read_to_string(&export.test_path).unwrap()).unwrap();
    assert_eq!(train.len(), split.train.len());
    assert_eq!(test.len(), split.test.len());

    // No normalized text appears on both sides of the split.
    let train_texts: HashSet<String> =
        train.iter().map(|r| r.normalized_text()).collect();
    assert!(test
        .iter()
        .all(|record| !train_texts.contains(&record.normalized_text())));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export.manifest_path).unwrap()).unwrap();
    assert_eq!(manifest["name"], "grooming");
    assert_eq!(manifest["seed"], 42);
    assert_eq!(manifest["train_records"], train.len());
    assert!(manifest["created_at"].as_str().is_some());

    #[cfg(feature = "csv")]
    {
        assert_eq!(export.csv_paths.len(), 2);
        for path in &export.csv_paths {
            assert!(path.exists());
        }
    }
}

#[test]
fn balancing_raises_grooming_label_counts_before_the_split() {
    let pipeline = CfPipeline::new()
        .add_adapter(CfCuratedPatternAdapter::default_german())
        .with_balance(CfBalanceConfig::new(8, 42));

    let (split, summary) = pipeline.run().unwrap();
    let report = summary.balance.unwrap();
    assert!(report.total_added() > 0);

    for label in CfStageLabel::SCORING_ORDER {
        let count = split
            .train
            .iter()
            .chain(split.test.iter())
            .filter(|record| record.label == label)
            .count();
        assert!(count >= 4, "{} fell below its curated floor", label);
    }
}

#[test]
fn identical_seeds_reproduce_identical_corpora() {
    let run = || {
        CfPipeline::new()
            .add_adapter(CfSyntheticAdapter::default_german())
            .add_adapter(CfCuratedPatternAdapter::default_german())
            .with_balance(CfBalanceConfig::new(40, 7))
            .with_split(CfSplitConfig::new(0.8, 7))
            .run()
            .unwrap()
    };

    let (first, _) = run();
    let (second, _) = run();
    assert_eq!(first.train, second.train);
    assert_eq!(first.test, second.test);
}

#[test]
fn binary_projection_helpers_work_on_pipeline_output() {
    let pipeline = CfPipeline::new().add_adapter(CfSyntheticAdapter::default_german());
    let (split, _) = pipeline.run().unwrap();

    let binary = to_binary(&split.train);
    assert_eq!(binary.len(), split.train.len());
    for (record, projected) in split.train.iter().zip(&binary) {
        assert_eq!(projected.label, record.label.binary());
        assert_eq!(projected.stage, record.label.as_str());
    }

    let sampled = sample_balanced_binary(&split.train, 5, 42).unwrap();
    let safe = sampled.iter().filter(|r| r.label.is_safe()).count();
    assert!(safe <= 5);
    assert!(sampled.len() - safe <= 5);
}
