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

//! # Corpus Export
//!
//! Persists a train/test split as `<name>_train.json` and
//! `<name>_test.json` JSON arrays plus a `<name>_manifest.json` with the
//! counts and distributions a consumer needs without parsing the
//! corpora. Every file is written to a temporary sibling and renamed
//! into place, so a crash mid-write never leaves a truncated corpus. The
//! uniqueness assertion runs across both splits before the first byte is
//! written.
//!
//! With the `csv` feature, each split is mirrored as a flat CSV without
//! the context column.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::dedup::verify_unique;
use crate::errors::{CfError, Result};
#[cfg(feature = "csv")]
use crate::record::CfRecordBatch;
use crate::report::CfLabelDistribution;
use crate::split::CfSplit;

/// Summary file persisted next to the corpora.
#[derive(Clone, Debug, Serialize)]
pub struct CfExportManifest {
    pub name: String,
    pub created_at: String,
    pub seed: u64,
    pub train_records: usize,
    pub test_records: usize,
    pub train_distribution: CfLabelDistribution,
    pub test_distribution: CfLabelDistribution,
}

/// Paths of everything an export produced.
#[derive(Clone, Debug, Default)]
pub struct CfExportOutput {
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    pub manifest_path: PathBuf,
    #[cfg(feature = "csv")]
    pub csv_paths: Vec<PathBuf>,
}

/// Writes a split to disk under a base name.
pub struct CfExporter {
    dir: PathBuf,
    name: String,
    write_csv_mirror: bool,
}

impl CfExporter {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        CfExporter {
            dir: dir.into(),
            name: name.into(),
            write_csv_mirror: cfg!(feature = "csv"),
        }
    }

    /// Disables the CSV mirror even when the feature is compiled in.
    pub fn without_csv_mirror(mut self) -> Self {
        self.write_csv_mirror = false;
        self
    }

    pub fn export(&self, split: &CfSplit, seed: u64) -> Result<CfExportOutput> {
        verify_unique([&split.train, &split.test])?;
        fs::create_dir_all(&self.dir)?;

        let mut output = CfExportOutput {
            train_path: self.dir.join(format!("{}_train.json", self.name)),
            test_path: self.dir.join(format!("{}_test.json", self.name)),
            manifest_path: self.dir.join(format!("{}_manifest.json", self.name)),
            ..CfExportOutput::default()
        };

        write_json_atomic(&output.train_path, &split.train)?;
        write_json_atomic(&output.test_path, &split.test)?;

        let manifest = CfExportManifest {
            name: self.name.clone(),
            created_at: Utc::now().to_rfc3339(),
            seed,
            train_records: split.train.len(),
            test_records: split.test.len(),
            train_distribution: CfLabelDistribution::compute(&split.train),
            test_distribution: CfLabelDistribution::compute(&split.test),
        };
        write_json_atomic(&output.manifest_path, &manifest)?;

        #[cfg(feature = "csv")]
        if self.write_csv_mirror {
            for (suffix, batch) in [("train", &split.train), ("test", &split.test)] {
                let path = self.dir.join(format!("{}_{}.csv", self.name, suffix));
                write_csv_atomic(&path, batch)?;
                output.csv_paths.push(path);
            }
        }

        log::info!(
            "export: wrote {} train / {} test records to {}",
            split.train.len(),
            split.test.len(),
            self.dir.display()
        );
        Ok(output)
    }
}

/// Serializes to a temporary sibling file, then renames into place.
/// serde_json emits UTF-8 with non-ASCII characters unescaped.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    let tmp = temp_sibling(path)?;
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(feature = "csv")]
fn write_csv_atomic(path: &Path, batch: &CfRecordBatch) -> Result<()> {
    let tmp = temp_sibling(path)?;
    {
        let mut writer = csv::Writer::from_path(&tmp).map_err(|err| {
            CfError::pipeline("export", format!("csv open failed: {}", err))
        })?;
        writer
            .write_record([
                "text",
                "label",
                "source",
                "augmented",
                "augmentation_method",
                "conversation_id",
                "is_predator_author",
                "timestamp",
            ])
            .map_err(|err| CfError::pipeline("export", err.to_string()))?;
        for record in batch {
            writer
                .write_record([
                    record.text.as_str(),
                    record.label.as_str(),
                    record.source.as_str(),
                    if record.augmented { "true" } else { "false" },
                    record.augmentation_method.as_deref().unwrap_or(""),
                    record.conversation_id.as_deref().unwrap_or(""),
                    record
                        .is_predator_author
                        .map(|flag| if flag { "true" } else { "false" })
                        .unwrap_or(""),
                    record.timestamp.as_deref().unwrap_or(""),
                ])
                .map_err(|err| CfError::pipeline("export", err.to_string()))?;
        }
        writer
            .flush()
            .map_err(|err| CfError::pipeline("export", err.to_string()))?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CfError::pipeline("export", "output path has no file name"))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
