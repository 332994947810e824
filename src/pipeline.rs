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

//! # Assembly Pipeline
//!
//! End-to-end orchestration: combine all sources, optionally balance
//! under-represented grooming labels, split stratified, and export. Each
//! stage's report is collected into one summary so a caller can inspect
//! the whole run without scraping logs.

use crate::adapters::CfSourceAdapter;
use crate::augment::{CfBalanceConfig, CfBalanceReport, CfBalancer, CfSynonymTable, CfTranslator};
use crate::combine::{CfCombineReport, CfCombiner};
use crate::errors::Result;
use crate::export::{CfExportOutput, CfExporter};
use crate::record::CfRecordBatch;
use crate::report::CfLabelDistribution;
use crate::split::{CfSplit, CfSplitConfig, CfSplitter};

/// Everything one pipeline run produced, minus the persisted files.
#[derive(Debug)]
pub struct CfPipelineSummary {
    pub combine: CfCombineReport,
    pub balance: Option<CfBalanceReport>,
    pub final_distribution: CfLabelDistribution,
    pub train_records: usize,
    pub test_records: usize,
    pub pinned_labels: usize,
    pub export: Option<CfExportOutput>,
}

/// Builder-style pipeline front end.
///
/// Balancing and export are opt-in; combine and split always run.
pub struct CfPipeline {
    combiner: CfCombiner,
    balance: Option<CfBalanceConfig>,
    synonyms: CfSynonymTable,
    translator: Option<Box<dyn CfTranslator>>,
    split: CfSplitConfig,
    exporter: Option<CfExporter>,
}

impl Default for CfPipeline {
    fn default() -> Self {
        CfPipeline::new()
    }
}

impl CfPipeline {
    pub fn new() -> Self {
        CfPipeline {
            combiner: CfCombiner::new(),
            balance: None,
            synonyms: CfSynonymTable::default_german(),
            translator: None,
            split: CfSplitConfig::default(),
            exporter: None,
        }
    }

    pub fn add_adapter(mut self, adapter: impl CfSourceAdapter + 'static) -> Self {
        self.combiner = self.combiner.add_adapter(adapter);
        self
    }

    pub fn with_balance(mut self, config: CfBalanceConfig) -> Self {
        self.balance = Some(config);
        self
    }

    pub fn with_synonyms(mut self, synonyms: CfSynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_translator(mut self, translator: Box<dyn CfTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_split(mut self, config: CfSplitConfig) -> Self {
        self.split = config;
        self
    }

    pub fn with_exporter(mut self, exporter: CfExporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Runs the full assembly and returns the split plus the per-stage
    /// summary.
    pub fn run(&self) -> Result<(CfSplit, CfPipelineSummary)> {
        let (corpus, combine_report) = self.combiner.combine()?;

        let (corpus, balance_report) = self.balance_stage(corpus)?;
        let final_distribution = CfLabelDistribution::compute(&corpus);
        final_distribution.log_summary("pipeline");

        let split = CfSplitter::new(self.split).split(corpus)?;

        let export = match &self.exporter {
            Some(exporter) => Some(exporter.export(&split, self.split.seed)?),
            None => None,
        };

        let summary = CfPipelineSummary {
            combine: combine_report,
            balance: balance_report,
            final_distribution,
            train_records: split.train.len(),
            test_records: split.test.len(),
            pinned_labels: split.pinned_labels.len(),
            export,
        };
        Ok((split, summary))
    }

    fn balance_stage(
        &self,
        corpus: CfRecordBatch,
    ) -> Result<(CfRecordBatch, Option<CfBalanceReport>)> {
        let Some(config) = self.balance else {
            return Ok((corpus, None));
        };
        let mut balancer = CfBalancer::new(config, &self.synonyms);
        if let Some(translator) = &self.translator {
            balancer = balancer.with_translator(translator.as_ref());
        }
        let (balanced, report) = balancer.balance(corpus)?;
        Ok((balanced, Some(report)))
    }
}
