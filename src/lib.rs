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

//! # Corpusforge
//!
//! Assembly pipeline for a labeled chat-safety corpus: heterogeneous
//! raw sources are normalized into one record stream, heuristically
//! labeled with a closed grooming-stage taxonomy, deduplicated,
//! optionally balanced through guarded augmentation, split stratified,
//! and persisted as train/test JSON corpora.
//!
//! ## Stages
//!
//! - [`adapters`] — one adapter per raw source (streamed XML chat
//!   archive, deterministic synthetic templates, curated exemplars,
//!   legacy JSON corpora), all emitting [`record::CfRecord`].
//! - [`classify`] — deterministic bilingual keyword scorer over the
//!   [`label::CfStageLabel`] taxonomy.
//! - [`dedup`] — exact dedup over normalized text with a minimum-length
//!   floor.
//! - [`augment`] — per-label deficit top-up via synonym substitution
//!   and optional round-trip translation.
//! - [`combine`] — multi-source assembly, distribution reporting, and
//!   the derived binary projection.
//! - [`split`] — seeded stratified train/test partition.
//! - [`export`] — atomic JSON (and optional CSV) persistence with a
//!   manifest.
//! - [`pipeline`] — builder-style orchestration of all of the above.
//!
//! Every stage that involves randomness takes an explicit seed; two
//! runs over the same inputs with the same seeds produce byte-identical
//! corpora.

pub mod adapters;
pub mod augment;
pub mod classify;
pub mod combine;
pub mod dedup;
pub mod errors;
pub mod export;
pub mod label;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod report;
pub mod split;

pub use adapters::{
    CfAdapterOutput, CfChatArchiveAdapter, CfCuratedPatternAdapter, CfEmissionMode,
    CfLegacyJsonAdapter, CfSourceAdapter, CfSyntheticAdapter, CfTemplateCategory,
};
pub use augment::{
    CfAugmentationMethod, CfBalanceConfig, CfBalanceReport, CfBalancer, CfSynonymTable,
    CfThrottledTranslator, CfTranslator,
};
pub use classify::{CfPatternTable, CfStageClassifier};
pub use combine::{CfCombineReport, CfCombiner};
pub use dedup::{CfDedupStats, CfDeduplicator};
pub use errors::{CfError, Result};
pub use export::{CfExportManifest, CfExporter};
pub use label::CfStageLabel;
pub use pipeline::{CfPipeline, CfPipelineSummary};
pub use record::{CfRecord, CfRecordBatch};
pub use registry::CfPredatorRegistry;
pub use report::CfLabelDistribution;
pub use split::{CfSplit, CfSplitConfig, CfSplitter};
