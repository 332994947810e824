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

//! # Source Adapters
//!
//! Each adapter turns one heterogeneous raw source into the common
//! record stream. Adapters never fail on a single malformed entry —
//! they log, count, and continue; they fail only when their required
//! input file is unreadable or missing.

pub mod chat_archive;
pub mod curated;
pub mod legacy;
pub mod synthetic;

pub use chat_archive::{CfChatArchiveAdapter, CfEmissionMode};
pub use curated::CfCuratedPatternAdapter;
pub use legacy::CfLegacyJsonAdapter;
pub use synthetic::{CfSyntheticAdapter, CfTemplateCategory};

use crate::errors::Result;
use crate::record::CfRecordBatch;

/// Records plus the count of malformed entries absorbed along the way.
#[derive(Debug, Default)]
pub struct CfAdapterOutput {
    pub records: CfRecordBatch,
    pub skipped: usize,
}

impl CfAdapterOutput {
    pub fn new(records: CfRecordBatch, skipped: usize) -> Self {
        CfAdapterOutput { records, skipped }
    }
}

/// Contract every source adapter must fulfill.
pub trait CfSourceAdapter {
    /// Origin tag stamped onto produced records.
    fn name(&self) -> &'static str;

    /// Loads the full record stream for this source.
    fn load(&self) -> Result<CfAdapterOutput>;
}
