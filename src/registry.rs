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
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{CfError, Result};

/// Ground-truth set of author identifiers known to be predators.
///
/// Consulted only by the chat-archive adapter to decide whether a
/// message is a candidate for non-SAFE labeling. Immutable after
/// construction so adapters can share it freely across test runs.
#[derive(Clone, Debug, Default)]
pub struct CfPredatorRegistry {
    ids: HashSet<String>,
}

impl CfPredatorRegistry {
    /// Loads a registry from a side file with one author id per line.
    /// Blank lines are ignored. A missing file is a hard error for the
    /// owning adapter.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| {
            CfError::missing_source("predator_registry", path.display().to_string())
        })?;
        let reader = BufReader::new(file);

        let mut ids = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                ids.insert(trimmed.to_string());
            }
        }

        log::info!("loaded {} predator ids from {}", ids.len(), path.display());
        Ok(CfPredatorRegistry { ids })
    }

    /// Builds a registry from known identifiers, mainly for tests.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CfPredatorRegistry {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, author: &str) -> bool {
        self.ids.contains(author)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
