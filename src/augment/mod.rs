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

//! # Balancing and Augmentation
//!
//! Tops up under-represented grooming labels by synthesizing derived
//! records through guarded text transformations. A candidate is only
//! accepted when its normalized text is new to the corpus; this
//! acceptance rule rejects both no-op transformations and repeated
//! candidates, so balancing can never reintroduce duplicates.

pub mod balancer;
pub mod synonym;
pub mod translate;

pub use balancer::{CfBalanceConfig, CfBalanceReport, CfBalancer, CfLabelOutcome};
pub use synonym::CfSynonymTable;
pub use translate::{CfCachingTranslator, CfThrottledTranslator, CfTranslator};

#[cfg(feature = "http-translate")]
pub use translate::CfHttpTranslator;

use serde::{Deserialize, Serialize};

/// Guarded transformation methods available to the balancer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CfAugmentationMethod {
    /// Whole-word replacement against a fixed synonym table.
    SynonymSubstitution,
    /// Round-trip through the external translation capability.
    RoundTripTranslation,
}

impl CfAugmentationMethod {
    /// Method name recorded on augmented records.
    pub fn as_str(&self) -> &'static str {
        match self {
            CfAugmentationMethod::SynonymSubstitution => "synonym_substitution",
            CfAugmentationMethod::RoundTripTranslation => "round_trip_translation",
        }
    }
}
