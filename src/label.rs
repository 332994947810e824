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

//! # Stage Label Module
//!
//! The closed grooming-stage taxonomy. The six-stage label is the
//! canonical source of truth everywhere in the pipeline; the binary
//! safe/grooming view is a derived, read-only projection and never
//! flows back into records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CfError;

/// Closed set of escalating grooming-tactic labels.
///
/// The declaration order doubles as the canonical ordering used for
/// classifier tie-breaks and deterministic per-label iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CfStageLabel {
    /// Normal conversation.
    #[serde(rename = "STAGE_SAFE")]
    Safe,
    /// Trust building ("you are special", "I understand you").
    #[serde(rename = "STAGE_TRUST")]
    Trust,
    /// Material incentives ("do you want a gift?", "I'll send you money").
    #[serde(rename = "STAGE_NEEDS")]
    Needs,
    /// Secrecy and separation ("don't tell anyone", "our secret").
    #[serde(rename = "STAGE_ISOLATION")]
    Isolation,
    /// Environment probing ("are you alone?", "where are your parents?").
    #[serde(rename = "STAGE_ASSESSMENT")]
    Assessment,
    /// Explicit sexual content or image requests.
    #[serde(rename = "STAGE_SEXUAL")]
    Sexual,
}

impl CfStageLabel {
    /// All labels in canonical order.
    pub const ALL: [CfStageLabel; 6] = [
        CfStageLabel::Safe,
        CfStageLabel::Trust,
        CfStageLabel::Needs,
        CfStageLabel::Isolation,
        CfStageLabel::Assessment,
        CfStageLabel::Sexual,
    ];

    /// Non-SAFE labels in the canonical scoring order. Classifier
    /// tie-breaks resolve to the first maximal label in this order.
    pub const SCORING_ORDER: [CfStageLabel; 5] = [
        CfStageLabel::Trust,
        CfStageLabel::Needs,
        CfStageLabel::Isolation,
        CfStageLabel::Assessment,
        CfStageLabel::Sexual,
    ];

    /// Wire representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CfStageLabel::Safe => "STAGE_SAFE",
            CfStageLabel::Trust => "STAGE_TRUST",
            CfStageLabel::Needs => "STAGE_NEEDS",
            CfStageLabel::Isolation => "STAGE_ISOLATION",
            CfStageLabel::Assessment => "STAGE_ASSESSMENT",
            CfStageLabel::Sexual => "STAGE_SEXUAL",
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, CfStageLabel::Safe)
    }

    /// Derived binary projection: 0 for SAFE, 1 for any grooming stage.
    pub fn binary(&self) -> u8 {
        if self.is_safe() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for CfStageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CfStageLabel {
    type Err = CfError;

    /// Accepts both the `STAGE_` prefixed wire form and the bare name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("STAGE_").unwrap_or(&upper);
        match bare {
            "SAFE" => Ok(CfStageLabel::Safe),
            "TRUST" => Ok(CfStageLabel::Trust),
            "NEEDS" => Ok(CfStageLabel::Needs),
            "ISOLATION" => Ok(CfStageLabel::Isolation),
            "ASSESSMENT" => Ok(CfStageLabel::Assessment),
            "SEXUAL" => Ok(CfStageLabel::Sexual),
            other => Err(CfError::validation(format!(
                "unknown stage label '{}'",
                other
            ))),
        }
    }
}
