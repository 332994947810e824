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

//! # Heuristic Stage Classifier
//!
//! Deterministic keyword/regex classifier assigning one canonical stage
//! label to raw text. This is the single classifier shared by every
//! adapter and the combiner; no other component reimplements keyword
//! scoring.
//!
//! ## Scoring rules
//!
//! - If the text is not predator-attributed, the classifier returns
//!   `SAFE` without scoring. This short-circuit is the primary
//!   false-positive guard.
//! - The text is lower-cased once; each pattern contributes at most 1
//!   to its stage's score regardless of repeated matches (presence
//!   score, not frequency score).
//! - The label with the maximum score wins. Ties resolve to the first
//!   maximal label in the canonical order `TRUST, NEEDS, ISOLATION,
//!   ASSESSMENT, SEXUAL` — overlapping vocabulary across categories is
//!   expected, so the tie-break must be deterministic and documented.
//! - A maximum score of 0 yields `SAFE`.
//!
//! The classifier is a pure function of `(text, is_predator_author)`
//! and never fails: pattern tables are validated at construction.

use regex::Regex;

use crate::errors::{CfError, Result};
use crate::label::CfStageLabel;

/// Immutable compiled pattern table, one entry per non-SAFE stage in
/// canonical scoring order.
#[derive(Debug)]
pub struct CfPatternTable {
    entries: Vec<(CfStageLabel, Vec<Regex>)>,
}

impl CfPatternTable {
    /// Compiles a pattern table from raw regex sources. Entries must
    /// cover non-SAFE stages only, one entry per stage; compilation
    /// failures surface here rather than at classification time. The
    /// compiled entries are stored in canonical order regardless of the
    /// order given, so the tie-break holds for injected tables too.
    pub fn compile(raw: &[(CfStageLabel, &[&str])]) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        for (label, patterns) in raw {
            if label.is_safe() {
                return Err(CfError::validation(
                    "pattern table must not contain an entry for STAGE_SAFE",
                ));
            }
            if entries.iter().any(|(seen, _)| seen == label) {
                return Err(CfError::validation(format!(
                    "duplicate pattern table entry for {}",
                    label
                )));
            }
            let compiled = patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).map_err(|err| {
                        CfError::validation(format!(
                            "invalid pattern '{}' for {}: {}",
                            pattern, label, err
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            entries.push((*label, compiled));
        }
        // The label enum's Ord is the canonical order.
        entries.sort_by_key(|(label, _)| *label);
        Ok(CfPatternTable { entries })
    }

    /// Default bilingual (German/English) keyword table.
    pub fn default_bilingual() -> Self {
        let raw: [(CfStageLabel, &[&str]); 5] = [
            (
                CfStageLabel::Trust,
                &[
                    r"\b(special|besonders|unique|einzigartig)\b",
                    r"\b(understand|versteh|verstehe)\b",
                    r"\b(mature|reif)\b",
                    r"\b(different|anders)\b",
                    r"\b(close|nah)\b",
                    r"\b(friend|freund)\b",
                ],
            ),
            (
                CfStageLabel::Needs,
                &[
                    r"\b(gift|geschenk)\b",
                    r"\b(money|geld)\b",
                    r"\b(buy|kaufen)\b",
                    r"\b(want|willst|brauchst)\b",
                    r"\b(robux|v-?bucks|skins?)\b",
                    r"\b(credit|guthaben)\b",
                ],
            ),
            (
                CfStageLabel::Isolation,
                &[
                    r"\b(secret|geheimnis)\b",
                    r"\b(don't tell|sag nicht|sag niemandem|niemandem)\b",
                    r"\b(between us|zwischen uns)\b",
                    r"\b(private|privat)\b",
                    r"\b(snapchat|telegram|signal)\b",
                    r"\b(delete|löschen)\b",
                ],
            ),
            (
                CfStageLabel::Assessment,
                &[
                    r"\b(alone|allein|alleine)\b",
                    r"\b(parents?|eltern)\b",
                    r"\b(room|zimmer)\b",
                    r"\b(door|tür)\b",
                    r"\b(camera|kamera|webcam)\b",
                    r"\b(where are you|wo bist du)\b",
                ],
            ),
            (
                CfStageLabel::Sexual,
                &[
                    r"\b(pic|picture|photo|bild|foto|selfie)\b",
                    r"\b(naked|nackt|nude)\b",
                    r"\b(body|körper)\b",
                    r"\b(sex|sexual)\b",
                    r"\b(show me|zeig mir)\b",
                    r"\b(send me|schick mir)\b",
                ],
            ),
        ];
        // The bundled table is known-good; compile() only fails on
        // malformed regexes.
        Self::compile(&raw).expect("bundled pattern table must compile")
    }
}

/// The canonical stage classifier.
#[derive(Debug)]
pub struct CfStageClassifier {
    table: CfPatternTable,
}

impl CfStageClassifier {
    pub fn new(table: CfPatternTable) -> Self {
        CfStageClassifier { table }
    }

    /// Classifies a single text. Pure and infallible.
    pub fn classify(&self, text: &str, is_predator_author: bool) -> CfStageLabel {
        if !is_predator_author {
            return CfStageLabel::Safe;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return CfStageLabel::Safe;
        }

        let lowered = trimmed.to_lowercase();

        let mut best = CfStageLabel::Safe;
        let mut best_score = 0usize;
        for (label, patterns) in &self.table.entries {
            let score = patterns
                .iter()
                .filter(|pattern| pattern.is_match(&lowered))
                .count();
            // Strict comparison keeps the first maximal label, which is
            // the canonical tie-break.
            if score > best_score {
                best_score = score;
                best = *label;
            }
        }

        best
    }
}

impl Default for CfStageClassifier {
    fn default() -> Self {
        CfStageClassifier::new(CfPatternTable::default_bilingual())
    }
}
