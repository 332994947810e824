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

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Fixed synonym table for whole-word substitution.
///
/// Matching is case-insensitive over whitespace-separated tokens; at
/// most two eligible tokens per text are replaced, chosen uniformly
/// among the eligible positions. When no token matches, the text is
/// returned unchanged and the balancer's acceptance rule rejects it.
#[derive(Clone, Debug)]
pub struct CfSynonymTable {
    entries: HashMap<String, Vec<String>>,
    max_replacements: usize,
}

impl CfSynonymTable {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, Vec<V>)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        CfSynonymTable {
            entries: entries
                .into_iter()
                .map(|(word, replacements)| {
                    (
                        word.into().to_lowercase(),
                        replacements.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
            max_replacements: 2,
        }
    }

    /// Bundled German synonyms for grooming-context vocabulary.
    pub fn default_german() -> Self {
        CfSynonymTable::new([
            ("allein", vec!["alleine", "solo", "ganz allein"]),
            ("bild", vec!["foto", "pic", "selfie"]),
            ("schicken", vec!["senden", "zeigen", "geben"]),
            ("geheimnis", vec!["secret", "zwischen uns", "privat"]),
            ("geschenk", vec!["präsent", "überraschung", "belohnung"]),
            ("reif", vec!["erwachsen", "mature", "älter"]),
            ("verstehen", vec!["kapieren", "checken", "nachvollziehen"]),
            ("besonders", vec!["speziell", "einzigartig", "anders"]),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces up to `max_replacements` matching tokens. The output is
    /// lower-cased token-joined text, mirroring how the source corpus
    /// normalizes chat fragments.
    pub fn substitute(&self, text: &str, rng: &mut SmallRng) -> String {
        let mut words: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut eligible: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, word)| self.entries.contains_key(*word))
            .map(|(index, _)| index)
            .collect();

        if eligible.is_empty() {
            return text.to_string();
        }

        eligible.shuffle(rng);
        for index in eligible.into_iter().take(self.max_replacements) {
            let replacements = &self.entries[&words[index]];
            if let Some(replacement) = replacements.choose(rng) {
                words[index] = replacement.clone();
            }
        }

        words.join(" ")
    }
}
