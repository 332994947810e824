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

//! # Synthetic Template Adapter
//!
//! Deterministic combinatorial generation from `category → templates`
//! tables with chat-style surface variation. The label comes directly
//! from the category, bypassing the classifier.

use crate::adapters::{CfAdapterOutput, CfSourceAdapter};
use crate::errors::Result;
use crate::label::CfStageLabel;
use crate::record::CfRecord;

const ADAPTER_NAME: &str = "synthetic";

/// One template category with its fixed label.
#[derive(Clone, Debug)]
pub struct CfTemplateCategory {
    pub name: &'static str,
    pub label: CfStageLabel,
    pub templates: Vec<&'static str>,
}

impl CfTemplateCategory {
    pub fn new(
        name: &'static str,
        label: CfStageLabel,
        templates: Vec<&'static str>,
    ) -> Self {
        CfTemplateCategory {
            name,
            label,
            templates,
        }
    }
}

/// Generates the full cross product of category × template × surface
/// variant. No randomness is involved, so repeated runs yield an
/// identical stream.
pub struct CfSyntheticAdapter {
    categories: Vec<CfTemplateCategory>,
}

impl CfSyntheticAdapter {
    pub fn new(categories: Vec<CfTemplateCategory>) -> Self {
        CfSyntheticAdapter { categories }
    }

    /// Bundled German template tables covering everyday safe chatter
    /// and one category per grooming stage.
    pub fn default_german() -> Self {
        use CfStageLabel::*;
        CfSyntheticAdapter::new(vec![
            CfTemplateCategory::new(
                "hausaufgaben",
                Safe,
                vec![
                    "Hast du die Mathe-Hausaufgaben schon gemacht?",
                    "Können wir zusammen für die Arbeit lernen?",
                    "Welche Seite müssen wir lesen?",
                    "Ich versteh die Aufgabe nicht, kannst du mir helfen?",
                    "Wann ist die Bio-Klausur?",
                    "Treffen wir uns in der Bibliothek?",
                ],
            ),
            CfTemplateCategory::new(
                "gaming",
                Safe,
                vec![
                    "Zockst du heute Abend?",
                    "Welches Level bist du?",
                    "Hast du das neue Update gesehen?",
                    "Können wir zusammen spielen?",
                    "Mein Team ist so schlecht heute",
                ],
            ),
            CfTemplateCategory::new(
                "alltag",
                Safe,
                vec![
                    "Hey wie geht's?",
                    "Was machst du heute?",
                    "Wie war dein Tag?",
                    "Was gibt's zu essen?",
                    "Kommst du zum Training?",
                ],
            ),
            CfTemplateCategory::new(
                "vertrauen",
                Trust,
                vec![
                    "Du bist viel erwachsener als andere in deinem Alter",
                    "Mit dir kann ich über alles reden",
                    "Wir zwei sind uns so ähnlich",
                ],
            ),
            CfTemplateCategory::new(
                "anreize",
                Needs,
                vec![
                    "Ich lade dir Guthaben auf wenn du willst",
                    "Soll ich dir Robux kaufen?",
                    "Ich hab noch einen Gutschein für dich übrig",
                ],
            ),
            CfTemplateCategory::new(
                "geheimhaltung",
                Isolation,
                vec![
                    "Das muss unter uns bleiben",
                    "Lösch den Chat danach, okay?",
                    "Schreib mir lieber auf Snapchat weiter",
                ],
            ),
            CfTemplateCategory::new(
                "umgebung",
                Assessment,
                vec![
                    "Sind deine Eltern noch wach?",
                    "Hast du ein eigenes Zimmer?",
                    "Ist die Tür bei dir zu?",
                ],
            ),
            CfTemplateCategory::new(
                "uebergriff",
                Sexual,
                vec![
                    "Schick mir ein Foto von dir",
                    "Zeig mir wie du gerade aussiehst",
                    "Hast du schon mal ein Bild von dir verschickt?",
                ],
            ),
        ])
    }

    /// Surface variants applied to every template, in fixed order.
    fn variants(template: &str) -> [String; 5] {
        [
            template.to_string(),
            format!("{} 😊", template),
            format!("{} lol", template),
            format!("{}?", template),
            template.to_lowercase(),
        ]
    }
}

impl CfSourceAdapter for CfSyntheticAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn load(&self) -> Result<CfAdapterOutput> {
        let mut records = Vec::new();
        for category in &self.categories {
            for template in &category.templates {
                for variant in Self::variants(template) {
                    records.push(CfRecord::new(variant, category.label, ADAPTER_NAME));
                }
            }
        }
        log::info!(
            "synthetic: generated {} records from {} categories",
            records.len(),
            self.categories.len()
        );
        Ok(CfAdapterOutput::new(records, 0))
    }
}
