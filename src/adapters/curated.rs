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

//! # Curated Pattern Adapter
//!
//! Fixed, hand-authored `(label, text)` pairs passed through verbatim.
//! These are linguist-reviewed exemplar sentences per grooming stage;
//! no classification or variation is applied.

use crate::adapters::{CfAdapterOutput, CfSourceAdapter};
use crate::errors::Result;
use crate::label::CfStageLabel;
use crate::record::CfRecord;

const ADAPTER_NAME: &str = "curated";

/// Pass-through adapter over a fixed pair list.
pub struct CfCuratedPatternAdapter {
    pairs: Vec<(CfStageLabel, &'static str)>,
}

impl CfCuratedPatternAdapter {
    pub fn new(pairs: Vec<(CfStageLabel, &'static str)>) -> Self {
        CfCuratedPatternAdapter { pairs }
    }

    /// Bundled German exemplar set.
    pub fn default_german() -> Self {
        use CfStageLabel::*;
        CfCuratedPatternAdapter::new(vec![
            (Trust, "Du kannst mir alles erzählen"),
            (Trust, "Ich verstehe dich so gut"),
            (Trust, "Niemand versteht dich wie ich"),
            (Trust, "Du bist so reif für dein Alter"),
            (Trust, "Wir sind uns so ähnlich"),
            (Isolation, "Das bleibt unser Geheimnis okay?"),
            (Isolation, "Sag niemandem davon"),
            (Isolation, "Deine Eltern müssen das nicht wissen"),
            (Isolation, "Das ist nur zwischen uns"),
            (Isolation, "Deine Freunde verstehen dich nicht"),
            (Needs, "Ich schick dir was Geld"),
            (Needs, "Willst du ein Geschenk?"),
            (Needs, "Ich kauf dir was Schönes"),
            (Needs, "Ich geb dir Guthaben"),
            (Needs, "Willst du nen neuen Skin?"),
            (Assessment, "Bist du allein zuhause?"),
            (Assessment, "Wo sind deine Eltern gerade?"),
            (Assessment, "Lass uns mal treffen"),
            (Assessment, "Wo wohnst du?"),
            (Assessment, "Ich hol dich ab"),
            (Sexual, "Schick mir ein Bild von dir"),
            (Sexual, "Zeig mir wie du aussiehst"),
            (Sexual, "Du bist bestimmt hübsch"),
            (Sexual, "Hast du schon nen Freund oder Freundin?"),
        ])
    }
}

impl CfSourceAdapter for CfCuratedPatternAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn load(&self) -> Result<CfAdapterOutput> {
        let records = self
            .pairs
            .iter()
            .map(|(label, text)| CfRecord::new(*text, *label, ADAPTER_NAME))
            .collect::<Vec<_>>();
        log::info!("curated: {} hand-authored records", records.len());
        Ok(CfAdapterOutput::new(records, 0))
    }
}
