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

//! # Translation Capability
//!
//! The balancer's round-trip augmentation is defined against the
//! [`CfTranslator`] trait so the external service can be swapped for a
//! fake in tests. Two decorators are provided: a throttle that spaces
//! outbound calls and a memoizing cache keyed by `(text, source,
//! target)` so identical requests never hit the service twice.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::errors::Result;

/// Minimum spacing between outbound translation calls.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

/// A text translation capability.
pub trait CfTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Decorator enforcing a minimum interval between delegate calls.
pub struct CfThrottledTranslator<T> {
    inner: T,
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<T: CfTranslator> CfThrottledTranslator<T> {
    pub fn new(inner: T) -> Self {
        CfThrottledTranslator::with_interval(inner, DEFAULT_MIN_INTERVAL)
    }

    pub fn with_interval(inner: T, min_interval: Duration) -> Self {
        CfThrottledTranslator {
            inner,
            min_interval,
            last_call: Mutex::new(None),
        }
    }
}

impl<T: CfTranslator> CfTranslator for CfThrottledTranslator<T> {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        {
            let mut last_call = self
                .last_call
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(previous) = *last_call {
                let elapsed = previous.elapsed();
                if elapsed < self.min_interval {
                    std::thread::sleep(self.min_interval - elapsed);
                }
            }
            *last_call = Some(Instant::now());
        }
        self.inner.translate(text, source, target)
    }
}

/// Decorator memoizing successful translations per `(text, source,
/// target)` triple. Failures are not cached.
pub struct CfCachingTranslator<T> {
    inner: T,
    cache: Mutex<HashMap<(String, String, String), String>>,
}

impl<T: CfTranslator> CfCachingTranslator<T> {
    pub fn new(inner: T) -> Self {
        CfCachingTranslator {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn cached_count(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl<T: CfTranslator> CfTranslator for CfCachingTranslator<T> {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let key = (text.to_string(), source.to_string(), target.to_string());
        {
            let cache = self
                .cache
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(hit) = cache.get(&key) {
                return Ok(hit.clone());
            }
        }

        let translated = self.inner.translate(text, source, target)?;
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, translated.clone());
        Ok(translated)
    }
}

/// Client for a LibreTranslate-compatible HTTP endpoint.
#[cfg(feature = "http-translate")]
pub struct CfHttpTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[cfg(feature = "http-translate")]
impl CfHttpTranslator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        CfHttpTranslator {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(feature = "http-translate")]
impl CfTranslator for CfHttpTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        use crate::errors::CfError;

        #[derive(serde::Serialize)]
        struct Request<'a> {
            q: &'a str,
            source: &'a str,
            target: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            api_key: Option<&'a str>,
        }

        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(rename = "translatedText")]
            translated_text: String,
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&Request {
                q: text,
                source,
                target,
                api_key: self.api_key.as_deref(),
            })
            .send()
            .map_err(|err| CfError::translation(err.to_string()))?;

        if !response.status().is_success() {
            return Err(CfError::translation(format!(
                "translation endpoint returned {}",
                response.status()
            )));
        }

        let body: Response = response
            .json()
            .map_err(|err| CfError::translation(err.to_string()))?;
        Ok(body.translated_text)
    }
}
