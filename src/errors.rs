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

//! # Corpusforge Error Module
//!
//! This module defines the error types used throughout the corpus
//! assembly pipeline.
//!
//! ## Error Handling Philosophy
//!
//! - **Per-record failures are not errors**: a malformed source entry is
//!   skipped and counted by the owning adapter; only the skip counter
//!   surfaces in reports.
//! - **File-level failures abort one adapter**: a missing or unreadable
//!   input file fails that adapter; the combiner proceeds with the
//!   adapters that succeeded and reports which were skipped.
//! - **Uniqueness violations are fatal**: a duplicate normalized text
//!   discovered at persist time signals a pipeline defect and is raised
//!   as `Internal`, never absorbed.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Corpusforge.
pub type Result<T> = std::result::Result<T, CfError>;

/// Canonical error enumeration for the corpus pipeline.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum CfError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// A required adapter input file is absent or unreadable.
    #[error("adapter '{adapter}' is missing its source file: {path}")]
    MissingSource { adapter: String, path: String },

    /// Any failure raised by a source adapter beyond a single bad entry.
    #[error("adapter '{adapter}' failed: {message}")]
    Adapter { adapter: String, message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures that occur while orchestrating the pipeline.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// The external translation capability is unavailable or failed.
    #[error("translation error: {0}")]
    Translation(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations, including the
    /// pre-persist uniqueness assertion.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for CfError {
    fn from(err: io::Error) -> Self {
        CfError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Serde(err.to_string())
    }
}

impl CfError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        CfError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct adapter errors.
    pub fn adapter(name: impl Into<String>, message: impl Into<String>) -> Self {
        CfError::Adapter {
            adapter: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct missing-source errors.
    pub fn missing_source(adapter: impl Into<String>, path: impl Into<String>) -> Self {
        CfError::MissingSource {
            adapter: adapter.into(),
            path: path.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        CfError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct translation errors.
    pub fn translation<T: Into<String>>(message: T) -> Self {
        CfError::Translation(message.into())
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        CfError::Internal(message.into())
    }
}
