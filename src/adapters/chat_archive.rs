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

//! # Chat-Archive Adapter
//!
//! Streams a PAN-style XML archive of `conversation → message` elements
//! into labeled records. Archives can exceed hundreds of thousands of
//! messages, so the adapter walks the event stream one element at a
//! time and never materializes a parsed tree next to the record list;
//! per-conversation state is limited to the short context window (or
//! the joined text in conversation mode).
//!
//! Message-level emission is canonical. Conversation-level emission
//! (all message texts joined with spaces) is an alternate, explicitly
//! configured output mode.

use std::collections::VecDeque;
use std::path::PathBuf;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::adapters::{CfAdapterOutput, CfSourceAdapter};
use crate::classify::CfStageClassifier;
use crate::errors::{CfError, Result};
use crate::record::CfRecord;
use crate::registry::CfPredatorRegistry;

const ADAPTER_NAME: &str = "chat_archive";

/// Granularity of emitted records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CfEmissionMode {
    /// One record per message (canonical).
    Message,
    /// One record per conversation, message texts joined with spaces.
    Conversation,
}

/// Adapter for conversation archives with a predator-registry side file.
pub struct CfChatArchiveAdapter {
    path: PathBuf,
    registry: CfPredatorRegistry,
    classifier: CfStageClassifier,
    mode: CfEmissionMode,
    min_text_chars: usize,
    context_window: usize,
}

#[derive(Default)]
struct MessageState {
    author: Option<String>,
    text: Option<String>,
    time: Option<String>,
}

#[derive(Clone, Copy)]
enum MessageField {
    Author,
    Text,
    Time,
}

struct ConversationState {
    id: Option<String>,
    prior_texts: VecDeque<String>,
    joined: Vec<String>,
    has_predator: bool,
}

impl CfChatArchiveAdapter {
    pub fn new(path: impl Into<PathBuf>, registry: CfPredatorRegistry) -> Self {
        CfChatArchiveAdapter {
            path: path.into(),
            registry,
            classifier: CfStageClassifier::default(),
            mode: CfEmissionMode::Message,
            min_text_chars: 3,
            context_window: 3,
        }
    }

    pub fn with_classifier(mut self, classifier: CfStageClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_mode(mut self, mode: CfEmissionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_context_window(mut self, window: usize) -> Self {
        self.context_window = window;
        self
    }

    fn emit_message(
        &self,
        conversation: &mut ConversationState,
        message: MessageState,
        output: &mut CfAdapterOutput,
    ) {
        let author = match message.author {
            Some(author) if !author.trim().is_empty() => author,
            _ => {
                output.skipped += 1;
                return;
            }
        };
        let text = message.text.unwrap_or_default();
        let trimmed = text.trim();

        let is_predator = self.registry.contains(&author);
        if is_predator {
            conversation.has_predator = true;
        }

        if trimmed.chars().count() < self.min_text_chars {
            output.skipped += 1;
            return;
        }

        match self.mode {
            CfEmissionMode::Message => {
                let label = self.classifier.classify(trimmed, is_predator);
                let mut record = CfRecord::new(trimmed, label, ADAPTER_NAME)
                    .with_predator_author(is_predator)
                    .with_context(conversation.prior_texts.iter().cloned().collect());
                if let Some(id) = &conversation.id {
                    record = record.with_conversation(id.clone());
                }
                if let Some(time) = message.time {
                    record = record.with_timestamp(time);
                }
                output.records.push(record);

                conversation.prior_texts.push_back(trimmed.to_string());
                while conversation.prior_texts.len() > self.context_window {
                    conversation.prior_texts.pop_front();
                }
            }
            CfEmissionMode::Conversation => {
                conversation.joined.push(trimmed.to_string());
            }
        }
    }

    fn emit_conversation(
        &self,
        conversation: ConversationState,
        output: &mut CfAdapterOutput,
    ) {
        if self.mode != CfEmissionMode::Conversation {
            return;
        }
        let joined = conversation.joined.join(" ");
        if joined.trim().chars().count() < self.min_text_chars {
            output.skipped += 1;
            return;
        }
        let label = self
            .classifier
            .classify(&joined, conversation.has_predator);
        let mut record = CfRecord::new(joined, label, ADAPTER_NAME)
            .with_predator_author(conversation.has_predator);
        if let Some(id) = conversation.id {
            record = record.with_conversation(id);
        }
        output.records.push(record);
    }
}

impl CfSourceAdapter for CfChatArchiveAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn load(&self) -> Result<CfAdapterOutput> {
        if !self.path.exists() {
            return Err(CfError::missing_source(
                ADAPTER_NAME,
                self.path.display().to_string(),
            ));
        }

        let mut reader = Reader::from_file(&self.path).map_err(|err| {
            CfError::adapter(ADAPTER_NAME, format!("cannot open archive: {}", err))
        })?;
        reader.config_mut().trim_text(true);

        let mut output = CfAdapterOutput::default();
        let mut buf = Vec::new();
        let mut conversation: Option<ConversationState> = None;
        let mut message: Option<MessageState> = None;
        let mut field: Option<MessageField> = None;
        let mut conversations_read = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(start)) => match start.name().as_ref() {
                    b"conversation" => {
                        let id = start
                            .try_get_attribute("id")
                            .ok()
                            .flatten()
                            .and_then(|attr| attr.unescape_value().ok())
                            .map(|value| value.into_owned());
                        conversation = Some(ConversationState {
                            id,
                            prior_texts: VecDeque::new(),
                            joined: Vec::new(),
                            has_predator: false,
                        });
                    }
                    b"message" => {
                        message = Some(MessageState::default());
                    }
                    b"author" => field = Some(MessageField::Author),
                    b"text" => field = Some(MessageField::Text),
                    b"time" => field = Some(MessageField::Time),
                    _ => {}
                },
                Ok(Event::Text(text)) => {
                    if let (Some(state), Some(current)) = (message.as_mut(), field) {
                        let value = text
                            .unescape()
                            .map(|cow| cow.into_owned())
                            .unwrap_or_default();
                        match current {
                            MessageField::Author => state.author = Some(value),
                            MessageField::Text => state.text = Some(value),
                            MessageField::Time => state.time = Some(value),
                        }
                    }
                }
                Ok(Event::End(end)) => match end.name().as_ref() {
                    b"conversation" => {
                        if let Some(state) = conversation.take() {
                            self.emit_conversation(state, &mut output);
                            conversations_read += 1;
                        }
                    }
                    b"message" => {
                        if let (Some(conv), Some(state)) =
                            (conversation.as_mut(), message.take())
                        {
                            self.emit_message(conv, state, &mut output);
                        } else {
                            output.skipped += 1;
                        }
                    }
                    b"author" | b"text" | b"time" => field = None,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(CfError::adapter(
                        ADAPTER_NAME,
                        format!(
                            "malformed archive at byte {}: {}",
                            reader.buffer_position(),
                            err
                        ),
                    ));
                }
            }
            buf.clear();
        }

        log::info!(
            "chat_archive: {} conversations, {} records, {} skipped entries",
            conversations_read,
            output.records.len(),
            output.skipped
        );
        Ok(output)
    }
}
