/*
 * Copyright (C) 2026 Mark Wells Dev
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Completion request and response payloads.

use crate::basic::{Command, TextDocumentPositionParams, TextEdit};
use crate::either::OneOf;
use crate::enumerations::{CompletionItemKind, CompletionTriggerKind, InsertTextFormat};
use crate::hover::MarkupContent;
use crate::progress::{PartialResultParams, WorkDoneProgressOptions, WorkDoneProgressParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Params of `textDocument/completion`.
///
/// Three mixin contracts flatten onto one JSON object alongside `context`:
/// the document/position pair, the work-done token, and the partial-result
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionParams {
    /// The document and position completion was requested at.
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    /// Work-done progress token.
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    /// Partial-result token.
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    /// How the completion was triggered; only sent by clients that
    /// advertise `contextSupport`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CompletionContext>,
}

/// Why a completion request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    /// The trigger kind.
    pub trigger_kind: CompletionTriggerKind,
    /// The character that triggered it, when `trigger_kind` is
    /// trigger-character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
}

/// A single completion proposal.
///
/// Only `label` is required; everything else refines presentation or the
/// applied edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// The text shown in the completion list, also the default insert text.
    pub label: String,
    /// The item kind, for the client's icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CompletionItemKind>,
    /// Extra detail, e.g. the symbol's type signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Documentation, plain or marked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<OneOf<String, MarkupContent>>,
    /// Whether the item is deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Whether the item should be preselected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselect: Option<bool>,
    /// Sort key; falls back to `label` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    /// Filter key; falls back to `label` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
    /// Insert text; falls back to `label` when absent. Prefer `text_edit`,
    /// which is unambiguous about the replaced range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Whether `insert_text`/`text_edit` text is plain or a snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,
    /// The edit applied when the item is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<TextEdit>,
    /// Additional edits applied with the main one, e.g. adding an import.
    /// Must not overlap the main edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_text_edits: Option<Vec<TextEdit>>,
    /// Characters that accept this item and then type themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<Vec<String>>,
    /// A command run after the item is inserted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Opaque payload echoed back on `completionItem/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CompletionItem {
    /// Creates an item with only the label set.
    #[must_use]
    pub fn new_simple(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Result of `textDocument/completion`: a list of items plus whether
/// further typing should re-query the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// When true, the list is incomplete and the client re-requests on
    /// further typing.
    pub is_incomplete: bool,
    /// The proposals.
    pub items: Vec<CompletionItem>,
}

/// Server capability options for completion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    /// Work-done progress support.
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// Characters that trigger completion automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Default commit characters for all items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_commit_characters: Option<Vec<String>>,
    /// Whether the server resolves additional item detail lazily via
    /// `completionItem/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}
