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

//! Document synchronization payloads.

use crate::basic::{
    Range, TextDocumentIdentifier, TextDocumentItem, VersionedTextDocumentIdentifier,
};
use crate::enumerations::{TextDocumentSaveReason, TextDocumentSyncKind};
use serde::{Deserialize, Serialize};

/// Params of `textDocument/didOpen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenTextDocumentParams {
    /// The opened document with its full content.
    pub text_document: TextDocumentItem,
}

/// Params of `textDocument/didChange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeTextDocumentParams {
    /// The document and the version number *after* all changes in this
    /// notification are applied.
    pub text_document: VersionedTextDocumentIdentifier,
    /// The changes, applied in array order against the state left by the
    /// previous element.
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

/// One change to a document's content.
///
/// The incremental alternative carries a range and is tried first; a bare
/// `{"text": ...}` object is a full-content replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextDocumentContentChangeEvent {
    /// Replace `range` with `text`.
    #[serde(rename_all = "camelCase")]
    Incremental {
        /// The range being replaced.
        range: Range,
        /// Length of the replaced span in UTF-16 code units. Redundant
        /// with `range`; some older servers still read it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range_length: Option<u32>,
        /// The replacement text.
        text: String,
    },
    /// Replace the whole document with `text`.
    Full {
        /// The new full content.
        text: String,
    },
}

/// Params of `textDocument/willSave`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillSaveTextDocumentParams {
    /// The document about to be saved.
    pub text_document: TextDocumentIdentifier,
    /// Why the save is happening.
    pub reason: TextDocumentSaveReason,
}

/// Params of `textDocument/didSave`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveTextDocumentParams {
    /// The saved document.
    pub text_document: TextDocumentIdentifier,
    /// The saved content, included only when the server registered with
    /// [`SaveOptions::include_text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Params of `textDocument/didClose`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseTextDocumentParams {
    /// The closed document. The truth about its content is the filesystem
    /// again from here on.
    pub text_document: TextDocumentIdentifier,
}

/// Save registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    /// Whether `didSave` should carry the document content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

/// How the server wants documents synced, advertised in
/// [`ServerCapabilities`](crate::capabilities::ServerCapabilities).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncOptions {
    /// Whether open/close notifications are wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_close: Option<bool>,
    /// How change notifications are synced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<TextDocumentSyncKind>,
    /// Whether `willSave` notifications are wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    /// Whether `willSaveWaitUntil` requests are wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    /// Whether and how `didSave` notifications are wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<SaveOptions>,
}
