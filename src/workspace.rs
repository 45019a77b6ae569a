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

//! Workspace payloads: edits, watched files, configuration, and commands.

use crate::basic::{OptionalVersionedTextDocumentIdentifier, TextEdit, WorkspaceFolder};
use crate::enumerations::FileChangeType;
use crate::progress::WorkDoneProgressParams;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// A set of changes across the workspace.
///
/// `changes` maps each document URI to its edits; edits within one
/// document apply in array order, and the map keeps insertion order on a
/// round trip. `document_changes` is the richer versioned form; a client
/// that advertises `documentChanges` support receives one or the other,
/// never both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEdit {
    /// Plain per-document edits, keyed by document URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<IndexMap<Url, Vec<TextEdit>>>,
    /// Versioned text edits interleaved with resource operations, applied
    /// in array order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<Vec<DocumentChange>>,
}

impl WorkspaceEdit {
    /// Builds a plain `changes`-style edit from per-document edit lists,
    /// keeping the given document order.
    #[must_use]
    pub fn from_changes(changes: impl IntoIterator<Item = (Url, Vec<TextEdit>)>) -> Self {
        Self {
            changes: Some(changes.into_iter().collect()),
            document_changes: None,
        }
    }
}

/// One entry of [`WorkspaceEdit::document_changes`].
///
/// Resource operations carry a `kind` discriminator on the wire; a text
/// document edit has none, so it decodes last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentChange {
    /// A create/rename/delete resource operation.
    Operation(ResourceOp),
    /// Edits to one document at a known version.
    Edit(TextDocumentEdit),
}

/// A file resource operation, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceOp {
    /// Create a file.
    Create(CreateFile),
    /// Rename a file.
    Rename(RenameFile),
    /// Delete a file.
    Delete(DeleteFile),
}

/// Create a file as part of a workspace edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFile {
    /// The URI to create.
    pub uri: Url,
    /// Behavior when the file already exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CreateFileOptions>,
}

/// Options for [`CreateFile`]. `overwrite` wins over `ignore_if_exists`
/// when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileOptions {
    /// Overwrite an existing file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Skip the operation if the file exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Rename a file as part of a workspace edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFile {
    /// The existing URI.
    pub old_uri: Url,
    /// The new URI.
    pub new_uri: Url,
    /// Behavior when the target already exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RenameFileOptions>,
}

/// Options for [`RenameFile`]. `overwrite` wins over `ignore_if_exists`
/// when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFileOptions {
    /// Overwrite an existing target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Skip the operation if the target exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_if_exists: Option<bool>,
}

/// Delete a file as part of a workspace edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFile {
    /// The URI to delete.
    pub uri: Url,
    /// Recursion and existence behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<DeleteFileOptions>,
}

/// Options for [`DeleteFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileOptions {
    /// Delete folder content recursively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    /// Succeed even when the target does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_if_not_exists: Option<bool>,
}

/// Edits to one document, pinned to the version the sender computed them
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentEdit {
    /// The document and the version the edits apply to.
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    /// The edits, applied in array order.
    pub edits: Vec<TextEdit>,
}

/// Params of `workspace/applyEdit`, sent server-to-client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyWorkspaceEditParams {
    /// A label shown in the client's undo stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The edit to apply.
    pub edit: WorkspaceEdit,
}

/// Result of `workspace/applyEdit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyWorkspaceEditResponse {
    /// Whether the edit was applied.
    pub applied: bool,
    /// Why it was not, when `applied` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Index into `document_changes` of the first failed change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_change: Option<u32>,
}

/// Params of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesParams {
    /// The observed events, in occurrence order.
    pub changes: Vec<FileEvent>,
}

/// One observed file event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEvent {
    /// The file's URI.
    pub uri: Url,
    /// What happened to it.
    #[serde(rename = "type")]
    pub typ: FileChangeType,
}

/// Params of `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidChangeConfigurationParams {
    /// The changed settings blob; free-form, server-defined shape.
    pub settings: Value,
}

/// Params of `workspace/configuration`, sent server-to-client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationParams {
    /// The settings being asked for; the result array matches this order.
    pub items: Vec<ConfigurationItem>,
}

/// One requested configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    /// Scope to resolve the setting in, usually a document URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_uri: Option<Url>,
    /// Dotted section name, e.g. `"rust-analyzer.cargo"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Params of `workspace/executeCommand`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandParams {
    /// Work-done progress token.
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    /// The command identifier.
    pub command: String,
    /// Arguments the command handler expects; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Value>,
}

/// Params of `workspace/didChangeWorkspaceFolders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWorkspaceFoldersParams {
    /// What changed.
    pub event: WorkspaceFoldersChangeEvent,
}

/// Folders added to and removed from the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFoldersChangeEvent {
    /// Added folders.
    pub added: Vec<WorkspaceFolder>,
    /// Removed folders.
    pub removed: Vec<WorkspaceFolder>,
}
