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

//! Client and server capability descriptors.
//!
//! Capability objects are trees of independently-optional flags. Absence of
//! a flag means "not supported" and nothing more; no field here defaults to
//! anything with semantic weight. Every type derives `Default` so callers
//! build them by setting only the flags they support.

use crate::completion::CompletionOptions;
use crate::either::OneOf;
use crate::enumerations::{
    CompletionItemKind, DiagnosticTag, FailureHandlingKind, MarkupKind, ResourceOperationKind,
    TextDocumentSyncKind,
};
use crate::file_ops::FileOperationRegistrationOptions;
use crate::hover::HoverOptions;
use crate::progress::WorkDoneProgressOptions;
use crate::text_sync::TextDocumentSyncOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything the client told the server it supports, sent once in
/// `initialize`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    /// Workspace-wide capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceClientCapabilities>,
    /// Per-text-document capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_document: Option<TextDocumentClientCapabilities>,
    /// Window (UI) capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowClientCapabilities>,
    /// Experimental capabilities with no fixed shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Value>,
}

/// The common "this feature can be registered dynamically" capability
/// shape, reused by every feature that has nothing else to advertise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRegistrationClientCapabilities {
    /// Whether the client accepts `client/registerCapability` for this
    /// feature after initialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

/// Workspace-scoped client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceClientCapabilities {
    /// Whether the client supports `workspace/applyEdit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_edit: Option<bool>,
    /// What kinds of workspace edits the client can apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_edit: Option<WorkspaceEditClientCapabilities>,
    /// `workspace/didChangeConfiguration` support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_change_configuration: Option<DynamicRegistrationClientCapabilities>,
    /// `workspace/didChangeWatchedFiles` support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_change_watched_files: Option<DynamicRegistrationClientCapabilities>,
    /// `workspace/executeCommand` support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_command: Option<DynamicRegistrationClientCapabilities>,
    /// Whether the client supports workspace folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<bool>,
    /// Whether the client supports `workspace/configuration` requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<bool>,
    /// File create/rename/delete notification support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<FileOperationClientCapabilities>,
}

/// What the client can do with a [`WorkspaceEdit`](crate::workspace::WorkspaceEdit).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEditClientCapabilities {
    /// Whether the client supports versioned `documentChanges`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<bool>,
    /// The resource operation kinds the client can apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_operations: Option<Vec<ResourceOperationKind>>,
    /// What the client does when an edit fails mid-application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_handling: Option<FailureHandlingKind>,
    /// Whether the client normalizes line endings when applying edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalizes_line_endings: Option<bool>,
}

/// Client-side support for file operation notifications and requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationClientCapabilities {
    /// Whether these capabilities can be registered dynamically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Sends `workspace/didCreateFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_create: Option<bool>,
    /// Sends `workspace/willCreateFiles` and awaits the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_create: Option<bool>,
    /// Sends `workspace/didRenameFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_rename: Option<bool>,
    /// Sends `workspace/willRenameFiles` and awaits the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_rename: Option<bool>,
    /// Sends `workspace/didDeleteFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_delete: Option<bool>,
    /// Sends `workspace/willDeleteFiles` and awaits the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_delete: Option<bool>,
}

/// Per-text-document client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentClientCapabilities {
    /// Document synchronization capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronization: Option<TextDocumentSyncClientCapabilities>,
    /// `textDocument/completion` capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionClientCapabilities>,
    /// `textDocument/hover` capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverClientCapabilities>,
    /// `textDocument/publishDiagnostics` capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_diagnostics: Option<PublishDiagnosticsClientCapabilities>,
}

/// Synchronization-related client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncClientCapabilities {
    /// Whether sync can be registered dynamically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Sends `textDocument/willSave`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    /// Sends `textDocument/willSaveWaitUntil` and applies returned edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    /// Sends `textDocument/didSave`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_save: Option<bool>,
}

/// Completion-related client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionClientCapabilities {
    /// Whether completion can be registered dynamically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// What the client can render on a completion item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_item: Option<CompletionItemCapability>,
    /// The item kinds the client knows how to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_item_kind: Option<CompletionItemKindCapability>,
    /// Whether the client sends [`CompletionContext`](crate::completion::CompletionContext).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_support: Option<bool>,
}

/// What the client can render on an individual completion item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItemCapability {
    /// Whether snippet insert texts are supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet_support: Option<bool>,
    /// Whether per-item commit characters are supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_characters_support: Option<bool>,
    /// Documentation formats the client renders, in preference order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_format: Option<Vec<MarkupKind>>,
    /// Whether the deprecated flag is rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_support: Option<bool>,
    /// Whether the preselect flag is honored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselect_support: Option<bool>,
}

/// The completion item kinds the client knows how to display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItemKindCapability {
    /// Known kinds; order is not significant for this value set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_set: Option<Vec<CompletionItemKind>>,
}

/// Hover-related client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverClientCapabilities {
    /// Whether hover can be registered dynamically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    /// Content formats the client renders, in preference order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_format: Option<Vec<MarkupKind>>,
}

/// Publish-diagnostics client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsClientCapabilities {
    /// Whether related-information entries are rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_information: Option<bool>,
    /// The diagnostic tags the client understands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_support: Option<DiagnosticTagSupport>,
    /// Whether the client honors the `version` on publish payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_support: Option<bool>,
    /// Whether code-description links are rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_description_support: Option<bool>,
    /// Whether the opaque `data` field is preserved across requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_support: Option<bool>,
}

/// The diagnostic tags a client understands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticTagSupport {
    /// Known tags; unknown tags received by the client are dropped.
    pub value_set: Vec<DiagnosticTag>,
}

/// Window (UI) client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowClientCapabilities {
    /// Whether the client handles server-initiated progress via
    /// `window/workDoneProgress/create`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    /// `window/showMessageRequest` capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_message: Option<ShowMessageRequestClientCapabilities>,
    /// `window/showDocument` capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_document: Option<ShowDocumentClientCapabilities>,
}

/// `window/showMessageRequest` client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageRequestClientCapabilities {
    /// Capabilities of the action items the client renders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_action_item: Option<MessageActionItemCapabilities>,
}

/// Capabilities of message action items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageActionItemCapabilities {
    /// Whether extra properties on an action item are echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties_support: Option<bool>,
}

/// `window/showDocument` client capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShowDocumentClientCapabilities {
    /// Whether the client handles the request at all.
    pub support: bool,
}

/// Everything the server told the client it provides, returned from
/// `initialize`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// How the server wants documents synced: a bare kind or full options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<OneOf<TextDocumentSyncKind, TextDocumentSyncOptions>>,
    /// Completion support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
    /// Hover support: a bare flag or options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<OneOf<bool, HoverOptions>>,
    /// `workspace/executeCommand` support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_command_provider: Option<ExecuteCommandOptions>,
    /// Workspace-scoped server capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceServerCapabilities>,
    /// Experimental capabilities with no fixed shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Value>,
}

/// Workspace-scoped server capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceServerCapabilities {
    /// Workspace folder support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<WorkspaceFoldersServerCapabilities>,
    /// File operation notifications/requests the server wants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<FileOperationOptions>,
}

/// Server-side workspace folder support.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFoldersServerCapabilities {
    /// Whether the server handles workspace folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    /// Whether the server wants change notifications; the string form is a
    /// registration id for later unregistration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_notifications: Option<OneOf<bool, String>>,
}

/// The file operation hooks a server registers statically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationOptions {
    /// Interested in `workspace/didCreateFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_create: Option<FileOperationRegistrationOptions>,
    /// Interested in `workspace/willCreateFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_create: Option<FileOperationRegistrationOptions>,
    /// Interested in `workspace/didRenameFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_rename: Option<FileOperationRegistrationOptions>,
    /// Interested in `workspace/willRenameFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_rename: Option<FileOperationRegistrationOptions>,
    /// Interested in `workspace/didDeleteFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_delete: Option<FileOperationRegistrationOptions>,
    /// Interested in `workspace/willDeleteFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_delete: Option<FileOperationRegistrationOptions>,
}

/// Server options for `workspace/executeCommand`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecuteCommandOptions {
    /// Work-done progress support for command execution.
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// The command identifiers the server handles.
    pub commands: Vec<String>,
}
