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

//! Core structural types shared across the protocol.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// A zero-based position in a text document.
///
/// `character` counts UTF-16 code units from the start of the line, per the
/// protocol's default position encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

impl Position {
    /// Creates a position from line and character offsets.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open range in a text document, `[start, end)`.
///
/// The type does not enforce `start <= end`; that ordering is the sender's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// The range's start position, inclusive.
    pub start: Position,
    /// The range's end position, exclusive.
    pub end: Position,
}

impl Range {
    /// Creates a range from start and end positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A range inside a specific document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The document's URI.
    pub uri: Url,
    /// The range within that document.
    pub range: Range,
}

/// A link between a source span and a target location, richer than
/// [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLink {
    /// Span of the origin of the link, e.g. the symbol under the cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_selection_range: Option<Range>,
    /// The target document's URI.
    pub target_uri: Url,
    /// The full range of the target, including surrounding context.
    pub target_range: Range,
    /// The range to select when following the link; contained in
    /// `target_range`.
    pub target_selection_range: Range,
}

/// A textual change to a single document: replace `range` with `new_text`.
///
/// Edits within one document apply in array order; overlapping ranges are
/// undefined behavior at the protocol level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// The range to replace.
    pub range: Range,
    /// The replacement text; empty for a deletion.
    pub new_text: String,
}

/// Identifies a document by URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    /// The document's URI.
    pub uri: Url,
}

/// A document identifier carrying the version the sender knows, for
/// optimistic concurrency on edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    /// The document's URI.
    pub uri: Url,
    /// The version the change applies to. Increases after each change,
    /// including undo/redo.
    pub version: i32,
}

/// A document identifier whose version may be unknown.
///
/// `version` is required on the wire but nullable: a sender that does not
/// know the version sends an explicit `null`, never an omission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalVersionedTextDocumentIdentifier {
    /// The document's URI.
    pub uri: Url,
    /// The known version, or `None` (wire `null`) when the content on disk
    /// is the truth.
    #[serde(deserialize_with = "Option::deserialize")]
    pub version: Option<i32>,
}

/// A document transferred from client to server on open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    /// The document's URI.
    pub uri: Url,
    /// The language identifier, e.g. `"rust"`.
    pub language_id: String,
    /// The version number of this content.
    pub version: i32,
    /// The full content of the document.
    pub text: String,
}

/// The document/position pair carried by most positional requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    /// The document in question.
    pub text_document: TextDocumentIdentifier,
    /// The position inside it.
    pub position: Position,
}

/// A filter matching documents by language, scheme, and/or glob pattern.
///
/// All three fields are optional, but a filter with none of them set
/// matches nothing useful; senders populate at least one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Language identifier to match, e.g. `"typescript"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URI scheme to match, e.g. `"file"` or `"untitled"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob pattern to match the document path against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A set of document filters; a document matches if any filter matches.
pub type DocumentSelector = Vec<DocumentFilter>;

/// A root folder of the client's workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// The folder's URI.
    pub uri: Url,
    /// The name shown in the client's UI.
    pub name: String,
}

/// A command reference: a title for the UI plus an identifier and arguments
/// the server interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// The title shown to the user.
    pub title: String,
    /// The identifier of the command handler.
    pub command: String,
    /// Arguments passed to the handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Value>>,
}
