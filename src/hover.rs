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

//! Hover request and response payloads.

use crate::basic::{Range, TextDocumentPositionParams};
use crate::enumerations::MarkupKind;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use serde::{Deserialize, Serialize};

/// Params of `textDocument/hover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    /// The document and position hovered.
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    /// Work-done progress token.
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

/// Result of `textDocument/hover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// What to show.
    pub contents: HoverContents,
    /// The span the hover applies to, used to highlight it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// The content alternatives of a hover.
///
/// `MarkupContent` is the current protocol's encoding; the scalar and
/// array `MarkedString` forms are legacy but still sent by older servers.
/// The three shapes are structurally disjoint (markup's `{kind, value}`
/// object never matches `LanguageString`'s `{language, value}`), so
/// untagged decoding is unambiguous regardless of order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverContents {
    /// A single legacy marked string.
    Scalar(MarkedString),
    /// Several legacy marked strings, rendered in order.
    Array(Vec<MarkedString>),
    /// Markup content.
    Markup(MarkupContent),
}

/// A legacy hover entry: either plain markdown or a language-tagged code
/// block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkedString {
    /// Markdown text.
    String(String),
    /// A code block, rendered with `language` highlighting.
    LanguageString(LanguageString),
}

impl MarkedString {
    /// Creates a plain string entry.
    #[must_use]
    pub fn from_markdown(markdown: String) -> Self {
        Self::String(markdown)
    }

    /// Creates a language-tagged code block entry.
    #[must_use]
    pub fn from_language_code(language: String, code: String) -> Self {
        Self::LanguageString(LanguageString {
            language,
            value: code,
        })
    }
}

/// A code block tagged with its language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageString {
    /// The language identifier, e.g. `"rust"`.
    pub language: String,
    /// The code.
    pub value: String,
}

/// Content with an explicit markup kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    /// How `value` is marked up.
    pub kind: MarkupKind,
    /// The content.
    pub value: String,
}

/// Server capability options for hover.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverOptions {
    /// Work-done progress support.
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}
