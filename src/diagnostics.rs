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

//! Diagnostic payloads published by the server.

use crate::basic::{Location, Range};
use crate::either::NumberOrString;
use crate::enumerations::{DiagnosticSeverity, DiagnosticTag};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// A single problem in a document, such as a compiler error or lint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The span the diagnostic applies to.
    pub range: Range,
    /// Severity; clients pick their own default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    /// The diagnostic's code, e.g. `"E0308"` or a numeric lint id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<NumberOrString>,
    /// A web link with documentation for `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,
    /// Human-readable origin, e.g. `"rustc"` or `"clippy"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The diagnostic's message.
    pub message: String,
    /// Extra presentation metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    /// Related locations, e.g. where a conflicting symbol was declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    /// Opaque payload echoed back on `codeAction` requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A link with documentation for a diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescription {
    /// Where the documentation lives.
    pub href: Url,
}

/// A location related to a diagnostic, with its own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRelatedInformation {
    /// The related location.
    pub location: Location,
    /// The message shown at that location.
    pub message: String,
}

/// Params of `textDocument/publishDiagnostics`.
///
/// The diagnostics array replaces any previously published set for the
/// document; an empty array clears it. Array order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDiagnosticsParams {
    /// The document the diagnostics belong to.
    pub uri: Url,
    /// The document version these diagnostics were computed against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// The complete current set of diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}
