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

//! File operation payloads.
//!
//! The `workspace/willCreateFiles` family fires before an operation (the
//! server may answer with a [`WorkspaceEdit`](crate::workspace::WorkspaceEdit))
//! and the `did*` family after. Params carry plain string URIs, not parsed
//! URLs: for `will`/`did` rename pairs the old URI may no longer exist and
//! clients send exactly what they will pass to the filesystem layer.

use crate::enumerations::FileOperationPatternKind;
use serde::{Deserialize, Serialize};

/// Params of `workspace/willCreateFiles` and `workspace/didCreateFiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFilesParams {
    /// The files being or having been created, in operation order.
    pub files: Vec<FileCreate>,
}

/// One created file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCreate {
    /// The file's URI.
    pub uri: String,
}

/// Params of `workspace/willRenameFiles` and `workspace/didRenameFiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFilesParams {
    /// The renames, in operation order.
    pub files: Vec<FileRename>,
}

/// One renamed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRename {
    /// The URI before the rename.
    pub old_uri: String,
    /// The URI after the rename.
    pub new_uri: String,
}

/// Params of `workspace/willDeleteFiles` and `workspace/didDeleteFiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFilesParams {
    /// The files being or having been deleted, in operation order.
    pub files: Vec<FileDelete>,
}

/// One deleted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDelete {
    /// The file's URI.
    pub uri: String,
}

/// What file operations a server registers interest in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationRegistrationOptions {
    /// The patterns; an operation matches if any filter matches.
    pub filters: Vec<FileOperationFilter>,
}

/// One filter of a file operation registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationFilter {
    /// URI scheme to match, e.g. `"file"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// The path pattern.
    pub pattern: FileOperationPattern,
}

/// A glob pattern over file paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationPattern {
    /// The glob, e.g. `"**/*.rs"`.
    pub glob: String,
    /// Whether the glob matches files, folders, or both when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<FileOperationPatternKind>,
    /// Matching options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FileOperationPatternOptions>,
}

/// Options for a [`FileOperationPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationPatternOptions {
    /// Match case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_rename_params_wire_names() -> Result<()> {
        let params = RenameFilesParams {
            files: vec![FileRename {
                old_uri: "file:///old.rs".to_string(),
                new_uri: "file:///new.rs".to_string(),
            }],
        };
        let json = serde_json::to_value(&params)?;
        assert_eq!(
            json,
            json!({"files": [{"oldUri": "file:///old.rs", "newUri": "file:///new.rs"}]})
        );
        Ok(())
    }

    #[test]
    fn test_registration_options_round_trip() -> Result<()> {
        let options = FileOperationRegistrationOptions {
            filters: vec![FileOperationFilter {
                scheme: Some("file".to_string()),
                pattern: FileOperationPattern {
                    glob: "**/*.rs".to_string(),
                    matches: Some(FileOperationPatternKind::FILE),
                    options: Some(FileOperationPatternOptions {
                        ignore_case: Some(true),
                    }),
                },
            }],
        };
        let back: FileOperationRegistrationOptions =
            serde_json::from_value(serde_json::to_value(&options)?)?;
        assert_eq!(back, options);
        Ok(())
    }

    #[test]
    fn test_delete_params_requires_files() {
        let result: Result<DeleteFilesParams, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }
}
