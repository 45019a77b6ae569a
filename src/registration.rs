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

//! Dynamic capability registration payloads.
//!
//! After initialization a server may register and unregister capabilities
//! at runtime via `client/registerCapability` and
//! `client/unregisterCapability`, for features whose client capability
//! advertised `dynamicRegistration`.

use crate::basic::DocumentSelector;
use crate::enumerations::{TextDocumentSyncKind, WatchKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One capability registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Id used to unregister later; unique per registration.
    pub id: String,
    /// The method being registered, e.g. `"textDocument/didChange"`.
    pub method: String,
    /// Method-specific registration options, e.g.
    /// [`TextDocumentChangeRegistrationOptions`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_options: Option<Value>,
}

/// Params of `client/registerCapability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationParams {
    /// The registrations, processed in order.
    pub registrations: Vec<Registration>,
}

/// One capability unregistration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unregistration {
    /// The id the capability was registered under.
    pub id: String,
    /// The method being unregistered.
    pub method: String,
}

/// Params of `client/unregisterCapability`.
///
/// The wire name `unregisterations` is a long-standing typo the protocol
/// keeps for compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregistrationParams {
    /// The unregistrations, processed in order.
    #[serde(rename = "unregisterations")]
    pub unregisterations: Vec<Unregistration>,
}

/// The base registration options of text-document methods: which documents
/// the registration applies to.
///
/// `document_selector` is required but nullable; `null` means "use the
/// selector provided on the client side".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    /// The documents the registration scopes to, or wire `null`.
    #[serde(deserialize_with = "Option::deserialize")]
    pub document_selector: Option<DocumentSelector>,
}

/// Registration options of `textDocument/didChange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentChangeRegistrationOptions {
    /// Document scope.
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    /// How changes are synced for these documents.
    pub sync_kind: TextDocumentSyncKind,
}

/// Registration options of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesRegistrationOptions {
    /// The watchers to install.
    pub watchers: Vec<FileSystemWatcher>,
}

/// One file system watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemWatcher {
    /// The glob pattern to watch.
    pub glob_pattern: String,
    /// The event kinds of interest; all three when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<WatchKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::DocumentFilter;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_registration_with_options_round_trip() -> Result<()> {
        let registration = Registration {
            id: "watch-1".to_string(),
            method: "workspace/didChangeWatchedFiles".to_string(),
            register_options: Some(serde_json::to_value(
                DidChangeWatchedFilesRegistrationOptions {
                    watchers: vec![FileSystemWatcher {
                        glob_pattern: "**/Cargo.toml".to_string(),
                        kind: Some(WatchKind::CREATE.union(WatchKind::CHANGE)),
                    }],
                },
            )?),
        };
        let back: Registration = serde_json::from_value(serde_json::to_value(&registration)?)?;
        assert_eq!(back, registration);
        Ok(())
    }

    #[test]
    fn test_unregistration_params_typo_wire_name() -> Result<()> {
        let params = UnregistrationParams {
            unregisterations: vec![Unregistration {
                id: "watch-1".to_string(),
                method: "workspace/didChangeWatchedFiles".to_string(),
            }],
        };
        let json = serde_json::to_string(&params)?;
        assert!(json.contains("unregisterations"));
        assert!(!json.contains("unregistrations"));
        Ok(())
    }

    #[test]
    fn test_null_document_selector_stays_on_the_wire() -> Result<()> {
        let options = TextDocumentRegistrationOptions {
            document_selector: None,
        };
        assert_eq!(
            serde_json::to_value(&options)?,
            json!({"documentSelector": null})
        );
        Ok(())
    }

    #[test]
    fn test_omitted_document_selector_is_a_decode_error() -> Result<()> {
        let result: Result<TextDocumentRegistrationOptions, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
        let decoded: TextDocumentRegistrationOptions =
            serde_json::from_value(json!({"documentSelector": null}))?;
        assert_eq!(decoded.document_selector, None);
        Ok(())
    }

    #[test]
    fn test_change_registration_options_flatten() -> Result<()> {
        let options = TextDocumentChangeRegistrationOptions {
            text_document_registration_options: TextDocumentRegistrationOptions {
                document_selector: Some(vec![DocumentFilter {
                    language: Some("rust".to_string()),
                    ..DocumentFilter::default()
                }]),
            },
            sync_kind: TextDocumentSyncKind::INCREMENTAL,
        };
        let json = serde_json::to_value(&options)?;
        assert_eq!(
            json,
            json!({
                "documentSelector": [{"language": "rust"}],
                "syncKind": 2
            })
        );
        Ok(())
    }
}
