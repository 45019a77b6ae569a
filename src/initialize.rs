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

//! Lifecycle payloads: `initialize` and `initialized`.

use crate::basic::WorkspaceFolder;
use crate::capabilities::{ClientCapabilities, ServerCapabilities};
use crate::enumerations::TraceValue;
use crate::progress::WorkDoneProgressParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Params of the `initialize` request, the first request on a connection.
///
/// `process_id` and `root_uri` are required but nullable: they are always
/// on the wire, as `null` when unknown. Omission and `null` are not
/// interchangeable for these two fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// The work-done progress token for the initialize request itself.
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    /// The parent process id, or `null` if the server was not spawned by
    /// the client. Servers exit when this process dies.
    #[serde(deserialize_with = "Option::deserialize")]
    pub process_id: Option<i64>,
    /// Information about the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    /// The client's locale, e.g. `"en-US"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The root of the workspace, or `null` for an open file with no
    /// folder. Superseded by `workspace_folders` when both are present.
    #[serde(deserialize_with = "Option::deserialize")]
    pub root_uri: Option<Url>,
    /// Server-specific initialization options, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialization_options: Option<Value>,
    /// What the client supports.
    pub capabilities: ClientCapabilities,
    /// The initial trace verbosity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceValue>,
    /// The configured workspace folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<Vec<WorkspaceFolder>>,
}

/// Name and version of the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// The client's name.
    pub name: String,
    /// The client's version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Result of the `initialize` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// What the server provides.
    pub capabilities: ServerCapabilities,
    /// Information about the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
}

/// Name and version of the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// The server's name.
    pub name: String,
    /// The server's version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Error data for a failed `initialize` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeError {
    /// Whether the client should retry with different params.
    pub retry: bool,
}

/// Params of the `initialized` notification; deliberately empty, reserved
/// by the protocol for future use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InitializedParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn minimal_params() -> InitializeParams {
        InitializeParams {
            work_done_progress_params: WorkDoneProgressParams::default(),
            process_id: None,
            client_info: None,
            locale: None,
            root_uri: None,
            initialization_options: None,
            capabilities: ClientCapabilities::default(),
            trace: None,
            workspace_folders: None,
        }
    }

    #[test]
    fn test_null_process_id_stays_on_the_wire() -> Result<()> {
        let json = serde_json::to_value(minimal_params())?;
        assert_eq!(
            json,
            json!({"processId": null, "rootUri": null, "capabilities": {}})
        );
        Ok(())
    }

    #[test]
    fn test_decode_null_and_reencode() -> Result<()> {
        let wire = json!({"processId": null, "rootUri": null, "capabilities": {}});
        let params: InitializeParams = serde_json::from_value(wire.clone())?;
        assert_eq!(params.process_id, None);
        assert_eq!(serde_json::to_value(&params)?, wire);
        Ok(())
    }

    #[test]
    fn test_missing_process_id_is_a_decode_error() {
        let result: Result<InitializeParams, _> =
            serde_json::from_value(json!({"rootUri": null, "capabilities": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_root_uri_is_a_decode_error() {
        let result: Result<InitializeParams, _> =
            serde_json::from_value(json!({"processId": null, "capabilities": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_params_round_trip() -> Result<()> {
        let params = InitializeParams {
            process_id: Some(4242),
            client_info: Some(ClientInfo {
                name: "test-editor".to_string(),
                version: Some("1.0".to_string()),
            }),
            root_uri: Some(Url::parse("file:///work")?),
            trace: Some(TraceValue::MESSAGES),
            workspace_folders: Some(vec![WorkspaceFolder {
                uri: Url::parse("file:///work")?,
                name: "work".to_string(),
            }]),
            ..minimal_params()
        };
        let back: InitializeParams = serde_json::from_value(serde_json::to_value(&params)?)?;
        assert_eq!(back, params);
        Ok(())
    }

    #[test]
    fn test_initialize_result_omits_absent_server_info() -> Result<()> {
        let result = InitializeResult {
            capabilities: ServerCapabilities::default(),
            server_info: None,
        };
        assert_eq!(serde_json::to_string(&result)?, r#"{"capabilities":{}}"#);
        Ok(())
    }

    #[test]
    fn test_initialize_error_round_trip() -> Result<()> {
        let data: InitializeError = serde_json::from_value(json!({"retry": true}))?;
        assert_eq!(data, InitializeError { retry: true });
        assert_eq!(serde_json::to_string(&data)?, r#"{"retry":true}"#);
        Ok(())
    }

    #[test]
    fn test_initialized_params_is_empty_object() -> Result<()> {
        assert_eq!(serde_json::to_string(&InitializedParams::default())?, "{}");
        let decoded: InitializedParams = serde_json::from_value(json!({}))?;
        assert_eq!(decoded, InitializedParams {});
        Ok(())
    }
}
