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

//! Window payloads: messages the server asks the client to surface.

use crate::basic::Range;
use crate::enumerations::MessageType;
use serde::{Deserialize, Serialize};
use url::Url;

/// Params of `window/showMessage`, a fire-and-forget toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    /// The message kind.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The message text.
    pub message: String,
}

/// Params of `window/logMessage`, sent to the client's log channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageParams {
    /// The message kind.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The message text.
    pub message: String,
}

/// Params of `window/showMessageRequest`: a message plus actions; the
/// client answers with the chosen action or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageRequestParams {
    /// The message kind.
    #[serde(rename = "type")]
    pub typ: MessageType,
    /// The message text.
    pub message: String,
    /// The actions presented, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MessageActionItem>>,
}

/// One action of a [`ShowMessageRequestParams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageActionItem {
    /// The button label; also what comes back when chosen.
    pub title: String,
}

/// Params of `window/showDocument`: ask the client to open a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDocumentParams {
    /// The document to show; need not be a text document or even local.
    pub uri: Url,
    /// Open in an external program, e.g. a browser for `https` URIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    /// Open without stealing focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_focus: Option<bool>,
    /// Select this range after opening, for text documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Range>,
}

/// Result of `window/showDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentResult {
    /// Whether the client managed to show the document.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_show_message_type_wire_name() -> Result<()> {
        let params = ShowMessageParams {
            typ: MessageType::WARNING,
            message: "index out of date".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&params)?,
            json!({"type": 2, "message": "index out of date"})
        );
        Ok(())
    }

    #[test]
    fn test_show_message_request_round_trip() -> Result<()> {
        let params = ShowMessageRequestParams {
            typ: MessageType::ERROR,
            message: "workspace needs reload".to_string(),
            actions: Some(vec![
                MessageActionItem {
                    title: "Reload".to_string(),
                },
                MessageActionItem {
                    title: "Cancel".to_string(),
                },
            ]),
        };
        let back: ShowMessageRequestParams =
            serde_json::from_value(serde_json::to_value(&params)?)?;
        assert_eq!(back, params);
        Ok(())
    }

    #[test]
    fn test_show_document_minimal() -> Result<()> {
        let params: ShowDocumentParams =
            serde_json::from_value(json!({"uri": "https://example.com/doc"}))?;
        assert_eq!(params.external, None);
        assert_eq!(
            serde_json::to_string(&params)?,
            r#"{"uri":"https://example.com/doc"}"#
        );
        Ok(())
    }

    #[test]
    fn test_unknown_message_type_round_trips() -> Result<()> {
        let params: LogMessageParams =
            serde_json::from_value(json!({"type": 5, "message": "debug"}))?;
        assert_eq!(params.typ, MessageType::new(5));
        assert_eq!(serde_json::to_value(&params)?["type"], 5);
        Ok(())
    }
}
