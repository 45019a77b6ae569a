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

//! Work-done and partial-result progress payloads.
//!
//! [`WorkDoneProgressParams`] and [`PartialResultParams`] are mixin
//! contracts: request payloads embed them with `#[serde(flatten)]` so their
//! token fields land on the same flat JSON object as the request's own
//! fields. No contract may collide with another on a wire name.

use crate::either::ProgressToken;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mixin carrying the token a server reports work-done progress under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressParams {
    /// Token the client passed to identify this request's progress stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Mixin carrying the token a server streams partial results under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    /// Token identifying the partial-result stream for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}

/// Payload of a `$/progress` notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressParams {
    /// The token the progress was requested under.
    pub token: ProgressToken,
    /// The progress body; shape depends on what the token was issued for.
    pub value: Value,
}

/// Body of a work-done progress stream, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkDoneProgress {
    /// The stream starts; carries the title shown to the user.
    #[serde(rename_all = "camelCase")]
    Begin {
        /// Title of the long-running operation.
        title: String,
        /// Whether the user may request cancellation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cancellable: Option<bool>,
        /// Detail message shown next to the title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// Initial completion percentage, 0 to 100.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        percentage: Option<u32>,
    },
    /// An intermediate report on an open stream.
    #[serde(rename_all = "camelCase")]
    Report {
        /// Updated cancellability.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cancellable: Option<bool>,
        /// Updated detail message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// Updated completion percentage; must not decrease.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        percentage: Option<u32>,
    },
    /// The stream is finished.
    End {
        /// Final message, e.g. "indexing complete".
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// Params of `window/workDoneProgress/create`, sent by the server to ask
/// the client to surface a progress stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCreateParams {
    /// The token the server will report progress under.
    pub token: ProgressToken,
}

/// Params of `window/workDoneProgress/cancel`, sent by the client when the
/// user cancels a progress stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDoneProgressCancelParams {
    /// The token of the stream being cancelled.
    pub token: ProgressToken,
}

/// Capability options mixin advertising work-done progress support; server
/// option types embed it flattened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressOptions {
    /// Whether the server reports progress for this feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}
