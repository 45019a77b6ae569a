// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

//! lsp-wire is a typed wire model for the Language Server Protocol (LSP).
//!
//! Every LSP message payload — request params, notification params, results,
//! and capability descriptors — is a plain serde value type with an exact
//! JSON contract: camelCase wire names, omitted (not null) optional fields,
//! and open enumerations that round-trip codes from newer protocol versions.
//!
//! Transport framing, request/response correlation, and dispatch are out of
//! scope; a transport layer picks the payload type from the RPC method name
//! and calls into [`codec`] to build or consume it.

/// Core structural types: positions, ranges, edits, document identifiers.
pub mod basic;
/// Client and server capability descriptors.
pub mod capabilities;
/// Encode/decode entry points and the decode error taxonomy.
pub mod codec;
/// Completion request and response payloads.
pub mod completion;
/// Diagnostic payloads published by the server.
pub mod diagnostics;
/// Sum-typed fields: `OneOf` and string-or-number tokens.
pub mod either;
/// Open protocol enumerations encoded as integer or string codes.
pub mod enumerations;
/// File create/rename/delete operation payloads.
pub mod file_ops;
/// Hover request and response payloads.
pub mod hover;
/// Lifecycle payloads: initialize and initialized.
pub mod initialize;
/// Work-done and partial-result progress payloads.
pub mod progress;
/// Dynamic capability registration payloads.
pub mod registration;
/// Document synchronization payloads.
pub mod text_sync;
/// Window payloads: showMessage, logMessage, showDocument.
pub mod window;
/// Workspace payloads: edits, watched files, configuration, commands.
pub mod workspace;

pub use codec::{DecodeError, decode_from_slice, decode_from_value, encode_to_value, encode_to_vec};
pub use either::{NumberOrString, OneOf};
