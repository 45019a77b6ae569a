// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Integration test for the decode error taxonomy and tolerance rules.
//!
//! Pins down the four-way contract: missing required fields and shape
//! mismatches fail with a structured error naming the field; unknown
//! fields and unknown enumeration codes never fail.

use anyhow::Result;
use lsp_wire::basic::TextDocumentItem;
use lsp_wire::completion::CompletionList;
use lsp_wire::diagnostics::{Diagnostic, PublishDiagnosticsParams};
use lsp_wire::initialize::InitializeParams;
use lsp_wire::text_sync::DidOpenTextDocumentParams;
use lsp_wire::window::ShowMessageParams;
use lsp_wire::workspace::ApplyWorkspaceEditResponse;
use lsp_wire::{DecodeError, decode_from_value};
use serde_json::{Value, json};

fn expect_missing_field<T: serde::de::DeserializeOwned + std::fmt::Debug>(
    value: Value,
    expected_field: &str,
) -> Result<()> {
    match decode_from_value::<T>(value) {
        Err(DecodeError::MissingRequiredField { field }) => {
            assert_eq!(field, expected_field);
            Ok(())
        }
        other => anyhow::bail!("expected MissingRequiredField({expected_field}), got {other:?}"),
    }
}

#[test]
fn test_missing_required_fields_across_payload_families() -> Result<()> {
    expect_missing_field::<Diagnostic>(
        json!({"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 0}}}),
        "message",
    )?;
    expect_missing_field::<TextDocumentItem>(
        json!({"uri": "file:///a.rs", "languageId": "rust", "version": 1}),
        "text",
    )?;
    expect_missing_field::<DidOpenTextDocumentParams>(json!({}), "textDocument")?;
    expect_missing_field::<CompletionList>(json!({"items": []}), "isIncomplete")?;
    expect_missing_field::<ApplyWorkspaceEditResponse>(json!({}), "applied")?;
    expect_missing_field::<ShowMessageParams>(json!({"message": "hi"}), "type")?;
    expect_missing_field::<PublishDiagnosticsParams>(
        json!({"uri": "file:///a.rs"}),
        "diagnostics",
    )?;
    // nullable-required: omission is still an error even though null is fine
    expect_missing_field::<InitializeParams>(
        json!({"rootUri": null, "capabilities": {}}),
        "processId",
    )?;
    Ok(())
}

#[test]
fn test_forward_compatibility_with_unknown_keys() -> Result<()> {
    let without: DidOpenTextDocumentParams = decode_from_value(json!({
        "textDocument": {
            "uri": "file:///a.rs",
            "languageId": "rust",
            "version": 1,
            "text": ""
        }
    }))?;
    let with: DidOpenTextDocumentParams = decode_from_value(json!({
        "textDocument": {
            "uri": "file:///a.rs",
            "languageId": "rust",
            "version": 1,
            "text": ""
        },
        "futureExtension": {"anything": [1, 2, 3]}
    }))?;
    assert_eq!(with, without);
    Ok(())
}

#[test]
fn test_type_mismatch_is_reported_not_coerced() {
    // diagnostics must be an array, not an object
    let result: Result<PublishDiagnosticsParams, DecodeError> = decode_from_value(json!({
        "uri": "file:///a.rs",
        "diagnostics": {}
    }));
    assert!(matches!(result, Err(DecodeError::TypeMismatch { .. })));

    // optional field with the wrong shape also fails, never "absent"
    let result: Result<PublishDiagnosticsParams, DecodeError> = decode_from_value(json!({
        "uri": "file:///a.rs",
        "version": "three",
        "diagnostics": []
    }));
    assert!(matches!(result, Err(DecodeError::TypeMismatch { .. })));
}

#[test]
fn test_error_display_names_the_field() -> Result<()> {
    match decode_from_value::<CompletionList>(json!({"items": []})) {
        Err(err) => {
            assert_eq!(err.to_string(), "missing required field `isIncomplete`");
            Ok(())
        }
        Ok(list) => anyhow::bail!("decode unexpectedly succeeded: {list:?}"),
    }
}

#[test]
fn test_null_for_plain_optional_field_decodes_as_unset() -> Result<()> {
    // Plain optional fields treat wire null like omission; they re-encode
    // as omission. Only the nullable-required fields keep null on the wire.
    let params: PublishDiagnosticsParams = decode_from_value(json!({
        "uri": "file:///a.rs",
        "version": null,
        "diagnostics": []
    }))?;
    assert_eq!(params.version, None);

    let reencoded = lsp_wire::encode_to_value(&params)?;
    assert!(reencoded.get("version").is_none());
    Ok(())
}
