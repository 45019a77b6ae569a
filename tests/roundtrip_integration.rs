// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Integration test for wire round-trip fidelity.
//!
//! Every payload family gets at least one `decode(encode(x)) == x` check
//! through the public codec, plus the exact-bytes and order-preservation
//! contracts the transport layer depends on.

use anyhow::{Context, Result};
use lsp_wire::basic::{Position, Range, TextDocumentIdentifier, TextDocumentItem, TextEdit};
use lsp_wire::capabilities::{ClientCapabilities, ServerCapabilities};
use lsp_wire::completion::{CompletionItem, CompletionList, CompletionParams};
use lsp_wire::diagnostics::{Diagnostic, PublishDiagnosticsParams};
use lsp_wire::either::NumberOrString;
use lsp_wire::enumerations::{CompletionItemKind, DiagnosticSeverity, TextDocumentSyncKind};
use lsp_wire::hover::{Hover, HoverContents, MarkupContent};
use lsp_wire::initialize::{InitializeParams, InitializeResult, ServerInfo};
use lsp_wire::progress::{ProgressParams, WorkDoneProgress};
use lsp_wire::text_sync::{DidChangeTextDocumentParams, DidOpenTextDocumentParams};
use lsp_wire::workspace::WorkspaceEdit;
use lsp_wire::{OneOf, decode_from_slice, decode_from_value, encode_to_value, encode_to_vec};
use serde_json::json;
use url::Url;

fn round_trip<T>(payload: &T) -> Result<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    decode_from_value(encode_to_value(payload)?).context("decode of encoded payload failed")
}

#[test]
fn test_text_edit_exact_bytes() -> Result<()> {
    let edit = TextEdit {
        range: Range::new(Position::new(0, 0), Position::new(0, 5)),
        new_text: "hello".to_string(),
    };
    let bytes = encode_to_vec(&edit)?;
    assert_eq!(
        String::from_utf8(bytes.clone())?,
        r#"{"range":{"start":{"line":0,"character":0},"end":{"line":0,"character":5}},"newText":"hello"}"#
    );
    let back: TextEdit = decode_from_slice(&bytes)?;
    assert_eq!(back, edit);
    Ok(())
}

#[test]
fn test_workspace_edit_preserves_edit_order() -> Result<()> {
    let uri = Url::parse("file:///a.ts")?;
    let edit_a = TextEdit {
        range: Range::new(Position::new(0, 0), Position::new(0, 1)),
        new_text: "A".to_string(),
    };
    let edit_b = TextEdit {
        range: Range::new(Position::new(1, 0), Position::new(1, 1)),
        new_text: "B".to_string(),
    };
    let edit = WorkspaceEdit::from_changes([(uri.clone(), vec![edit_a.clone(), edit_b.clone()])]);

    let wire = encode_to_value(&edit)?;
    let serialized = &wire["changes"]["file:///a.ts"];
    assert_eq!(serialized[0]["newText"], "A");
    assert_eq!(serialized[1]["newText"], "B");

    let back: WorkspaceEdit = decode_from_value(wire)?;
    let changes = back.changes.context("changes map missing")?;
    assert_eq!(changes[&uri], vec![edit_a, edit_b]);
    Ok(())
}

#[test]
fn test_progress_token_disambiguation() -> Result<()> {
    let as_string: NumberOrString = decode_from_value(json!("abc"))?;
    assert_eq!(as_string, NumberOrString::String("abc".to_string()));

    let as_number: NumberOrString = decode_from_value(json!(42))?;
    assert_eq!(as_number, NumberOrString::Number(42));
    Ok(())
}

#[test]
fn test_initialize_round_trip() -> Result<()> {
    let params = InitializeParams {
        work_done_progress_params: lsp_wire::progress::WorkDoneProgressParams::default(),
        process_id: Some(1234),
        client_info: None,
        locale: Some("en-US".to_string()),
        root_uri: Some(Url::parse("file:///work")?),
        initialization_options: Some(json!({"checkOnSave": true})),
        capabilities: ClientCapabilities::default(),
        trace: None,
        workspace_folders: None,
    };
    assert_eq!(round_trip(&params)?, params);

    let result = InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(OneOf::Left(TextDocumentSyncKind::INCREMENTAL)),
            ..ServerCapabilities::default()
        },
        server_info: Some(ServerInfo {
            name: "test-server".to_string(),
            version: None,
        }),
    };
    assert_eq!(round_trip(&result)?, result);
    Ok(())
}

#[test]
fn test_text_sync_round_trip() -> Result<()> {
    let open = DidOpenTextDocumentParams {
        text_document: TextDocumentItem {
            uri: Url::parse("file:///lib.rs")?,
            language_id: "rust".to_string(),
            version: 0,
            text: "fn main() {}".to_string(),
        },
    };
    assert_eq!(round_trip(&open)?, open);

    let change: DidChangeTextDocumentParams = decode_from_value(json!({
        "textDocument": {"uri": "file:///lib.rs", "version": 1},
        "contentChanges": [
            {
                "range": {
                    "start": {"line": 0, "character": 3},
                    "end": {"line": 0, "character": 7}
                },
                "text": "run"
            },
            {"text": "fn run() {}"}
        ]
    }))?;
    assert_eq!(change.content_changes.len(), 2);
    assert_eq!(round_trip(&change)?, change);
    Ok(())
}

#[test]
fn test_diagnostics_round_trip_with_unknown_codes() -> Result<()> {
    let params = PublishDiagnosticsParams {
        uri: Url::parse("file:///lib.rs")?,
        version: Some(7),
        diagnostics: vec![Diagnostic {
            range: Range::new(Position::new(0, 0), Position::new(0, 4)),
            // a severity from a hypothetical future protocol revision
            severity: Some(DiagnosticSeverity::new(11)),
            code: Some(NumberOrString::String("E0308".to_string())),
            code_description: None,
            source: Some("rustc".to_string()),
            message: "mismatched types".to_string(),
            tags: None,
            related_information: None,
            data: Some(json!({"suggestion": "change the type"})),
        }],
    };
    assert_eq!(round_trip(&params)?, params);
    Ok(())
}

#[test]
fn test_completion_round_trip_every_optional_combination_that_matters() -> Result<()> {
    let bare = CompletionItem::new_simple("len");
    assert_eq!(round_trip(&bare)?, bare);

    let full = CompletionItem {
        kind: Some(CompletionItemKind::METHOD),
        detail: Some("fn len(&self) -> usize".to_string()),
        documentation: Some(OneOf::Right(MarkupContent {
            kind: lsp_wire::enumerations::MarkupKind::MARKDOWN,
            value: "Returns the length.".to_string(),
        })),
        preselect: Some(true),
        sort_text: Some("0001".to_string()),
        commit_characters: Some(vec!["(".to_string()]),
        ..CompletionItem::new_simple("len")
    };
    assert_eq!(round_trip(&full)?, full);

    let list = CompletionList {
        is_incomplete: true,
        items: vec![bare, full],
    };
    assert_eq!(round_trip(&list)?, list);
    Ok(())
}

#[test]
fn test_completion_params_round_trip() -> Result<()> {
    let params: CompletionParams = decode_from_value(json!({
        "textDocument": {"uri": "file:///a.rs"},
        "position": {"line": 1, "character": 2},
        "workDoneToken": "wd-1",
        "partialResultToken": 9,
        "context": {"triggerKind": 1}
    }))?;
    assert_eq!(
        params.text_document_position.text_document,
        TextDocumentIdentifier {
            uri: Url::parse("file:///a.rs")?,
        }
    );
    assert_eq!(round_trip(&params)?, params);
    Ok(())
}

#[test]
fn test_hover_round_trip() -> Result<()> {
    let hover = Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: lsp_wire::enumerations::MarkupKind::PLAIN_TEXT,
            value: "usize".to_string(),
        }),
        range: None,
    };
    assert_eq!(round_trip(&hover)?, hover);
    Ok(())
}

#[test]
fn test_progress_round_trip() -> Result<()> {
    let params = ProgressParams {
        token: NumberOrString::String("indexing".to_string()),
        value: encode_to_value(&WorkDoneProgress::Report {
            cancellable: None,
            message: Some("3/7 crates".to_string()),
            percentage: Some(42),
        })?,
    };
    let back = round_trip(&params)?;
    assert_eq!(back, params);

    let progress: WorkDoneProgress = decode_from_value(back.value)?;
    assert_eq!(
        progress,
        WorkDoneProgress::Report {
            cancellable: None,
            message: Some("3/7 crates".to_string()),
            percentage: Some(42),
        }
    );
    Ok(())
}
