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

//! Protocol enumerations.
//!
//! Every enumeration here is *open*: the wire carries a bare integer or
//! string code, and codes this crate does not know (from newer protocol
//! versions) must survive a decode/encode round trip unchanged. A Rust
//! `enum` would reject them, so each enumeration is a transparent newtype
//! over its wire representation with associated consts for the known codes.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $const:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            $( $(#[$vmeta])* pub const $const: Self = Self($value); )+

            /// Wraps a raw protocol code, known to this crate or not.
            #[must_use]
            pub const fn new(code: i32) -> Self {
                Self(code)
            }

            /// Returns the raw protocol code.
            #[must_use]
            pub const fn code(self) -> i32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match *self {
                    $( Self::$const => f.write_str($label), )+
                    Self(code) => write!(f, "{}({code})", stringify!($name)),
                }
            }
        }
    };
}

macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $const:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $( $(#[$vmeta])* pub const $const: Self = Self(Cow::Borrowed($value)); )+

            /// Returns the wire string for this code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }
    };
}

int_enum! {
    /// Severity of a [`Diagnostic`](crate::diagnostics::Diagnostic).
    DiagnosticSeverity {
        /// Reports an error.
        ERROR = 1 => "Error",
        /// Reports a warning.
        WARNING = 2 => "Warning",
        /// Reports an information.
        INFORMATION = 3 => "Information",
        /// Reports a hint.
        HINT = 4 => "Hint",
    }
}

int_enum! {
    /// Extra metadata about a diagnostic, rendered by the client (e.g.
    /// faded-out for unnecessary code) rather than shown as text.
    DiagnosticTag {
        /// The diagnosed code is unused or unneeded.
        UNNECESSARY = 1 => "Unnecessary",
        /// The diagnosed code is deprecated.
        DEPRECATED = 2 => "Deprecated",
    }
}

int_enum! {
    /// Kind of a `window/showMessage` or `window/logMessage` payload.
    MessageType {
        /// An error message.
        ERROR = 1 => "Error",
        /// A warning message.
        WARNING = 2 => "Warning",
        /// An information message.
        INFO = 3 => "Info",
        /// A log message.
        LOG = 4 => "Log",
    }
}

int_enum! {
    /// What happened to a watched file.
    FileChangeType {
        /// The file was created.
        CREATED = 1 => "Created",
        /// The file was changed.
        CHANGED = 2 => "Changed",
        /// The file was deleted.
        DELETED = 3 => "Deleted",
    }
}

int_enum! {
    /// How the client syncs document changes to the server.
    TextDocumentSyncKind {
        /// Documents are not synced at all.
        NONE = 0 => "None",
        /// Documents are synced by sending the full content on each change.
        FULL = 1 => "Full",
        /// Documents are synced by sending incremental changes.
        INCREMENTAL = 2 => "Incremental",
    }
}

int_enum! {
    /// Why a `textDocument/willSave` is happening.
    TextDocumentSaveReason {
        /// Manually triggered, e.g. by the user or an API call.
        MANUAL = 1 => "Manual",
        /// Automatic after a delay.
        AFTER_DELAY = 2 => "AfterDelay",
        /// The editor lost focus.
        FOCUS_OUT = 3 => "FocusOut",
    }
}

int_enum! {
    /// How a completion was triggered.
    CompletionTriggerKind {
        /// Explicitly invoked, e.g. via keyboard shortcut or API.
        INVOKED = 1 => "Invoked",
        /// Triggered by typing a registered trigger character.
        TRIGGER_CHARACTER = 2 => "TriggerCharacter",
        /// Re-triggered because the previous result was incomplete.
        TRIGGER_FOR_INCOMPLETE_COMPLETIONS = 3 => "TriggerForIncompleteCompletions",
    }
}

int_enum! {
    /// The kind of a completion entry, used by clients to pick an icon.
    CompletionItemKind {
        /// Plain text.
        TEXT = 1 => "Text",
        /// A method.
        METHOD = 2 => "Method",
        /// A function.
        FUNCTION = 3 => "Function",
        /// A constructor.
        CONSTRUCTOR = 4 => "Constructor",
        /// A field.
        FIELD = 5 => "Field",
        /// A variable.
        VARIABLE = 6 => "Variable",
        /// A class.
        CLASS = 7 => "Class",
        /// An interface.
        INTERFACE = 8 => "Interface",
        /// A module.
        MODULE = 9 => "Module",
        /// A property.
        PROPERTY = 10 => "Property",
        /// A unit.
        UNIT = 11 => "Unit",
        /// A value.
        VALUE = 12 => "Value",
        /// An enum.
        ENUM = 13 => "Enum",
        /// A keyword.
        KEYWORD = 14 => "Keyword",
        /// A snippet.
        SNIPPET = 15 => "Snippet",
        /// A color.
        COLOR = 16 => "Color",
        /// A file.
        FILE = 17 => "File",
        /// A reference.
        REFERENCE = 18 => "Reference",
        /// A folder.
        FOLDER = 19 => "Folder",
        /// An enum member.
        ENUM_MEMBER = 20 => "EnumMember",
        /// A constant.
        CONSTANT = 21 => "Constant",
        /// A struct.
        STRUCT = 22 => "Struct",
        /// An event.
        EVENT = 23 => "Event",
        /// An operator.
        OPERATOR = 24 => "Operator",
        /// A type parameter.
        TYPE_PARAMETER = 25 => "TypeParameter",
    }
}

int_enum! {
    /// How a completion item's insert text is interpreted.
    InsertTextFormat {
        /// Inserted as plain text.
        PLAIN_TEXT = 1 => "PlainText",
        /// Inserted as a snippet with tab stops and placeholders.
        SNIPPET = 2 => "Snippet",
    }
}

/// Bitmask of file events a watcher is interested in.
///
/// Unlike the other integer enumerations this is a flag set; any
/// combination of the three bits is valid on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchKind(u8);

impl WatchKind {
    /// Interested in create events.
    pub const CREATE: Self = Self(1);
    /// Interested in change events.
    pub const CHANGE: Self = Self(2);
    /// Interested in delete events.
    pub const DELETE: Self = Self(4);
    /// Interested in all three event kinds; the protocol default.
    pub const ALL: Self = Self(7);

    /// Wraps a raw bitmask.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

str_enum! {
    /// Format of human-readable content such as hover text or completion
    /// documentation.
    MarkupKind {
        /// Plain text.
        PLAIN_TEXT = "plaintext",
        /// Markdown.
        MARKDOWN = "markdown",
    }
}

str_enum! {
    /// A resource operation the client can apply as part of a workspace
    /// edit.
    ResourceOperationKind {
        /// Create a new file or folder.
        CREATE = "create",
        /// Rename a file or folder.
        RENAME = "rename",
        /// Delete a file or folder.
        DELETE = "delete",
    }
}

str_enum! {
    /// What the client does when part of a workspace edit fails to apply.
    FailureHandlingKind {
        /// Stop applying; already-applied operations stay applied.
        ABORT = "abort",
        /// All-or-nothing.
        TRANSACTIONAL = "transactional",
        /// Textual edits are transactional; resource changes abort.
        TEXT_ONLY_TRANSACTIONAL = "textOnlyTransactional",
        /// Undo already-applied operations on failure, best effort.
        UNDO = "undo",
    }
}

str_enum! {
    /// Verbosity of `$/logTrace` notifications the client asked for.
    TraceValue {
        /// Tracing disabled.
        OFF = "off",
        /// Trace messages only.
        MESSAGES = "messages",
        /// Trace messages with verbose payloads.
        VERBOSE = "verbose",
    }
}

str_enum! {
    /// Whether a file operation pattern matches files, folders, or both
    /// when unset.
    FileOperationPatternKind {
        /// Match files only.
        FILE = "file",
        /// Match folders only.
        FOLDER = "folder",
    }
}
