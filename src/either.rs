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

//! Sum-typed wire fields.
//!
//! Several LSP fields accept one of a fixed set of alternative shapes, with
//! no discriminator on the wire. These decode untagged: alternatives are
//! tried in declaration order and the first structural match wins.

use serde::{Deserialize, Serialize};

/// A field that holds exactly one of two alternative shapes.
///
/// Decoding tries `Left` first, then `Right`. Declare the more specific
/// alternative on the left when the shapes overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOf<A, B> {
    /// The first alternative.
    Left(A),
    /// The second alternative.
    Right(B),
}

impl<A, B> OneOf<A, B> {
    /// Returns the left alternative, if that is the populated one.
    pub const fn as_left(&self) -> Option<&A> {
        match self {
            Self::Left(a) => Some(a),
            Self::Right(_) => None,
        }
    }

    /// Returns the right alternative, if that is the populated one.
    pub const fn as_right(&self) -> Option<&B> {
        match self {
            Self::Left(_) => None,
            Self::Right(b) => Some(b),
        }
    }
}

/// A value that is either a JSON number or a JSON string.
///
/// Used for progress tokens, diagnostic codes, and anywhere else the
/// protocol lets both encodings through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    /// A numeric value.
    Number(i64),
    /// A string value.
    String(String),
}

impl From<i64> for NumberOrString {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for NumberOrString {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for NumberOrString {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

/// A progress token correlating `$/progress` notifications with the
/// request that spawned them.
pub type ProgressToken = NumberOrString;
