//
//  pagerduty-backend
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output
//!
//! Every `pd` command prints its result as JSON so it can be piped into `jq`
//! or consumed by another service.
//!
//! | Style | Shape | Use Case |
//! |-------|-------|----------|
//! | [`JsonStyle::Pretty`] | indented | reading in a terminal |
//! | [`JsonStyle::Compact`] | one line | piping to other tools |

use std::io::{self, Write};

use serde::Serialize;

/// How JSON is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

/// Writes `value` to stdout followed by a newline.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or stdout is closed.
pub fn write_json<T: Serialize>(value: &T, style: JsonStyle) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value, style)
}

/// Writes `value` to `writer` followed by a newline.
///
/// ```rust
/// use pagerduty_backend::output::{write_json_to, JsonStyle};
///
/// let mut buffer = Vec::new();
/// write_json_to(&mut buffer, &serde_json::json!({"id": "P1"}), JsonStyle::Compact).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "{\"id\":\"P1\"}\n");
/// ```
pub fn write_json_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    style: JsonStyle,
) -> anyhow::Result<()> {
    match style {
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut *writer, value)?,
        JsonStyle::Compact => serde_json::to_writer(&mut *writer, value)?,
    }
    writeln!(writer)?;
    Ok(())
}
