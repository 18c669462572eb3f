// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Human-readable value formatting.

use crate::platform::Memory;
use crate::ustring;
use crate::value::Value;

/// Format a value for display (REPL results, disassembly, traces).
///
/// Strings print their contents; an object whose bytes are not valid UTF-8
/// never exists because string literals come from UTF-8 source.
#[must_use]
pub fn format_value<M: Memory>(mem: &M, value: Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Obj(_) => ustring::as_str(mem, value).unwrap_or("").to_string(),
    }
}
