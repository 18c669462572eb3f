// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Human-readable chunk dumps.

use std::fmt::Write;

use crate::bytecode::{Chunk, op, opcode_name};
use crate::platform::Memory;
use crate::value::format_value;

/// Disassemble a whole chunk under a header line.
#[must_use]
pub fn disassemble_chunk<M: Memory>(mem: &M, chunk: &Chunk, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {name} ==");

    let mut offset = 0;
    while offset < chunk.code_len() {
        offset = disassemble_instruction(mem, chunk, offset, &mut out);
    }

    out
}

/// Disassemble the instruction at `offset` into `out`.
///
/// Returns the offset of the next instruction. The line column prints `|`
/// for instructions on the same source line as their predecessor.
pub fn disassemble_instruction<M: Memory>(
    mem: &M,
    chunk: &Chunk,
    offset: usize,
    out: &mut String,
) -> usize {
    let _ = write!(out, "{offset:04} ");

    let line = chunk.lines.decode(mem, offset as i32);
    if offset > 0 && line == chunk.lines.decode(mem, offset as i32 - 1) {
        let _ = write!(out, "   | ");
    } else {
        let _ = write!(out, "{line:4} ");
    }

    let instruction = chunk.code_byte(mem, offset);
    match instruction {
        op::CONSTANT => constant_instruction("OP_CONSTANT", mem, chunk, offset, out),
        op::CONSTANT_LONG => constant_long_instruction("OP_CONSTANT_LONG", mem, chunk, offset, out),
        _ => match opcode_name(instruction) {
            Some(name) => simple_instruction(name, offset, out),
            None => {
                let _ = writeln!(out, "Unknown opcode {instruction}");
                offset + 1
            }
        },
    }
}

fn simple_instruction(name: &str, offset: usize, out: &mut String) -> usize {
    let _ = writeln!(out, "{name}");
    offset + 1
}

fn constant_instruction<M: Memory>(
    name: &str,
    mem: &M,
    chunk: &Chunk,
    offset: usize,
    out: &mut String,
) -> usize {
    let index = chunk.code_byte(mem, offset + 1) as usize;
    let value = chunk.constants.get(mem, index);
    let _ = writeln!(out, "{name:<16} {index:4} '{}'", format_value(mem, value));

    offset + 2
}

fn constant_long_instruction<M: Memory>(
    name: &str,
    mem: &M,
    chunk: &Chunk,
    offset: usize,
    out: &mut String,
) -> usize {
    let index = ((chunk.code_byte(mem, offset + 1) as usize) << 16)
        | ((chunk.code_byte(mem, offset + 2) as usize) << 8)
        | (chunk.code_byte(mem, offset + 3) as usize);
    let value = chunk.constants.get(mem, index);
    let _ = writeln!(out, "{name:<16} {index:4} '{}'", format_value(mem, value));

    offset + 4
}
