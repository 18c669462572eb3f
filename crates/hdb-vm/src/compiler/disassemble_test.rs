// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Tests for the disassembler.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{compile, disassemble_chunk, disassemble_instruction};
use crate::bytecode::Chunk;
use crate::heap::{Heap, INITIAL_MIN_SIZE};
use crate::object::Objects;
use crate::platform::MockMemory;
use crate::types::Addr;
use crate::value::Value;

struct Env {
    heap: Heap,
    mem: MockMemory,
    objects: Objects,
}

fn setup() -> Env {
    let mut mem = MockMemory::new(INITIAL_MIN_SIZE, Addr::new(0x1_0000));
    let heap = Heap::init(256, 512, &mut mem).unwrap();
    Env {
        heap,
        mem,
        objects: Objects::new(),
    }
}

fn compile_source(env: &mut Env, source: &str) -> Chunk {
    let mut chunk = Chunk::new();
    assert!(compile(
        source,
        &mut chunk,
        &mut env.heap,
        &mut env.mem,
        &mut env.objects,
    ));
    chunk
}

#[test]
fn disassembles_simple_chunk() {
    let mut env = setup();
    let chunk = compile_source(&mut env, "1");

    let listing = disassemble_chunk(&env.mem, &chunk, "code");

    assert!(listing.starts_with("== code ==\n"));
    assert!(listing.contains("0000    1 OP_CONSTANT"));
    assert!(listing.contains("'1'"));
    // RETURN shares line 1 with the constant, so the line column shows |.
    assert!(listing.contains("0002    | OP_RETURN"));
}

#[test]
fn disassembles_every_emitted_opcode() {
    let mut env = setup();
    let chunk = compile_source(&mut env, "!(1 + 2 * 3 / 4 - 5 < 6) = ('a' <> 'b')");

    let listing = disassemble_chunk(&env.mem, &chunk, "code");

    for name in [
        "OP_CONSTANT",
        "OP_ADD",
        "OP_MULTIPLY",
        "OP_DIVIDE",
        "OP_SUBTRACT",
        "OP_LESS",
        "OP_NOT",
        "OP_NOT_EQUAL",
        "OP_EQUAL",
        "OP_RETURN",
    ] {
        assert!(listing.contains(name), "missing {name} in:\n{listing}");
    }
}

#[test]
fn disassembles_long_constants() {
    let mut env = setup();

    let mut chunk = Chunk::new();
    for i in 0..257i32 {
        chunk.write_constant(&mut env.heap, &mut env.mem, Value::number(f64::from(i)), 1);
    }

    let mut out = String::new();
    let next = disassemble_instruction(&env.mem, &chunk, 512, &mut out);

    assert_eq!(next, 516);
    assert!(out.contains("OP_CONSTANT_LONG"));
    assert!(out.contains(" 256 "));
    assert!(out.contains("'256'"));
}

#[test]
fn disassembly_is_deterministic() {
    let mut env = setup();
    let source = "(-1 + 2) * 3 - -4";

    let first = {
        let chunk = compile_source(&mut env, source);
        disassemble_chunk(&env.mem, &chunk, "code")
    };
    let second = {
        let chunk = compile_source(&mut env, source);
        disassemble_chunk(&env.mem, &chunk, "code")
    };

    assert_eq!(first, second);
}

#[test]
fn unknown_opcode_is_reported() {
    let mut env = setup();

    let mut chunk = Chunk::new();
    chunk.write(&mut env.heap, &mut env.mem, 200, 1);

    let mut out = String::new();
    let next = disassemble_instruction(&env.mem, &chunk, 0, &mut out);

    assert_eq!(next, 1);
    assert!(out.contains("Unknown opcode 200"));
}
