// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Tests for the chunk format.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{Chunk, op, opcode_name};
use crate::heap::{Heap, INITIAL_MIN_SIZE};
use crate::platform::MockMemory;
use crate::types::Addr;
use crate::value::Value;

fn setup() -> (Heap, MockMemory, Chunk) {
    let mut mem = MockMemory::new(INITIAL_MIN_SIZE, Addr::new(0x1_0000));
    let heap = Heap::init(256, 512, &mut mem).unwrap();
    (heap, mem, Chunk::new())
}

#[test]
fn initializes_empty() {
    let (_, _, chunk) = setup();
    assert_eq!(chunk.code_len(), 0);
    assert_eq!(chunk.constants.len(), 0);
    assert_eq!(chunk.lines.len(), 0);
    assert_eq!(chunk.stack_high_water_mark, 0);
}

#[test]
fn write_increments_count_and_lines() {
    let (mut heap, mut mem, mut chunk) = setup();

    chunk.write_constant(&mut heap, &mut mem, Value::number(1.2), 123);
    assert_eq!(chunk.code_len(), 2);
    assert_eq!(chunk.constants.len(), 1);
    assert_eq!(chunk.constants.get(&mem, 0), Value::number(1.2));

    chunk.write(&mut heap, &mut mem, op::RETURN, 123);
    assert_eq!(chunk.code_len(), 3);
    assert_eq!(chunk.code_capacity(), 8);
    assert_eq!(chunk.lines.decode(&mem, 2), 123);
}

#[test]
fn short_constant_encoding() {
    let (mut heap, mut mem, mut chunk) = setup();

    chunk.write_constant(&mut heap, &mut mem, Value::number(7.0), 1);

    assert_eq!(chunk.code_byte(&mem, 0), op::CONSTANT);
    assert_eq!(chunk.code_byte(&mem, 1), 0);
    assert_eq!(chunk.read_constant(&mem, 1), Value::number(7.0));
}

#[test]
fn write_large_constant() {
    let (mut heap, mut mem, mut chunk) = setup();

    for i in 0..257 {
        chunk.write_constant(&mut heap, &mut mem, Value::number(1.23), i + 1);
    }

    // 256 short loads of 2 bytes, one long load of 4 bytes.
    assert_eq!(chunk.code_len(), 516);
    assert_eq!(chunk.constants.len(), 257);
    assert_eq!(chunk.constants.get(&mem, 0), Value::number(1.23));
    assert_eq!(chunk.constants.get(&mem, 256), Value::number(1.23));

    // The 256th constant uses the long form with a big-endian operand.
    assert_eq!(chunk.code_byte(&mem, 512), op::CONSTANT_LONG);
    assert_eq!(chunk.code_byte(&mem, 513), 0);
    assert_eq!(chunk.code_byte(&mem, 514), 1);
    assert_eq!(chunk.code_byte(&mem, 515), 0);
    assert_eq!(chunk.read_constant(&mem, 513), Value::number(1.23));
}

#[test]
fn boundary_between_short_and_long_form() {
    let (mut heap, mut mem, mut chunk) = setup();

    for i in 0..256u16 {
        chunk.write_constant(&mut heap, &mut mem, Value::number(f64::from(i)), 1);
    }

    // Exactly 256 constants: all short form.
    assert_eq!(chunk.code_len(), 512);
    for i in 0..256usize {
        assert_eq!(chunk.code_byte(&mem, i * 2), op::CONSTANT);
    }
}

#[test]
fn long_operand_round_trips_across_range() {
    // The operand encoding used by write_constant/read_constant.
    for index in [0usize, 255, 256, 65_535, 65_536, 16_777_215] {
        let bytes = [
            ((index >> 16) & 0xFF) as u8,
            ((index >> 8) & 0xFF) as u8,
            (index & 0xFF) as u8,
        ];
        let decoded = ((bytes[0] as usize) << 16) | ((bytes[1] as usize) << 8) | bytes[2] as usize;
        assert_eq!(decoded, index);
    }
}

#[test]
fn free_resets_chunk() {
    let (mut heap, mut mem, mut chunk) = setup();

    for i in 0..64i32 {
        chunk.write_constant(&mut heap, &mut mem, Value::number(f64::from(i)), i);
    }
    chunk.stack_high_water_mark = 9;

    chunk.free(&mut heap, &mut mem);
    assert_eq!(chunk.code_len(), 0);
    assert_eq!(chunk.constants.len(), 0);
    assert_eq!(chunk.lines.len(), 0);
    assert_eq!(chunk.stack_high_water_mark, 0);
    assert_eq!(heap.current_free(), heap.current_size());
}

#[test]
fn opcode_names() {
    assert_eq!(opcode_name(op::CONSTANT), Some("OP_CONSTANT"));
    assert_eq!(opcode_name(op::RETURN), Some("OP_RETURN"));
    assert_eq!(opcode_name(200), None);
}
