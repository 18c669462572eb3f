// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! UTF-8 string objects.
//!
//! Strings are heap objects storing both their code-point count (`length`)
//! and byte count (`byte_length`), followed by the raw bytes. When the two
//! counts are equal the contents are plain ASCII.
//!
//! Layout at the object address:
//! - 4 bytes: object kind tag
//! - 4 bytes: length in code-point units
//! - 4 bytes: length in bytes
//! - `byte_length` bytes: UTF-8 data


use crate::heap::Heap;
use crate::object::{ObjHeader, ObjKind, Objects};
use crate::platform::Memory;
use crate::types::Addr;
use crate::value::Value;

/// String object header.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub(crate) struct UStringHeader {
    /// Shared object information; kind is always [`ObjKind::String`].
    pub obj: ObjHeader,
    /// The amount of code-point units.
    pub length: u32,
    /// The amount of bytes.
    pub byte_length: u32,
}

/// Size of the string header in bytes.
pub const HEADER_SIZE: usize = core::mem::size_of::<UStringHeader>();

/// Count the code-point units in a byte sequence.
///
/// A unit starts at every byte that is not a UTF-8 continuation byte.
fn unit_length(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count()
}

/// The byte length of the first `unit_limit` code-point units of `bytes`.
fn byte_length_for(bytes: &[u8], unit_limit: usize) -> usize {
    let mut units = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if (b & 0xC0) != 0x80 {
            units += 1;
            if units > unit_limit {
                return i;
            }
        }
    }
    bytes.len()
}

fn create_raw<M: Memory>(
    heap: &mut Heap,
    mem: &mut M,
    objects: &mut Objects,
    bytes: &[u8],
    units: usize,
) -> Option<Value> {
    let addr = objects.allocate(heap, mem, HEADER_SIZE + bytes.len(), ObjKind::String)?;

    mem.write(
        addr,
        UStringHeader {
            obj: ObjHeader {
                kind: ObjKind::String as u32,
            },
            length: units as u32,
            byte_length: bytes.len() as u32,
        },
    );

    let data_addr = addr + HEADER_SIZE as u64;
    mem.slice_mut(data_addr, bytes.len()).copy_from_slice(bytes);

    Some(Value::obj(addr))
}

/// Create a string object wrapping the given bytes.
///
/// The code-point count is computed from the bytes.
pub fn create<M: Memory>(
    heap: &mut Heap,
    mem: &mut M,
    objects: &mut Objects,
    bytes: &[u8],
) -> Option<Value> {
    let units = unit_length(bytes);
    create_raw(heap, mem, objects, bytes, units)
}

/// Create a string object wrapping the first `units` code-point units of
/// the given bytes.
pub fn ncreate<M: Memory>(
    heap: &mut Heap,
    mem: &mut M,
    objects: &mut Objects,
    bytes: &[u8],
    units: usize,
) -> Option<Value> {
    let len = byte_length_for(bytes, units);
    create_raw(heap, mem, objects, &bytes[..len], units)
}

/// Concatenate two string objects into a new string object.
///
/// Byte and unit counts are the sums of the operands'. Returns `None` if
/// either value is not a string.
pub fn concatenate<M: Memory>(
    heap: &mut Heap,
    mem: &mut M,
    objects: &mut Objects,
    left: Value,
    right: Value,
) -> Option<Value> {
    let (left_addr, right_addr) = match (left, right) {
        (Value::Obj(l), Value::Obj(r)) => (l, r),
        _ => return None,
    };

    let left_header: UStringHeader = mem.read(left_addr);
    let right_header: UStringHeader = mem.read(right_addr);
    let units = (left_header.length + right_header.length) as usize;

    let total = (left_header.byte_length + right_header.byte_length) as usize;
    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(mem.slice(
        left_addr + HEADER_SIZE as u64,
        left_header.byte_length as usize,
    ));
    bytes.extend_from_slice(mem.slice(
        right_addr + HEADER_SIZE as u64,
        right_header.byte_length as usize,
    ));

    create_raw(heap, mem, objects, &bytes, units)
}

/// The raw bytes of a string value.
///
/// Returns `None` if the value is not an object reference.
#[must_use]
pub fn as_bytes<M: Memory>(mem: &M, value: Value) -> Option<&[u8]> {
    let Value::Obj(addr) = value else {
        return None;
    };

    let header: UStringHeader = mem.read(addr);
    Some(mem.slice(addr + HEADER_SIZE as u64, header.byte_length as usize))
}

/// The contents of a string value as `&str`.
///
/// Returns `None` if the value is not a string or its bytes are not valid
/// UTF-8.
#[must_use]
pub fn as_str<M: Memory>(mem: &M, value: Value) -> Option<&str> {
    core::str::from_utf8(as_bytes(mem, value)?).ok()
}

/// The code-point count of a string value.
#[must_use]
pub fn unit_len<M: Memory>(mem: &M, value: Value) -> Option<usize> {
    let Value::Obj(addr) = value else {
        return None;
    };

    let header: UStringHeader = mem.read(addr);
    Some(header.length as usize)
}

/// The byte count of a string value.
#[must_use]
pub fn byte_len<M: Memory>(mem: &M, value: Value) -> Option<usize> {
    let Value::Obj(addr) = value else {
        return None;
    };

    let header: UStringHeader = mem.read(addr);
    Some(header.byte_length as usize)
}

/// Compare two string objects: equal iff byte length and raw bytes match.
pub(crate) fn bytes_equal<M: Memory>(mem: &M, left: Addr, right: Addr) -> bool {
    let left_header: UStringHeader = mem.read(left);
    let right_header: UStringHeader = mem.read(right);

    if left_header.byte_length != right_header.byte_length {
        return false;
    }

    let len = left_header.byte_length as usize;
    mem.slice(left + HEADER_SIZE as u64, len) == mem.slice(right + HEADER_SIZE as u64, len)
}
