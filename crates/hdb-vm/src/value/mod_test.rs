// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Tests for the value representation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{Value, ValueArray, format_value, values_equal};
use crate::heap::{Heap, INITIAL_MIN_SIZE};
use crate::object::Objects;
use crate::platform::MockMemory;
use crate::types::Addr;
use crate::ustring;

fn setup() -> (Heap, MockMemory, Objects) {
    let mut mem = MockMemory::new(INITIAL_MIN_SIZE, Addr::new(0x1_0000));
    let heap = Heap::init(256, 512, &mut mem).unwrap();
    (heap, mem, Objects::new())
}

#[test]
fn constructors_and_predicates() {
    assert!(Value::bool(true).is_bool());
    assert!(Value::null().is_null());
    assert!(Value::number(1.5).is_number());
    assert!(Value::obj(Addr::new(0x40)).is_obj());

    assert_eq!(Value::number(1.5).as_number(), Some(1.5));
    assert_eq!(Value::bool(false).as_bool(), Some(false));
    assert_eq!(Value::null().as_number(), None);
}

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn equality_same_variant() {
    let (_, mem, _) = setup();

    assert!(values_equal(&mem, Value::null(), Value::null()));
    assert!(values_equal(&mem, Value::bool(true), Value::bool(true)));
    assert!(values_equal(&mem, Value::number(2.0), Value::number(2.0)));
    assert!(!values_equal(&mem, Value::bool(true), Value::bool(false)));
    assert!(!values_equal(&mem, Value::number(1.0), Value::number(2.0)));
}

#[test]
fn equality_cross_variant_is_false() {
    let (_, mem, _) = setup();

    assert!(!values_equal(&mem, Value::number(1.0), Value::bool(false)));
    assert!(!values_equal(&mem, Value::null(), Value::bool(false)));
    assert!(!values_equal(&mem, Value::number(0.0), Value::null()));
}

#[test]
fn equality_compares_string_contents() {
    let (mut heap, mut mem, mut objects) = setup();

    let a = ustring::create(&mut heap, &mut mem, &mut objects, b"hello").unwrap();
    let b = ustring::create(&mut heap, &mut mem, &mut objects, b"hello").unwrap();
    let c = ustring::create(&mut heap, &mut mem, &mut objects, b"world").unwrap();
    let d = ustring::create(&mut heap, &mut mem, &mut objects, b"worlds").unwrap();

    // Distinct objects with identical bytes are equal.
    assert_ne!(a, b);
    assert!(values_equal(&mem, a, b));
    assert!(!values_equal(&mem, a, c));
    assert!(!values_equal(&mem, c, d));
}

#[test]
fn value_array_grows_like_any_heap_array() {
    let (mut heap, mut mem, _) = setup();
    let mut values = ValueArray::new();

    values.push(&mut heap, &mut mem, Value::number(1.337));
    assert_eq!(values.len(), 1);
    assert_eq!(values.capacity(), 8);
    assert_eq!(values.get(&mem, 0), Value::number(1.337));

    for i in 0..8 {
        values.push(&mut heap, &mut mem, Value::number(f64::from(i)));
    }
    assert_eq!(values.len(), 9);
    assert_eq!(values.capacity(), 16);
}

#[test]
fn format_values() {
    let (mut heap, mut mem, mut objects) = setup();

    assert_eq!(format_value(&mem, Value::bool(true)), "true");
    assert_eq!(format_value(&mem, Value::bool(false)), "false");
    assert_eq!(format_value(&mem, Value::null()), "null");
    assert_eq!(format_value(&mem, Value::number(7.0)), "7");
    assert_eq!(format_value(&mem, Value::number(1.5)), "1.5");

    let s = ustring::create(&mut heap, &mut mem, &mut objects, b"string").unwrap();
    assert_eq!(format_value(&mem, s), "string");
}
