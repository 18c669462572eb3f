// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! hdb command line entry point.
//!
//! With no arguments, runs the interactive REPL. With one argument,
//! interprets the given file. Exit codes follow BSD sysexits: 64 for
//! usage errors, 65 for compile errors, 70 for runtime errors, 74 for
//! file read errors.

use std::process::exit;

use hdb_vm::platform::MappedMemory;
use hdb_vm::repl;
use hdb_vm::vm::{InterpretError, Vm};

/// Requested minimum heap size in bytes; raised by the VM to its floor.
const HEAP_MIN_SIZE: usize = 256;

/// Requested maximum heap size in bytes.
const HEAP_MAX_SIZE: usize = 512;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut vm = match Vm::new(HEAP_MIN_SIZE, HEAP_MAX_SIZE) {
        Ok(vm) => vm,
        Err(e) => {
            eprintln!("Could not initialize the virtual machine: {e}.");
            exit(exitcode::OSERR);
        }
    };

    match args.len() {
        1 => run_repl(&mut vm),
        2 => run_file(&mut vm, &args[1]),
        _ => {
            eprintln!("Usage: hdb [path]");
            exit(exitcode::USAGE);
        }
    }
}

fn run_repl(vm: &mut Vm<MappedMemory>) {
    if let Err(e) = repl::run(vm) {
        eprintln!("{e}");
        exit(exitcode::IOERR);
    }
}

fn run_file(vm: &mut Vm<MappedMemory>, path: &str) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Could not open file \"{path}\".");
            exit(exitcode::IOERR);
        }
    };

    match vm.interpret(&source) {
        Ok(_) => {}
        Err(InterpretError::Compile) => exit(exitcode::DATAERR),
        Err(InterpretError::Runtime) => exit(exitcode::SOFTWARE),
    }
}
