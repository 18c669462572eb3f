// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Interactive read-eval-print loop.
//!
//! Reads one line at a time, interprets it and prints the resulting
//! value. Compile and runtime diagnostics have already been written to
//! stderr by the time [`Vm::interpret`] returns, so errors only skip the
//! result line.


use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::platform::Memory;
use crate::vm::Vm;

/// Interpret one line and render its result.
///
/// Returns `None` when the line failed to compile or run.
pub fn evaluate<M: Memory>(vm: &mut Vm<M>, line: &str) -> Option<String> {
    vm.interpret(line).ok().map(|value| vm.format(value))
}

/// Run the REPL until end of input.
///
/// # Errors
///
/// Returns an error when reading from the terminal fails for a reason
/// other than end-of-input or interrupt.
pub fn run<M: Memory>(vm: &mut Vm<M>) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                if let Some(result) = evaluate(vm, &line) {
                    println!("{result}");
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
