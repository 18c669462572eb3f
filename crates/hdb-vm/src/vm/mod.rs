// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 houthacker

//! Stack virtual machine for hdb bytecode.
//!
//! The VM owns the heap, the arena it manages, the object registry and the
//! value stack. [`Vm::interpret`] compiles one source expression into a
//! fresh chunk, sizes the stack to the chunk's high-water mark once, runs
//! the dispatch loop and frees the chunk again. Dropping the VM releases
//! the arena and with it every object.


use std::io;

use crate::bytecode::{Chunk, op};
use crate::compiler;
use crate::heap::{self, Heap};
use crate::object::{self, Objects};
use crate::os;
use crate::platform::{MappedMemory, Memory};
use crate::types::Addr;
use crate::ustring;
use crate::value::{Value, format_value, values_equal};

/// Maximum number of value stack entries (4 MiB of 8-byte slots).
pub const STACK_MAX: usize = 524_288;

/// Virtual base address the arena is exposed at.
const ARENA_BASE: Addr = Addr::new(0x1_0000);

/// Why an interpretation did not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretError {
    /// Compilation of the source failed; diagnostics went to stderr.
    Compile,
    /// Execution failed at runtime; the error went to stderr.
    Runtime,
}

impl core::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compile => write!(f, "compile error"),
            Self::Runtime => write!(f, "runtime error"),
        }
    }
}

/// The hdb virtual machine.
pub struct Vm<M: Memory> {
    heap: Heap,
    mem: M,
    objects: Objects,
    stack: Vec<Value>,
    stack_capacity: usize,
}

impl Vm<MappedMemory> {
    /// Create a VM backed by an OS reservation.
    ///
    /// The actual heap bounds are derived from the requested ones: the
    /// minimum is raised to the larger of one sixty-fourth of total RAM
    /// and 8 MiB, and both bounds are power-of-two aligned.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses the reservation.
    pub fn new(heap_min_size: usize, heap_max_size: usize) -> io::Result<Self> {
        let actual_min = heap::initial_size(heap_min_size);
        let actual_max = if heap_max_size > actual_min {
            heap::align_pow2(heap_max_size)
        } else {
            actual_min
        };

        let mut mem = MappedMemory::reserve(actual_max, ARENA_BASE)?;
        let heap = Heap::init(actual_min, actual_max, &mut mem)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self::from_parts(heap, mem))
    }
}

impl<M: Memory> Vm<M> {
    /// Create a VM over a caller-provided arena.
    ///
    /// # Errors
    ///
    /// Returns an error if the heap bounds are invalid for the arena.
    pub fn with_memory(
        heap_min_size: usize,
        heap_max_size: usize,
        mut mem: M,
    ) -> Result<Self, heap::HeapError> {
        let heap = Heap::init(heap_min_size, heap_max_size, &mut mem)?;
        Ok(Self::from_parts(heap, mem))
    }

    fn from_parts(heap: Heap, mem: M) -> Self {
        // Initial stack capacity follows the heap size so small embedded
        // heaps get small stacks.
        let heap_based_capacity = heap.current_size() / 4096;
        let stack_capacity = if heap_based_capacity == 0 {
            512
        } else {
            heap_based_capacity
        };

        Self {
            heap,
            mem,
            objects: Objects::new(),
            stack: Vec::with_capacity(stack_capacity),
            stack_capacity,
        }
    }

    /// The VM's heap.
    #[must_use]
    pub const fn heap(&self) -> &Heap {
        &self.heap
    }

    /// The VM's memory arena.
    #[must_use]
    pub const fn memory(&self) -> &M {
        &self.mem
    }

    /// The VM's object registry.
    #[must_use]
    pub const fn objects(&self) -> &Objects {
        &self.objects
    }

    /// Current value stack capacity in entries.
    #[must_use]
    pub const fn stack_capacity(&self) -> usize {
        self.stack_capacity
    }

    /// Format a value against this VM's arena.
    #[must_use]
    pub fn format(&self, value: Value) -> String {
        format_value(&self.mem, value)
    }

    /// Compile and execute one source expression.
    ///
    /// # Errors
    ///
    /// Returns [`InterpretError::Compile`] when compilation fails and
    /// [`InterpretError::Runtime`] when execution fails; diagnostics have
    /// already been written to stderr in both cases.
    pub fn interpret(&mut self, source: &str) -> Result<Value, InterpretError> {
        let mut chunk = Chunk::new();

        let compiled = compiler::compile(
            source,
            &mut chunk,
            &mut self.heap,
            &mut self.mem,
            &mut self.objects,
        );
        if !compiled {
            chunk.free(&mut self.heap, &mut self.mem);
            return Err(InterpretError::Compile);
        }

        self.ensure_stack_size(chunk.stack_high_water_mark as usize);
        let result = self.run(&chunk);

        chunk.free(&mut self.heap, &mut self.mem);
        result
    }

    fn run(&mut self, chunk: &Chunk) -> Result<Value, InterpretError> {
        let mut ip = 0usize;

        loop {
            #[cfg(feature = "debug-execution")]
            {
                let mut trace = String::from("          ");
                for value in &self.stack {
                    trace.push_str("[ ");
                    trace.push_str(&format_value(&self.mem, *value));
                    trace.push_str(" ]");
                }
                println!("{trace}");

                let mut listing = String::new();
                compiler::disassemble_instruction(&self.mem, chunk, ip, &mut listing);
                print!("{listing}");
            }

            let instruction = chunk.code_byte(&self.mem, ip);
            ip += 1;

            match instruction {
                op::CONSTANT => {
                    let value = chunk.read_constant(&self.mem, ip);
                    ip += 1;
                    self.push(value);
                }
                op::CONSTANT_LONG => {
                    let value = chunk.read_constant(&self.mem, ip);
                    ip += 3;
                    self.push(value);
                }

                op::NULL => self.push(Value::null()),
                op::TRUE => self.push(Value::bool(true)),
                op::FALSE => self.push(Value::bool(false)),

                op::EQUAL => {
                    let right = self.pop();
                    let left = self.pop();
                    let equal = values_equal(&self.mem, left, right);
                    self.push(Value::bool(equal));
                }
                op::NOT_EQUAL => {
                    let right = self.pop();
                    let left = self.pop();
                    let equal = values_equal(&self.mem, left, right);
                    self.push(Value::bool(!equal));
                }

                op::LESS => self.binary_number_op(chunk, ip, |l, r| Value::bool(l < r))?,
                op::LESS_EQUAL => self.binary_number_op(chunk, ip, |l, r| Value::bool(l <= r))?,
                op::GREATER => self.binary_number_op(chunk, ip, |l, r| Value::bool(l > r))?,
                op::GREATER_EQUAL => {
                    self.binary_number_op(chunk, ip, |l, r| Value::bool(l >= r))?;
                }

                op::ADD => {
                    if object::is_string(&self.mem, self.peek(0))
                        && object::is_string(&self.mem, self.peek(1))
                    {
                        self.concatenate();
                    } else if self.peek(0).is_number() && self.peek(1).is_number() {
                        self.binary_number_op(chunk, ip, |l, r| Value::number(l + r))?;
                    } else {
                        self.runtime_error(
                            chunk,
                            ip,
                            "Operands must be two numbers or two strings.",
                        );
                        return Err(InterpretError::Runtime);
                    }
                }
                op::SUBTRACT => self.binary_number_op(chunk, ip, |l, r| Value::number(l - r))?,
                op::MULTIPLY => self.binary_number_op(chunk, ip, |l, r| Value::number(l * r))?,
                op::DIVIDE => self.binary_number_op(chunk, ip, |l, r| Value::number(l / r))?,

                op::NOT => {
                    let Some(b) = self.peek(0).as_bool() else {
                        self.runtime_error(chunk, ip, "Operand must be a boolean value.");
                        return Err(InterpretError::Runtime);
                    };

                    // Update in place.
                    self.set_top(Value::bool(!b));
                }
                op::NEGATE => {
                    let Some(n) = self.peek(0).as_number() else {
                        self.runtime_error(chunk, ip, "Operand must be a number.");
                        return Err(InterpretError::Runtime);
                    };

                    // Update in place.
                    self.set_top(Value::number(-n));
                }

                op::RETURN => {
                    return Ok(self.pop());
                }

                _ => {
                    self.runtime_error(chunk, ip, "Unknown opcode.");
                    return Err(InterpretError::Runtime);
                }
            }
        }
    }

    fn binary_number_op(
        &mut self,
        chunk: &Chunk,
        ip: usize,
        apply: fn(f64, f64) -> Value,
    ) -> Result<(), InterpretError> {
        if !self.peek(0).is_number() || !self.peek(1).is_number() {
            self.runtime_error(chunk, ip, "Operands must be numbers.");
            return Err(InterpretError::Runtime);
        }

        let right = self.pop().as_number().unwrap_or_default();
        let left = self.pop().as_number().unwrap_or_default();
        self.push(apply(left, right));

        Ok(())
    }

    fn concatenate(&mut self) {
        let right = self.pop();
        let left = self.pop();

        let result =
            ustring::concatenate(&mut self.heap, &mut self.mem, &mut self.objects, left, right)
                .unwrap_or(Value::null());
        self.push(result);
    }

    fn runtime_error(&mut self, chunk: &Chunk, ip: usize, message: &str) {
        eprintln!("{message}");

        let instruction = ip as i32 - 1;
        let line = chunk.lines.decode(&self.mem, instruction);
        eprintln!("[line {line}] in script");

        self.stack.clear();
    }

    /// Push a value. The stack was sized to the chunk's high-water mark
    /// before execution, so no capacity check is needed here.
    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pop the top of the stack. The compiler's stack accounting
    /// guarantees a non-empty stack at every pop site.
    fn pop(&mut self) -> Value {
        self.stack.pop().unwrap_or_default()
    }

    fn peek(&self, distance: usize) -> Value {
        self.stack[self.stack.len() - 1 - distance]
    }

    fn set_top(&mut self, value: Value) {
        let top = self.stack.len() - 1;
        self.stack[top] = value;
    }

    /// Make sure at least `high_water_mark` stack slots are free.
    fn ensure_stack_size(&mut self, high_water_mark: usize) {
        let stack_free = self.stack_capacity - self.stack.len();
        if stack_free >= high_water_mark {
            return;
        }

        let mut factor = 1;
        while self.stack_capacity * factor - self.stack.len() < high_water_mark {
            factor *= 2;
        }

        self.stack_grow(factor);
    }

    fn stack_grow(&mut self, factor: usize) {
        let requested_capacity = self.stack_capacity * factor;

        // Stack overflow when requesting more than the maximum capacity.
        if requested_capacity > STACK_MAX {
            if os::raise_signal(os::SIGSEGV) != 0 {
                os::abort();
            }
            return;
        }

        self.stack_capacity = requested_capacity;
        if requested_capacity > self.stack.capacity() {
            self.stack.reserve_exact(requested_capacity - self.stack.len());
        }
    }
}
