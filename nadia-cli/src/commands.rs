//! CLI command implementations.

use crate::layout;
use nadia_common::Program;
use nadia_vm::{Effect, ExecError, Machine, State};
use nadia_world::World;
use std::fs;

/// Decode a .nvm program and report whether every line is well-formed.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: nadia check <program.nvm>");
        return Err(1);
    }

    let input = &args[0];
    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let program = Program::parse(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    println!("OK: {input} ({} instructions)", program.len());
    Ok(())
}

/// Replay a .nvm program against a level layout.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.len() < 2 {
        eprintln!("error: run requires a layout file and a program file");
        eprintln!("Usage: nadia run <layout.txt> <program.nvm> [--trace]");
        return Err(1);
    }

    let layout_path = &args[0];
    let program_path = &args[1];
    let trace = args[2..].iter().any(|a| a == "--trace");

    let layout_text = fs::read_to_string(layout_path).map_err(|e| {
        eprintln!("error: cannot read '{layout_path}': {e}");
        1
    })?;
    let grid = layout::parse(&layout_text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    let world = World::new(grid).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let source = fs::read_to_string(program_path).map_err(|e| {
        eprintln!("error: cannot read '{program_path}': {e}");
        1
    })?;

    let mut machine = Machine::new(&source, &world);
    while machine.has_more_instructions() {
        let effect = machine.next().map_err(|e| report_exec_error(&e))?;
        if trace {
            trace_effect(&machine, effect);
        }
    }

    match machine.state() {
        State::Halted => println!("halted at {}", machine.pos()),
        _ => println!("program ended without exit at {}", machine.pos()),
    }
    Ok(())
}

/// Decode failures are input errors (1); everything else is a runtime
/// error (3).
fn report_exec_error(e: &ExecError) -> i32 {
    match e {
        ExecError::Decode(decode) => {
            eprintln!("error: {decode}");
            1
        }
        other => {
            eprintln!("runtime error: {other}");
            3
        }
    }
}

/// One trace line per pause-worthy effect; silent bookkeeping is omitted.
fn trace_effect(machine: &Machine<'_>, effect: Effect) {
    match effect {
        Effect::Silent => {}
        Effect::Move(direction) => {
            println!("move {} -> {}", direction.name(), machine.pos());
        }
        Effect::Collect => println!("collect at {}", machine.pos()),
        Effect::Exit => println!("exit at {}", machine.pos()),
    }
}
