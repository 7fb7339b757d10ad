//! NadiaVM CLI — check and replay `.nvm` programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/decode/layout error
//! - 3: Runtime error during replay

mod commands;
mod layout;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "check" => commands::check(&args[2..]),
        "run" => commands::run(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: nadia <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check <program.nvm>                     Decode a program and report errors");
    eprintln!("  run <layout.txt> <program.nvm> [--trace]  Replay a program against a level");
}
