//! Interactive shell for the interpreter.
//!
//! Reads lines from stdin, runs each through a single session and prints
//! the result. Final commands are printed as the intent plus its JSON
//! payload; a real frontend would dispatch them to an executor instead.
use std::io::{BufRead, Write};

use anyhow::Result;
use tasktalk::{CoreResult, SessionStore};

fn main() -> Result<()> {
    tasktalk::setup_logging();

    let store = SessionStore::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("type a command ('exit' to quit)");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        match store.handle("repl", line) {
            CoreResult::Question { message } | CoreResult::Info { message } => {
                println!("{message}");
            }
            CoreResult::Final { intent, payload } => {
                println!("-> {intent} {}", serde_json::to_string_pretty(&payload)?);
            }
        }
    }

    Ok(())
}
