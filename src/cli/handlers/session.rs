use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;

use super::{CmdResult, run_command};
use crate::assist::TextGenerator;
use crate::cli::commands::Cli;
use crate::util::words::split_words;
use crate::workspace::Workspace;

/// Apply one command per input line to `ws` until EOF or `quit`.
///
/// A failing line is reported on stderr and the session continues. `--as`
/// on a line applies to that line only; `-C` is rejected.
pub(super) fn run(ws: &mut Workspace, generator: &dyn TextGenerator, input: impl BufRead) -> CmdResult {
    let interactive = std::io::stdin().is_terminal();
    let mut failures = 0usize;

    if interactive {
        prompt();
    }
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("error: line {}: {}", n + 1, e);
                failures += 1;
                continue;
            }
        };
        match words.first().map(String::as_str) {
            None => {}
            Some("quit" | "exit") => break,
            Some(_) => {
                if let Err(e) = run_line(ws, generator, words) {
                    eprintln!("error: line {}: {}", n + 1, e);
                    failures += 1;
                }
            }
        }
        if interactive {
            prompt();
        }
    }

    if failures > 0 {
        log::warn!("session finished with {} failed line(s)", failures);
    }
    Ok(())
}

fn prompt() {
    eprint!("ops> ");
    let _ = std::io::stderr().flush();
}

fn run_line(ws: &mut Workspace, generator: &dyn TextGenerator, words: Vec<String>) -> CmdResult {
    let cli = match Cli::try_parse_from(std::iter::once("ops".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version land here
            print!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.to_string().trim_end().to_string().into()),
    };
    if cli.workspace_dir.is_some() {
        return Err("-C cannot be used inside a session".into());
    }

    let Some(user) = cli.as_user else {
        return run_command(ws, generator, cli.command, cli.json);
    };
    let previous = ws.current_user().map(|u| u.id.clone());
    ws.set_current_user(&user)?;
    let result = run_command(ws, generator, cli.command, cli.json);
    if let Some(previous) = previous {
        ws.set_current_user(&previous)?;
    }
    result
}
