use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use super::{GenerationError, GenerationOptions, TextGenerator};

/// Runs an external program per request: the prompt goes to stdin, the
/// generated text comes back on stdout. Options are passed as
/// `OPSDECK_TEMPERATURE`, `OPSDECK_TOP_P` and `OPSDECK_FORMAT`.
///
/// There is no timeout: a program that never exits blocks the caller.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandGenerator {
            program: program.into(),
            args,
        }
    }
}

impl TextGenerator for CommandGenerator {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, GenerationError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env("OPSDECK_FORMAT", options.format.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(t) = options.temperature {
            cmd.env("OPSDECK_TEMPERATURE", t.to_string());
        }
        if let Some(p) = options.top_p {
            cmd.env("OPSDECK_TOP_P", p.to_string());
        }

        log::debug!("running generator {} ({} byte prompt)", self.program, prompt.len());
        let mut child = cmd.spawn()?;
        // stdin is fed from its own thread while stdout drains
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(GenerationError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if let Some(Ok(Err(e))) = writer.map(|w| w.join())
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}
