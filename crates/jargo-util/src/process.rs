use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::errors::JargoError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments, environment
/// variables, working directory, and stream handling. Both output streams
/// are captured by default; a stream switched to pass-through mode is
/// inherited from the parent and comes back empty in the [`Output`].
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
    capture_stdout: bool,
    capture_stderr: bool,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
            capture_stdout: true,
            capture_stderr: true,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Capture the child's standard output (`true`, the default) or let it
    /// flow to the parent's console (`false`).
    pub fn capture_stdout(mut self, capture: bool) -> Self {
        self.capture_stdout = capture;
        self
    }

    /// Capture the child's standard error (`true`, the default) or let it
    /// flow to the parent's console (`false`).
    pub fn capture_stderr(mut self, capture: bool) -> Self {
        self.capture_stderr = capture;
        self
    }

    /// The full command line this builder will execute, program first.
    pub fn command_line(&self) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 1);
        line.push(self.program.clone());
        line.extend(self.args.iter().cloned());
        line
    }

    /// Spawn the command, wait for it to finish, and return its output.
    pub fn exec(&self) -> Result<Output, JargoError> {
        tracing::debug!(command = %self.command_line().join(" "), "spawning process");
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::inherit());
        cmd.stdout(if self.capture_stdout {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        cmd.stderr(if self.capture_stderr {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        let child = cmd.spawn().map_err(JargoError::from)?;
        child.wait_with_output().map_err(JargoError::from)
    }
}
