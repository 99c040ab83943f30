use std::any::Any;
use std::io::Read;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use super::{Executor, ExecutorError};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Executor spawning real processes. Blocks the calling thread until the child exits
/// or, when configured, until the timeout expires and the child is killed.
#[derive(Debug, Default, Clone)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl Executor for ProcessExecutor {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn run(&self, program: &Path, argv: &[String]) -> Result<Vec<u8>, ExecutorError> {
        let mut command = Command::new(program);
        if let Some((arg0, args)) = argv.split_first() {
            command.arg0(arg0).args(args);
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = match self.timeout {
            None => command.output().map_err(|err| ExecutorError::Spawn {
                program: program.to_owned(),
                source: err,
            })?,
            Some(timeout) => output_with_timeout(command, program, timeout)?,
        };

        if !output.status.success() {
            // heaver reports most failures on stdout
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            if text.trim().is_empty() {
                text = String::from_utf8_lossy(&output.stderr).into_owned();
            }
            return Err(ExecutorError::Failed {
                program: program.to_owned(),
                code: output.status.code(),
                output: text,
            });
        }

        Ok(output.stdout)
    }
}

fn output_with_timeout(
    mut command: Command,
    program: &Path,
    timeout: Duration,
) -> Result<Output, ExecutorError> {
    let timed_out = || {
        tracing::warn!(?program, ?timeout, "external tool exceeded its timeout");
        ExecutorError::Timeout {
            program: program.to_owned(),
            timeout,
        }
    };

    let mut child = command.spawn().map_err(|err| ExecutorError::Spawn {
        program: program.to_owned(),
        source: err,
    })?;
    // pipes are drained concurrently so a chatty child can't block on a full pipe
    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        drain(stdout, Stream::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        drain(stderr, Stream::Stderr, tx.clone());
    }
    drop(tx);

    let deadline = Instant::now() + timeout;
    let status = loop {
        let exited = child.try_wait().map_err(|err| ExecutorError::Wait {
            program: program.to_owned(),
            source: err,
        })?;
        match exited {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(timed_out());
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    // A background process that inherited the pipes keeps them open after the
    // child exits, so collecting the output is bound by the same deadline.
    let mut output = Output {
        status,
        stdout: Vec::new(),
        stderr: Vec::new(),
    };
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, buf)) => output.stdout = buf,
            Ok((Stream::Stderr, buf)) => output.stderr = buf,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => return Err(timed_out()),
        }
    }

    Ok(output)
}

enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(mut reader: R, stream: Stream, tx: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send((stream, buf));
    });
}
