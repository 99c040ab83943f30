use std::any::Any;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{Executor, ExecutorError};

/// A recorded call to [`TestExecutor::run`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Invocation {
    pub program: PathBuf,
    pub argv: Vec<String>,
}

#[derive(Clone, Debug)]
enum Response {
    Output(Vec<u8>),
    Failure { code: Option<i32>, output: String },
}

/// Executor answering from a queue of canned responses. An empty queue answers
/// with empty output.
#[derive(Default)]
pub struct TestExecutor {
    responses: Mutex<VecDeque<Response>>,
    invocations: Mutex<Vec<Invocation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Executor for TestExecutor {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn run(&self, program: &Path, argv: &[String]) -> Result<Vec<u8>, ExecutorError> {
        lock(&self.invocations).push(Invocation {
            program: program.to_owned(),
            argv: argv.to_vec(),
        });

        match lock(&self.responses).pop_front() {
            Some(Response::Output(output)) => Ok(output),
            Some(Response::Failure { code, output }) => Err(ExecutorError::Failed {
                program: program.to_owned(),
                code,
                output,
            }),
            None => Ok(Vec::new()),
        }
    }
}

impl TestExecutor {
    pub fn push_output<O: Into<Vec<u8>>>(&self, output: O) {
        lock(&self.responses).push_back(Response::Output(output.into()));
    }

    pub fn push_failure<O: Into<String>>(&self, code: Option<i32>, output: O) {
        lock(&self.responses).push_back(Response::Failure {
            code,
            output: output.into(),
        });
    }

    pub fn get_invocations(&self) -> Vec<Invocation> {
        lock(&self.invocations).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order() {
        let executor = TestExecutor::default();
        executor.push_output("first");
        executor.push_failure(Some(2), "second");

        let program = Path::new("/usr/bin/heaver");
        let argv = vec!["heaver".to_owned(), "-L".to_owned()];
        assert_eq!(executor.run(program, &argv).unwrap(), b"first");
        let err = executor.run(program, &argv).unwrap_err();
        assert_eq!(err.output(), Some("second"));
        assert!(executor.run(program, &argv).unwrap().is_empty());

        let invocations = executor.get_invocations();
        assert_eq!(invocations.len(), 3);
        assert_eq!(invocations[0].program, PathBuf::from("/usr/bin/heaver"));
        assert_eq!(invocations[0].argv, argv);
    }
}
