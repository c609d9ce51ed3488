//! Task input — positional arguments, or standard input when there are none.

use crate::RunnerError;
use fa_core::task::Task;
use std::io::Read;

/// Join `args` into a task, or read the whole of `stdin` (trimmed) when
/// `args` is empty. Blank input is rejected.
pub fn read_task<R: Read>(args: &[String], mut stdin: R) -> Result<Task, RunnerError> {
    if !args.is_empty() {
        return Ok(Task::from_words(args)?);
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(RunnerError::ReadInput)?;
    Ok(Task::new(buf.trim())?)
}
