//! 跨平台子进程执行器
//!
//! 所有平台都通过 `Command::new()` 直接执行，不经过 shell；
//! 继承父进程的 stdin/stdout/stderr。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{BuildStep, Invocation};
use crate::domain::runner::ProcessRunner;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use tracing::debug;

/// 基于 std::process 的执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn spawn_error(invocation: &Invocation, err: std::io::Error) -> DomainError {
        let program = invocation.program.display().to_string();
        match (invocation.step, err.kind()) {
            (BuildStep::CreateVenv, ErrorKind::NotFound) => {
                DomainError::InterpreterNotFound(format!("{}: {}", program, err))
            }
            (_, ErrorKind::NotFound) => DomainError::CommandNotFound(format!(
                "{}: {} (请确保命令在 PATH 中或使用完整路径)",
                program, err
            )),
            (_, ErrorKind::PermissionDenied) => {
                DomainError::PermissionDenied(format!("{}: {}", program, err))
            }
            _ => DomainError::Io(format!("{}: {}", program, err)),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        debug!(step = %invocation.step, cwd = %invocation.cwd.display(), "exec: {}", invocation.command_line());

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);

        for key in &invocation.env_remove {
            cmd.env_remove(key);
        }
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        // 被信号终止时没有退出码
        Ok(status.code().unwrap_or(1))
    }

    fn probe(&self, program: &str, args: &[String]) -> Result<Option<String>> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            return Ok(None);
        }

        // Python 2 把版本号打印到 stderr
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };

        Ok(Some(text.lines().next().unwrap_or_default().trim().to_string()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_run_returns_exit_code() {
        let runner = SystemRunner::new();
        let inv = Invocation::new(BuildStep::Package, "sh", Path::new("."))
            .args(["-c", "exit 3"]);
        assert_eq!(runner.run(&inv).unwrap(), 3);
    }

    #[test]
    fn test_run_applies_env_and_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();
        let inv = Invocation::new(BuildStep::Package, "sh", dir.path())
            .args(["-c", "test \"$FREEZE_TEST_VAR\" = ok && touch marker"])
            .env("FREEZE_TEST_VAR", "ok");
        assert_eq!(runner.run(&inv).unwrap(), 0);
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_missing_launcher_is_interpreter_error() {
        let runner = SystemRunner::new();
        let inv = Invocation::new(
            BuildStep::CreateVenv,
            "freeze-no-such-python",
            Path::new("."),
        );
        assert!(matches!(
            runner.run(&inv),
            Err(DomainError::InterpreterNotFound(_))
        ));
    }

    #[test]
    fn test_missing_tool_is_command_not_found() {
        let runner = SystemRunner::new();
        let inv = Invocation::new(BuildStep::Package, "freeze-no-such-tool", Path::new("."));
        assert!(matches!(
            runner.run(&inv),
            Err(DomainError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_probe() {
        let runner = SystemRunner::new();
        let line = runner
            .probe("sh", &["-c".to_string(), "echo 'Python 3.12.1'; echo more".to_string()])
            .unwrap();
        assert_eq!(line.as_deref(), Some("Python 3.12.1"));
        assert_eq!(runner.probe("freeze-no-such-tool", &[]).unwrap(), None);
    }
}
