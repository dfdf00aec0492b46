//! 测试工具模块
//!
//! 提供环境变量守卫和可编排退出码的进程执行器

use crate::domain::error::Result;
use crate::domain::models::{BuildStep, Invocation};
use crate::domain::runner::ProcessRunner;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_ref() != Some(value) {
                self.set_var(key, value);
            }
        }
    }
}

/// 记录调用的执行器
///
/// 默认所有步骤返回 0，并模拟工具的文件系统效果：
/// create-venv 创建 venv 目录，package 在 dist/ 下生成可执行文件。
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    exit_codes: HashMap<BuildStep, i32>,
    version: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定某个步骤的退出码
    pub fn fail_on(mut self, step: BuildStep, code: i32) -> Self {
        self.exit_codes.insert(step, code);
        self
    }

    /// 指定 probe 返回的版本号
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// 已执行的步骤
    pub fn steps(&self) -> Vec<BuildStep> {
        self.calls.lock().unwrap().iter().map(|c| c.step).collect()
    }

    /// 已执行的调用
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    fn simulate(invocation: &Invocation) {
        match invocation.step {
            BuildStep::CreateVenv => {
                if let Some(dir) = invocation.args.last() {
                    std::fs::create_dir_all(dir).unwrap();
                }
            }
            BuildStep::Package => {
                let name = invocation
                    .args
                    .iter()
                    .position(|a| a.as_os_str() == "--name")
                    .and_then(|i| invocation.args.get(i + 1))
                    .unwrap();
                let dist: PathBuf = invocation.cwd.join("dist");
                std::fs::create_dir_all(&dist).unwrap();
                let mut file = name.clone();
                file.push(std::env::consts::EXE_SUFFIX);
                std::fs::write(dist.join(file), "frozen").unwrap();
            }
            _ => {}
        }
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.calls.lock().unwrap().push(invocation.clone());
        let code = self.exit_codes.get(&invocation.step).copied().unwrap_or(0);
        if code == 0 {
            Self::simulate(invocation);
        }
        Ok(code)
    }

    fn probe(&self, _program: &str, _args: &[String]) -> Result<Option<String>> {
        Ok(self.version.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("FREEZE_TEST_CLEANUP_VAR", "cleanup_test");
            assert_eq!(env::var("FREEZE_TEST_CLEANUP_VAR").unwrap(), "cleanup_test");
        }
        assert!(env::var("FREEZE_TEST_CLEANUP_VAR").is_err());
    }

    #[test]
    fn test_recording_runner_scripted_failure() {
        let runner = RecordingRunner::new().fail_on(BuildStep::InstallRequirements, 1);
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new(BuildStep::InstallRequirements, "python", dir.path());
        assert_eq!(runner.run(&inv).unwrap(), 1);
        assert_eq!(runner.steps(), vec![BuildStep::InstallRequirements]);
    }

    #[test]
    fn test_recording_runner_simulates_package() {
        let runner = RecordingRunner::new();
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new(BuildStep::Package, "python", dir.path())
            .args(["-m", "PyInstaller", "--name", "tool"])
            .arg("tool.py");
        assert_eq!(runner.run(&inv).unwrap(), 0);
        let artifact = Path::new("dist").join(format!("tool{}", std::env::consts::EXE_SUFFIX));
        assert!(dir.path().join(artifact).exists());
    }
}
