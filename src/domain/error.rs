//! 领域层错误类型

use crate::domain::models::BuildStep;
use miette::Diagnostic;
use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DomainError {
    #[error("未找到 Python 解释器: {0}")]
    #[diagnostic(
        code(freezecli::interpreter_not_found),
        help("安装 Python 3，或通过 --python / FREEZE_PYTHON 指定解释器")
    )]
    InterpreterNotFound(String),

    #[error("步骤 {step} 失败 (退出码 {code})")]
    #[diagnostic(code(freezecli::step_failed), help("错误详情见上方工具输出"))]
    StepFailed { step: BuildStep, code: i32 },

    #[error("入口脚本不存在: {}", .0.display())]
    #[diagnostic(code(freezecli::entry_missing), help("使用 --entry 指定入口脚本"))]
    EntryScriptMissing(PathBuf),

    #[error("命令未找到: {0}")]
    #[diagnostic(code(freezecli::command_not_found), help("确保命令在 PATH 中"))]
    CommandNotFound(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(freezecli::io))]
    Io(String),

    #[error("权限不足: {0}")]
    #[diagnostic(
        code(freezecli::permission_denied),
        help("检查目录权限，或关闭正在运行的旧版可执行文件")
    )]
    PermissionDenied(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(freezecli::config), help("检查 freeze.toml"))]
    Config(String),

    #[error("无效参数: {0}")]
    #[diagnostic(code(freezecli::invalid_argument))]
    InvalidArgument(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(freezecli::serialization))]
    Serialization(String),
}

impl DomainError {
    /// 进程退出码：失败步骤的退出码原样透传，其余为 1
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            DomainError::StepFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误链 + 帮助提示
    /// verbose = false: 一行关键信息
    pub fn report(&self, verbose: bool) {
        eprintln!("❌ 错误: {}", self);

        if !verbose {
            return;
        }

        let mut current = self.source();
        while let Some(next) = current {
            eprintln!("  └─ 原因: {}", next);
            current = next.source();
        }

        if let Some(code) = self.code() {
            eprintln!("  代码: {}", code);
        }
        if let Some(help) = self.help() {
            eprintln!("  提示: {}", help);
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => DomainError::PermissionDenied(err.to_string()),
            _ => DomainError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_failed_propagates_exit_code() {
        let err = DomainError::StepFailed {
            step: BuildStep::InstallRequirements,
            code: 2,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("install-requirements"));
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        assert_eq!(DomainError::Io("disk".to_string()).exit_code(), 1);
        assert_eq!(
            DomainError::EntryScriptMissing(PathBuf::from("app.py")).exit_code(),
            1
        );
    }

    #[test]
    fn test_io_permission_denied_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        assert!(matches!(
            DomainError::from(io),
            DomainError::PermissionDenied(_)
        ));
    }

    #[test]
    fn test_diagnostic_help_present() {
        let err = DomainError::InterpreterNotFound("python3".to_string());
        assert!(err.help().is_some());
    }
}
