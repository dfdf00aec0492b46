//! 构建步骤与进程调用

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// 构建步骤，按执行顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStep {
    /// 创建虚拟环境
    CreateVenv,
    /// 升级 pip
    UpgradeInstaller,
    /// 安装 requirements.txt
    InstallRequirements,
    /// 安装打包工具
    InstallPackager,
    /// 打包可执行文件
    Package,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::CreateVenv => write!(f, "create-venv"),
            BuildStep::UpgradeInstaller => write!(f, "upgrade-installer"),
            BuildStep::InstallRequirements => write!(f, "install-requirements"),
            BuildStep::InstallPackager => write!(f, "install-packager"),
            BuildStep::Package => write!(f, "package"),
        }
    }
}

impl BuildStep {
    /// 是否属于依赖安装阶段
    #[must_use]
    pub fn is_install(&self) -> bool {
        matches!(
            self,
            BuildStep::UpgradeInstaller | BuildStep::InstallRequirements | BuildStep::InstallPackager
        )
    }

    /// 人类可读的步骤描述
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            BuildStep::CreateVenv => "创建虚拟环境",
            BuildStep::UpgradeInstaller => "升级 pip",
            BuildStep::InstallRequirements => "安装依赖",
            BuildStep::InstallPackager => "安装打包工具",
            BuildStep::Package => "打包可执行文件",
        }
    }
}

/// 一次子进程调用
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub step: BuildStep,
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// 注入（覆盖）的环境变量
    pub env: Vec<(String, OsString)>,
    /// 需要移除的环境变量
    pub env_remove: Vec<String>,
}

impl Invocation {
    #[must_use]
    pub fn new(step: BuildStep, program: impl Into<PathBuf>, cwd: &Path) -> Self {
        Self {
            step,
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            env: Vec::new(),
            env_remove: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn env_remove(mut self, key: impl Into<String>) -> Self {
        self.env_remove.push(key.into());
        self
    }

    /// 用于日志和 --dry-run 的命令行文本（非 UTF-8 字节以替换字符显示）
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program.to_string_lossy())];
        parts.extend(self.args.iter().map(|a| quote(&a.to_string_lossy())));
        parts.join(" ")
    }
}

fn quote(s: &str) -> String {
    if s.is_empty() || s.contains(char::is_whitespace) {
        format!("\"{}\"", s)
    } else {
        s.to_string()
    }
}
