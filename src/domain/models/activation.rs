//! 虚拟环境激活
//!
//! 不修改当前进程的环境，只为后续子进程注入激活后的变量：
//! `VIRTUAL_ENV`、前置了 venv 可执行目录的 `PATH`，并移除 `PYTHONHOME`。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::Invocation;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 已激活的虚拟环境
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    venv_dir: PathBuf,
}

impl Activation {
    #[must_use]
    pub fn new(venv_dir: impl Into<PathBuf>) -> Self {
        Self {
            venv_dir: venv_dir.into(),
        }
    }

    #[must_use]
    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    /// Windows 为 Scripts，其余平台为 bin
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir.join("Scripts")
        } else {
            self.venv_dir.join("bin")
        }
    }

    /// venv 内的解释器
    #[must_use]
    pub fn python(&self) -> PathBuf {
        self.bin_dir()
            .join(format!("python{}", std::env::consts::EXE_SUFFIX))
    }

    /// 在现有 PATH 前插入 venv 可执行目录
    ///
    /// venv 路径本身含 PATH 分隔符时无法拼接，返回错误
    pub fn path_with(&self, current: Option<OsString>) -> Result<OsString> {
        let mut dirs = vec![self.bin_dir()];
        if let Some(current) = current {
            dirs.extend(std::env::split_paths(&current));
        }
        std::env::join_paths(&dirs).map_err(|e| {
            DomainError::InvalidArgument(format!(
                "虚拟环境路径无法加入 PATH: {} ({})",
                self.bin_dir().display(),
                e
            ))
        })
    }

    /// 为调用注入激活变量
    pub fn apply(&self, invocation: Invocation) -> Result<Invocation> {
        let path = self.path_with(std::env::var_os("PATH"))?;
        Ok(invocation
            .env("VIRTUAL_ENV", self.venv_dir.as_os_str())
            .env("PATH", path)
            .env_remove("PYTHONHOME"))
    }
}
