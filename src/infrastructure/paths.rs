//! 路径与文件系统工具

use crate::domain::error::{DomainError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 解析项目根目录
///
/// 未指定时使用当前目录；结果为绝对路径。
pub fn resolve_base_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = match dir {
        Some(d) => cwd.join(d),
        None => cwd,
    };

    if !dir.is_dir() {
        return Err(DomainError::InvalidArgument(format!(
            "项目目录不存在: {}",
            dir.display()
        )));
    }

    Ok(dir.canonicalize()?)
}

/// 相对路径以调用方的当前目录为基准（而不是项目目录）
pub fn from_cwd(path: &Path) -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(path))
}

/// 路径存在则删除：目录递归删除，普通文件或符号链接直接删除；不存在不算错误
///
/// 返回是否实际删除了内容
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        std::fs::remove_dir_all(path)?;
        debug!(path = %path.display(), "removed directory");
    } else {
        std::fs::remove_file(path)?;
        debug!(path = %path.display(), "removed file");
    }
    Ok(true)
}

/// 判断目录是否存在
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// 判断文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}
