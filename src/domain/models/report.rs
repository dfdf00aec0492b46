//! 构建结果

use crate::domain::models::BuildStep;
use serde::Serialize;
use std::path::PathBuf;

/// 一次成功构建的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    /// 生成的可执行文件
    pub artifact: PathBuf,
    /// 构建前被删除的目录
    pub cleaned: Vec<PathBuf>,
    /// 本次是否新建了虚拟环境
    pub venv_created: bool,
    /// 实际执行的步骤
    pub steps: Vec<BuildStep>,
}

/// 输出格式类型
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}
