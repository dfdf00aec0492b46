//! 配置加载
//!
//! 优先级（低 → 高）：内置默认值 < freeze.toml < FREEZE_PYTHON < 命令行参数

use crate::domain::error::{DomainError, Result};
use crate::domain::models::config::default_name;
use crate::domain::models::{BuildConfig, Launcher};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 项目目录下的默认配置文件
pub const CONFIG_FILE: &str = "freeze.toml";

/// 覆盖 Python 启动器的环境变量
pub const PYTHON_ENV: &str = "FREEZE_PYTHON";

/// freeze.toml 的结构
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub python: PythonSection,
    #[serde(default)]
    pub packager: PackagerSection,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    pub entry: Option<PathBuf>,
    pub name: Option<String>,
    pub requirements: Option<PathBuf>,
    pub venv: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PythonSection {
    /// 如 "py -3" 或 "python3"
    pub launcher: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagerSection {
    pub package: Option<String>,
    pub module: Option<String>,
}

/// 命令行覆盖项
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildOverrides {
    pub entry: Option<PathBuf>,
    pub name: Option<String>,
    pub requirements: Option<PathBuf>,
    pub venv: Option<PathBuf>,
    pub python: Option<String>,
}

/// 配置加载器
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            config_file,
        }
    }

    /// 读取配置文件
    ///
    /// 默认文件不存在时返回空配置；显式指定的文件必须存在。
    /// 显式文件应由调用方解析为绝对路径，相对路径以 base_dir 为基准。
    pub fn read_file(&self) -> Result<FileConfig> {
        let (path, required) = match &self.config_file {
            Some(p) => (self.base_dir.join(p), true),
            None => (self.base_dir.join(CONFIG_FILE), false),
        };

        if !path.is_file() {
            if required {
                return Err(DomainError::Config(format!(
                    "配置文件不存在: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(FileConfig::default());
        }

        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))
    }

    /// 解析 TOML 内容
    pub fn parse(content: &str) -> Result<FileConfig> {
        Ok(toml::from_str(content)?)
    }

    /// 合并各层配置
    pub fn load(&self, overrides: &BuildOverrides) -> Result<BuildConfig> {
        let file = self.read_file()?;
        let env_python = std::env::var(PYTHON_ENV).ok().filter(|s| !s.trim().is_empty());
        Self::merge(&self.base_dir, file, env_python, overrides)
    }

    /// 按优先级合并，不读取任何外部状态
    pub fn merge(
        base_dir: &Path,
        file: FileConfig,
        env_python: Option<String>,
        overrides: &BuildOverrides,
    ) -> Result<BuildConfig> {
        let mut config = BuildConfig::new(base_dir);

        if let Some(entry) = overrides.entry.clone().or(file.build.entry) {
            config.entry = entry;
        }

        // 未显式命名时跟随入口脚本
        config.name = overrides
            .name
            .clone()
            .or(file.build.name)
            .unwrap_or_else(|| default_name(&config.entry));

        if let Some(requirements) = overrides.requirements.clone().or(file.build.requirements) {
            config.requirements = requirements;
        }
        if let Some(venv) = overrides.venv.clone().or(file.build.venv) {
            config.venv = venv;
        }

        if let Some(launcher) = overrides
            .python
            .clone()
            .or(env_python)
            .or(file.python.launcher)
        {
            config.launcher = Launcher::parse(&launcher)?;
        }

        if let Some(package) = file.packager.package {
            config.packager.package = package;
        }
        if let Some(module) = file.packager.module {
            config.packager.module = module;
        }

        config.validate()?;
        Ok(config)
    }
}
