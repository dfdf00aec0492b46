//! 应用程序容器
//!
//! 负责依赖注入：解析项目目录、加载配置、组装服务

use crate::application::services::BuildService;
use crate::domain::error::Result;
use crate::domain::runner::ProcessRunner;
use crate::infrastructure::config::{BuildOverrides, ConfigLoader};
use crate::infrastructure::paths;
use crate::infrastructure::process::SystemRunner;
use std::path::PathBuf;
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    pub project_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub overrides: BuildOverrides,
}

/// 应用程序容器
pub struct Application {
    /// 构建服务
    pub build_service: Arc<BuildService>,
}

impl Application {
    /// 使用系统进程执行器创建应用程序实例
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_runner(config, Arc::new(SystemRunner::new()))
    }

    /// 使用指定执行器创建应用程序实例
    pub fn with_runner(config: AppConfig, runner: Arc<dyn ProcessRunner>) -> Result<Self> {
        let base_dir = paths::resolve_base_dir(config.project_dir.as_deref())?;
        // --config 跟随调用方的当前目录，不受 -C 影响
        let config_file = config
            .config_file
            .as_deref()
            .map(paths::from_cwd)
            .transpose()?;
        let build_config = ConfigLoader::new(&base_dir, config_file).load(&config.overrides)?;

        let build_service = Arc::new(BuildService::new(build_config, runner));
        Ok(Self { build_service })
    }
}
