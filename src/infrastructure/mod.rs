//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - process: 子进程执行器
//! - config: freeze.toml 配置加载
//! - paths: 路径与文件系统工具
//! - logging: tracing 初始化

pub mod config;
pub mod logging;
pub mod paths;
pub mod process;

pub use config::{BuildOverrides, ConfigLoader};
pub use process::SystemRunner;
