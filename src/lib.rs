//! freezecli - Python 脚本单文件打包工具
//!
//! 分层结构：domain（实体与端口）→ application（构建编排）→
//! infrastructure（进程、配置、日志）→ commands / cli（命令行入口）

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use domain::{BuildConfig, BuildReport, BuildStep, DomainError, Result};
