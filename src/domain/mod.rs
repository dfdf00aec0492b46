//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体（构建配置、步骤、调用）
//! - runner: 进程执行接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod runner;

pub use error::{DomainError, Result};
pub use models::{BuildConfig, BuildReport, BuildStep, Invocation, OutputFormat};
pub use runner::ProcessRunner;
