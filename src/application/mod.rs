//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 应用服务（构建编排用例）

pub mod services;

pub use services::BuildService;
