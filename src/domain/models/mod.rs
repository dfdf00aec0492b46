//! 领域实体

pub mod activation;
pub mod config;
pub mod report;
pub mod step;

pub use activation::Activation;
pub use config::{BuildConfig, Launcher, Packager};
pub use report::{BuildReport, OutputFormat};
pub use step::{BuildStep, Invocation};
