pub mod build_service;

pub use build_service::BuildService;
