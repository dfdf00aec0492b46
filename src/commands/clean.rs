//! clean 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::BuildService;
use crate::domain::error::Result;
use std::sync::Arc;

/// clean 命令
pub struct CleanCommand {
    build_service: Arc<BuildService>,
}

impl CleanCommand {
    pub fn new(build_service: Arc<BuildService>) -> Self {
        Self { build_service }
    }
}

impl CommandHandler for CleanCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let removed = self.build_service.clean()?;

        // 安静模式下成功静默
        if ctx.verbose {
            for dir in &removed {
                println!("✓ 已删除 {}", dir.display());
            }
            if removed.is_empty() {
                println!("无需清理");
            }
        }

        Ok(())
    }
}
