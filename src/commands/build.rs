//! build 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::BuildService;
use crate::domain::error::Result;
use crate::domain::models::{BuildReport, OutputFormat};
use std::sync::Arc;

/// build 命令
pub struct BuildCommand {
    build_service: Arc<BuildService>,
    clean: bool,
    dry_run: bool,
    format: OutputFormat,
}

impl BuildCommand {
    pub fn new(
        build_service: Arc<BuildService>,
        clean: bool,
        dry_run: bool,
        format: OutputFormat,
    ) -> Self {
        Self {
            build_service,
            clean,
            dry_run,
            format,
        }
    }

    /// 打印将要执行的操作，不触碰文件系统
    fn print_plan(&self) -> Result<()> {
        let service = &self.build_service;
        if self.clean {
            for dir in service.config().output_dirs() {
                println!("rm -rf {}", dir.display());
            }
        }
        for invocation in service.plan(service.venv_exists())? {
            println!("{}", invocation.command_line());
        }
        Ok(())
    }

    fn print_report(&self, report: &BuildReport, verbose: bool) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Text => {
                if verbose {
                    for dir in &report.cleaned {
                        println!("  已删除: {}", dir.display());
                    }
                    for step in &report.steps {
                        println!("  ✓ {}", step.describe());
                    }
                }
                println!("✓ 构建完成: {}", report.artifact.display());
            }
        }
        Ok(())
    }
}

impl CommandHandler for BuildCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if self.dry_run {
            return self.print_plan();
        }

        let report = self.build_service.build(self.clean)?;
        self.print_report(&report, ctx.verbose)
    }
}
