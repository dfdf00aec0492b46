//! doctor 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::BuildService;
use crate::domain::error::{DomainError, Result};
use crate::infrastructure::paths;
use std::sync::Arc;

/// doctor 命令
pub struct DoctorCommand {
    build_service: Arc<BuildService>,
}

impl DoctorCommand {
    pub fn new(build_service: Arc<BuildService>) -> Self {
        Self { build_service }
    }
}

impl CommandHandler for DoctorCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let config = self.build_service.config();

        println!("🔍 构建环境诊断\n");
        println!("项目目录: {}", config.base_dir.display());
        println!("──────────────────────────────────────────────\n");

        let mut warnings = 0;

        // 1. Python 启动器
        println!("🐍 1. Python 启动器");
        let launcher_line = std::iter::once(config.launcher.program.as_str())
            .chain(config.launcher.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        let launcher_ok = match self.build_service.launcher_version()? {
            Some(version) => {
                println!("   ✓ {}: {}", launcher_line, version);
                true
            }
            None => {
                println!("   ❌ 无法运行: {}", launcher_line);
                false
            }
        };
        println!();

        // 2. 虚拟环境
        println!("📦 2. 虚拟环境");
        if self.build_service.venv_exists() {
            println!("   ✓ 已存在: {}", config.venv_path().display());
        } else {
            println!("   ○ 不存在，构建时创建: {}", config.venv_path().display());
        }
        println!();

        // 3. 项目文件
        println!("📄 3. 项目文件");
        let entry = config.entry_path();
        let entry_ok = paths::file_exists(&entry);
        if entry_ok {
            println!("   ✓ 入口脚本: {}", entry.display());
        } else {
            println!("   ❌ 入口脚本不存在: {}", entry.display());
        }
        let requirements = config.requirements_path();
        if paths::file_exists(&requirements) {
            println!("   ✓ 依赖清单: {}", requirements.display());
        } else {
            println!("   ⚠️  依赖清单不存在: {}", requirements.display());
            warnings += 1;
        }
        println!();

        // 4. 输出
        println!("🎯 4. 输出");
        println!("   可执行文件: {}", config.artifact_path().display());
        if ctx.verbose {
            for dir in config.output_dirs() {
                let state = if paths::dir_exists(&dir) { "存在" } else { "不存在" };
                println!("   {}: {}", dir.display(), state);
            }
        }
        println!();

        println!("──────────────────────────────────────────────");
        if launcher_ok && entry_ok && warnings == 0 {
            println!("✅ 所有检查通过");
        } else if warnings > 0 {
            println!("⚠️  发现 {} 个警告", warnings);
        }

        if !launcher_ok {
            return Err(DomainError::InterpreterNotFound(launcher_line));
        }
        if !entry_ok {
            return Err(DomainError::EntryScriptMissing(entry));
        }
        Ok(())
    }
}
