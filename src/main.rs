//! freeze 主程序入口
//!
//! 设计原则：
//! - 入口代码简洁，逻辑委托给各模块
//! - 失败立即退出，退出码透传失败步骤的退出码
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use freezecli::app::{AppConfig, Application};
use freezecli::cli::{BuildArgs, Cli, Commands};
use freezecli::commands::{
    BuildCommand, CleanCommand, CommandContext, CommandHandler, DoctorCommand,
};
use freezecli::infrastructure::config::BuildOverrides;
use freezecli::infrastructure::logging;
use freezecli::Result;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    logging::init_tracing(verbose);

    if let Err(e) = run(cli) {
        e.report(verbose);
        std::process::exit(e.exit_code());
    }
}

/// 组装应用并运行具体命令
fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext {
        verbose: cli.verbose,
    };

    let (handler_kind, overrides) = match cli.command {
        None => {
            let overrides = BuildOverrides::from(&cli.build.options);
            (HandlerKind::Build(cli.build), overrides)
        }
        Some(Commands::Build(args)) => {
            let overrides = BuildOverrides::from(&args.options);
            (HandlerKind::Build(args), overrides)
        }
        Some(Commands::Clean) => (HandlerKind::Clean, BuildOverrides::default()),
        Some(Commands::Doctor(options)) => (HandlerKind::Doctor, BuildOverrides::from(&options)),
    };

    let app = Application::new(AppConfig {
        verbose: cli.verbose,
        project_dir: cli.project_dir,
        config_file: cli.config,
        overrides,
    })?;
    let service = app.build_service;

    let handler: Box<dyn CommandHandler> = match handler_kind {
        HandlerKind::Build(args) => Box::new(BuildCommand::new(
            service,
            args.clean,
            args.dry_run,
            args.output_format(),
        )),
        HandlerKind::Clean => Box::new(CleanCommand::new(service)),
        HandlerKind::Doctor => Box::new(DoctorCommand::new(service)),
    };

    handler.execute(&ctx)
}

/// 待执行的命令
enum HandlerKind {
    Build(BuildArgs),
    Clean,
    Doctor,
}
