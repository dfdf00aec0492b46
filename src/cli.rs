//! CLI 参数定义

use crate::domain::models::OutputFormat;
use crate::infrastructure::config::BuildOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// freeze - 把 Python 脚本打包成单文件控制台程序
#[derive(Parser, Debug)]
#[command(
    name = "freeze",
    version,
    about = "把 Python 脚本打包成单文件控制台程序",
    long_about = "创建/复用虚拟环境，安装依赖和 PyInstaller，然后生成单文件控制台可执行文件。\n不带子命令时等同于 `freeze build`。",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub build: BuildArgs,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 项目目录（默认当前目录）
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// 配置文件，相对路径以当前目录为准（默认 <项目目录>/freeze.toml）
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 构建可执行文件
    Build(BuildArgs),

    /// 删除 dist/ 与 build/
    Clean,

    /// 检查构建环境
    Doctor(ProjectOptions),
}

/// build 参数
#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// 构建前删除 dist/ 与 build/
    #[arg(long)]
    pub clean: bool,

    /// 只打印将要执行的命令
    #[arg(long)]
    pub dry_run: bool,

    /// 输出格式 (text/json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    #[command(flatten)]
    pub options: ProjectOptions,
}

impl BuildArgs {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

/// 项目相关覆盖项
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectOptions {
    /// 入口脚本
    #[arg(long, value_name = "FILE")]
    pub entry: Option<PathBuf>,

    /// 可执行文件名（默认取入口脚本文件名）
    #[arg(long)]
    pub name: Option<String>,

    /// 依赖清单
    #[arg(long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,

    /// 虚拟环境目录
    #[arg(long, value_name = "DIR")]
    pub venv: Option<PathBuf>,

    /// Python 启动器，如 "py -3"
    #[arg(long, value_name = "CMD")]
    pub python: Option<String>,
}

impl From<&ProjectOptions> for BuildOverrides {
    fn from(options: &ProjectOptions) -> Self {
        Self {
            entry: options.entry.clone(),
            name: options.name.clone(),
            requirements: options.requirements.clone(),
            venv: options.venv.clone(),
            python: options.python.clone(),
        }
    }
}
