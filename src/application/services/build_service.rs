//! 构建编排服务
//!
//! 严格顺序执行：清理(可选) → 创建 venv(缺失时) → 激活 → 三次安装 → 打包。
//! 任一步骤失败立即中止，不重试。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Activation, BuildConfig, BuildReport, BuildStep, Invocation};
use crate::domain::runner::ProcessRunner;
use crate::infrastructure::paths;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 构建服务
pub struct BuildService {
    config: BuildConfig,
    runner: Arc<dyn ProcessRunner>,
}

impl BuildService {
    pub fn new(config: BuildConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// 执行完整构建
    pub fn build(&self, clean: bool) -> Result<BuildReport> {
        info!(base_dir = %self.config.base_dir.display(), clean, "starting build");

        let cleaned = if clean { self.clean()? } else { Vec::new() };

        let venv_exists = self.venv_exists();
        if venv_exists {
            info!(venv = %self.config.venv_path().display(), "reusing virtual environment");
        }

        let mut steps = Vec::new();
        for invocation in self.plan(venv_exists)? {
            if invocation.step == BuildStep::Package {
                self.check_entry()?;
            }
            self.run_step(&invocation)?;
            steps.push(invocation.step);
        }

        let artifact = self.config.artifact_path();
        info!(artifact = %artifact.display(), "build finished");

        Ok(BuildReport {
            artifact,
            cleaned,
            venv_created: !venv_exists,
            steps,
        })
    }

    /// 删除输出目录，返回实际删除的目录
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for dir in self.config.output_dirs() {
            if paths::remove_if_exists(&dir)? {
                info!(dir = %dir.display(), "removed output directory");
                removed.push(dir);
            } else {
                debug!(dir = %dir.display(), "output directory absent");
            }
        }
        Ok(removed)
    }

    /// 生成构建要执行的调用列表（不执行）
    ///
    /// 路径参数以 OsStr 原样传递，不做 UTF-8 转换
    pub fn plan(&self, venv_exists: bool) -> Result<Vec<Invocation>> {
        let config = &self.config;
        let base = config.base_dir.as_path();
        let venv = config.venv_path();
        let mut plan = Vec::with_capacity(5);

        if !venv_exists {
            plan.push(
                Invocation::new(BuildStep::CreateVenv, &config.launcher.program, base)
                    .args(config.launcher.args.iter().cloned())
                    .args(["-m", "venv"])
                    .arg(venv.as_os_str()),
            );
        }

        let activation = Activation::new(venv);
        let python = activation.python();
        let pip = |step| -> Result<Invocation> {
            Ok(activation
                .apply(Invocation::new(step, &python, base))?
                .args(["-m", "pip", "install"]))
        };

        plan.push(pip(BuildStep::UpgradeInstaller)?.args(["--upgrade", "pip"]));
        plan.push(
            pip(BuildStep::InstallRequirements)?
                .arg("-r")
                .arg(config.requirements_path()),
        );
        plan.push(pip(BuildStep::InstallPackager)?.arg(config.packager.package.as_str()));

        plan.push(
            activation
                .apply(Invocation::new(BuildStep::Package, &python, base))?
                .args(["-m", config.packager.module.as_str()])
                .args(["--onefile", "--name", config.name.as_str(), "--console"])
                .arg(config.entry_path()),
        );

        Ok(plan)
    }

    /// 探测启动器版本；启动器不可用时返回 None
    pub fn launcher_version(&self) -> Result<Option<String>> {
        let launcher = &self.config.launcher;
        let mut args = launcher.args.clone();
        args.push("--version".to_string());
        self.runner.probe(&launcher.program, &args)
    }

    pub fn venv_exists(&self) -> bool {
        paths::dir_exists(&self.config.venv_path())
    }

    fn check_entry(&self) -> Result<()> {
        let entry = self.config.entry_path();
        if !paths::file_exists(&entry) {
            error!(entry = %entry.display(), "entry script missing");
            return Err(DomainError::EntryScriptMissing(entry));
        }
        Ok(())
    }

    fn run_step(&self, invocation: &Invocation) -> Result<()> {
        info!(step = %invocation.step, "{}", invocation.step.describe());
        debug!("{}", invocation.command_line());

        let code = self.runner.run(invocation)?;
        if code != 0 {
            error!(step = %invocation.step, code, "step failed");
            if invocation.step.is_install() {
                warn!("pip failed; check network access and the requirements file");
            }
            return Err(DomainError::StepFailed {
                step: invocation.step,
                code,
            });
        }
        Ok(())
    }
}
