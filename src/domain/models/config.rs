//! 构建配置实体

use crate::domain::error::{DomainError, Result};
use std::path::{Path, PathBuf};

/// 默认入口脚本
pub const DEFAULT_ENTRY: &str = "yt_spotify_auto_switch.py";
/// 默认依赖清单
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
/// 默认虚拟环境目录
pub const DEFAULT_VENV: &str = ".venv";
/// 打包工具输出目录
pub const DIST_DIR: &str = "dist";
/// 打包工具中间目录
pub const WORK_DIR: &str = "build";

/// Python 启动器（仅用于创建虚拟环境）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for Launcher {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                program: "py".to_string(),
                args: vec!["-3".to_string()],
            }
        } else {
            Self {
                program: "python3".to_string(),
                args: Vec::new(),
            }
        }
    }
}

impl Launcher {
    /// 解析 "py -3" 形式的命令
    ///
    /// 整串指向已存在的文件时视为程序本身（允许路径中含空格）；
    /// 否则按空白拆分，单/双引号内的空白不拆分。反斜杠不做转义，
    /// 以便直接写 Windows 路径。
    pub fn parse(command: &str) -> Result<Self> {
        let command = command.trim();
        if command.is_empty() {
            return Err(DomainError::InvalidArgument("Python 启动器不能为空".to_string()));
        }
        if Path::new(command).is_file() {
            return Ok(Self {
                program: command.to_string(),
                args: Vec::new(),
            });
        }

        let mut parts = split_words(command)?.into_iter();
        let program = parts
            .next()
            .ok_or_else(|| DomainError::InvalidArgument("Python 启动器不能为空".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

fn split_words(command: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in command.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(DomainError::InvalidArgument(format!(
            "Python 启动器引号未闭合: {}",
            command
        )));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// 打包工具
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packager {
    /// pip 包名
    pub package: String,
    /// `python -m` 模块名
    pub module: String,
}

impl Default for Packager {
    fn default() -> Self {
        Self {
            package: "pyinstaller".to_string(),
            module: "PyInstaller".to_string(),
        }
    }
}

/// 解析后的构建配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub base_dir: PathBuf,
    pub entry: PathBuf,
    pub name: String,
    pub requirements: PathBuf,
    pub venv: PathBuf,
    pub launcher: Launcher,
    pub packager: Packager,
}

impl BuildConfig {
    /// 以默认值创建配置
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let entry = PathBuf::from(DEFAULT_ENTRY);
        Self {
            base_dir: base_dir.into(),
            name: default_name(&entry),
            entry,
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            venv: PathBuf::from(DEFAULT_VENV),
            launcher: Launcher::default(),
            packager: Packager::default(),
        }
    }

    /// 相对路径以 base_dir 为基准，绝对路径保持不变
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    #[must_use]
    pub fn entry_path(&self) -> PathBuf {
        self.resolve(&self.entry)
    }

    #[must_use]
    pub fn requirements_path(&self) -> PathBuf {
        self.resolve(&self.requirements)
    }

    #[must_use]
    pub fn venv_path(&self) -> PathBuf {
        self.resolve(&self.venv)
    }

    /// clean 时删除的目录
    #[must_use]
    pub fn output_dirs(&self) -> Vec<PathBuf> {
        vec![self.resolve(Path::new(DIST_DIR)), self.resolve(Path::new(WORK_DIR))]
    }

    /// 最终可执行文件路径
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.resolve(Path::new(DIST_DIR))
            .join(format!("{}{}", self.name, std::env::consts::EXE_SUFFIX))
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "可执行文件名不能为空".to_string(),
            ));
        }
        if self.name.contains(['/', '\\']) {
            return Err(DomainError::InvalidArgument(format!(
                "可执行文件名不能包含路径分隔符: {}",
                self.name
            )));
        }
        if self.entry.as_os_str().is_empty() {
            return Err(DomainError::InvalidArgument("入口脚本不能为空".to_string()));
        }
        if self.launcher.program.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Python 启动器不能为空".to_string(),
            ));
        }
        Ok(())
    }
}

/// 以入口脚本文件名（去扩展名）作为可执行文件名
#[must_use]
pub fn default_name(entry: &Path) -> String {
    entry
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::new("/work");
        assert_eq!(config.name, "yt_spotify_auto_switch");
        assert_eq!(config.entry_path(), PathBuf::from("/work/yt_spotify_auto_switch.py"));
        assert_eq!(config.venv_path(), PathBuf::from("/work/.venv"));
        assert_eq!(
            config.output_dirs(),
            vec![PathBuf::from("/work/dist"), PathBuf::from("/work/build")]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_artifact_path_named_after_script() {
        let config = BuildConfig::new("/work");
        let expected = format!("yt_spotify_auto_switch{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(config.artifact_path(), PathBuf::from("/work/dist").join(expected));
    }

    #[test]
    fn test_launcher_parse() {
        let launcher = Launcher::parse("py -3").unwrap();
        assert_eq!(launcher.program, "py");
        assert_eq!(launcher.args, vec!["-3"]);
        assert!(Launcher::parse("   ").is_err());
    }

    #[test]
    fn test_launcher_parse_quoted_path_with_space() {
        let launcher = Launcher::parse("\"/opt/my python/bin/python3\" -X utf8").unwrap();
        assert_eq!(launcher.program, "/opt/my python/bin/python3");
        assert_eq!(launcher.args, vec!["-X", "utf8"]);

        let launcher = Launcher::parse(r#"'C:\Program Files\Python312\python.exe'"#).unwrap();
        assert_eq!(launcher.program, r"C:\Program Files\Python312\python.exe");
        assert!(launcher.args.is_empty());
    }

    #[test]
    fn test_launcher_parse_existing_file_taken_whole() {
        let dir = tempfile::tempdir().unwrap();
        let python = dir.path().join("my python").join("python3");
        std::fs::create_dir_all(python.parent().unwrap()).unwrap();
        std::fs::write(&python, "").unwrap();

        let command = python.to_str().unwrap();
        let launcher = Launcher::parse(command).unwrap();
        assert_eq!(launcher.program, command);
        assert!(launcher.args.is_empty());
    }

    #[test]
    fn test_launcher_parse_unclosed_quote() {
        let result = Launcher::parse("\"/opt/python3 -X");
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut config = BuildConfig::new("/work");
        config.name = String::new();
        assert!(config.validate().is_err());

        config.name = "bin/app".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name(Path::new("src/tool.py")), "tool");
        assert_eq!(default_name(Path::new("")), "");
    }
}
