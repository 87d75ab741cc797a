use crate::error::{SorterError, SorterResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 工作目录下的可选配置文件名
pub const CONFIG_FILE_NAME: &str = "quiz_sorter.toml";

/// 输出目录默认名称
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "Quizzes";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 存放学期文件夹的根目录
    pub workspace_dir: PathBuf,
    /// 合并结果的输出根目录
    pub output_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    output_dir: Option<PathBuf>,
    verbose_logging: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        let workspace_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::for_workspace(workspace_dir)
    }
}

impl Config {
    /// 以指定目录为工作目录，输出目录为其下的 `Quizzes`
    pub fn for_workspace(workspace_dir: impl Into<PathBuf>) -> Self {
        let workspace_dir = workspace_dir.into();
        Self {
            output_dir: workspace_dir.join(DEFAULT_OUTPUT_DIR_NAME),
            workspace_dir,
            verbose_logging: false,
        }
    }

    /// 从环境变量加载配置
    ///
    /// 优先级：环境变量 > 工作目录下的 `quiz_sorter.toml` > 默认值
    pub fn from_env() -> SorterResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SorterResult<Self> {
        let workspace_dir = match lookup("QUIZ_WORKSPACE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => Self::default().workspace_dir,
        };

        let mut config = Self::for_workspace(&workspace_dir);
        config.apply_file(&workspace_dir.join(CONFIG_FILE_NAME))?;

        if let Some(dir) = lookup("QUIZ_OUTPUT_DIR") {
            config.output_dir = config.resolve(PathBuf::from(dir));
        }
        if let Some(verbose) = lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()) {
            config.verbose_logging = verbose;
        }

        Ok(config)
    }

    /// 相对路径以工作目录为基准
    fn resolve(&self, dir: PathBuf) -> PathBuf {
        if dir.is_relative() {
            self.workspace_dir.join(dir)
        } else {
            dir
        }
    }

    /// 合并配置文件中的字段（文件不存在时什么也不做）
    fn apply_file(&mut self, path: &Path) -> SorterResult<()> {
        if !path.is_file() {
            return Ok(());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SorterError::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| SorterError::ConfigParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = file.output_dir {
            self.output_dir = self.resolve(dir);
        }
        if let Some(verbose) = file.verbose_logging {
            self.verbose_logging = verbose;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_defaults_under_workspace() {
        let config = Config::for_workspace("/data/ece109");
        assert_eq!(config.output_dir, PathBuf::from("/data/ece109/Quizzes"));
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_apply_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "output_dir = \"merged\"\nverbose_logging = true\n").unwrap();

        let mut config = Config::for_workspace(dir.path());
        config.apply_file(&path).unwrap();

        assert_eq!(config.output_dir, dir.path().join("merged"));
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_apply_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::for_workspace(dir.path());
        config.apply_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.output_dir, dir.path().join(DEFAULT_OUTPUT_DIR_NAME));
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, String)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_from_lookup_defaults_to_quizzes_under_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let vars = [("QUIZ_WORKSPACE_DIR", dir.path().display().to_string())];

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.workspace_dir, dir.path());
        assert_eq!(config.output_dir, dir.path().join(DEFAULT_OUTPUT_DIR_NAME));
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_lookup_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "output_dir = \"from_file\"\nverbose_logging = true\n",
        )
        .unwrap();
        let vars = [("QUIZ_WORKSPACE_DIR", dir.path().display().to_string())];

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.output_dir, dir.path().join("from_file"));
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_from_lookup_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "output_dir = \"from_file\"\nverbose_logging = true\n",
        )
        .unwrap();
        let vars = [
            ("QUIZ_WORKSPACE_DIR", dir.path().display().to_string()),
            ("QUIZ_OUTPUT_DIR", "merged".to_string()),
            ("VERBOSE_LOGGING", "false".to_string()),
        ];

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        // 相对的环境变量路径同样以工作目录为基准
        assert_eq!(config.output_dir, dir.path().join("merged"));
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_lookup_absolute_output_dir_kept() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let vars = [
            ("QUIZ_WORKSPACE_DIR", dir.path().display().to_string()),
            ("QUIZ_OUTPUT_DIR", out.path().display().to_string()),
        ];

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.output_dir, out.path());
    }

    #[test]
    fn test_apply_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "output_dir = [").unwrap();

        let mut config = Config::for_workspace(dir.path());
        let err = config.apply_file(&path).unwrap_err();
        assert!(matches!(err, SorterError::ConfigParseFailed { .. }));
    }
}
