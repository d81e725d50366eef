//! 配置服务
//!
//! 配置文件位于 `<config_dir>/mlops-guide/config.json`，所有字段都有默认值。
//! 程序只读取配置，从不写回。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const APP_DIR: &str = "mlops-guide";
const CONFIG_FILE: &str = "config.json";

/// 默认的播放器命令模板，`{offset}` 和 `{path}` 在启动时替换
pub const DEFAULT_PLAYER_COMMAND: &str =
    "ffplay -nodisp -autoexit -loglevel quiet -ss {offset} {path}";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    /// BCP 47 语言代码，只影响界面外壳
    pub language: String,
    /// 图片和音频所在目录
    pub assets_dir: PathBuf,
    pub player_command: String,
    /// 内容覆盖文件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_file: Option<PathBuf>,
    pub log_level: String,
    /// 是否开启鼠标捕获
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            assets_dir: PathBuf::from("public"),
            player_command: DEFAULT_PLAYER_COMMAND.to_string(),
            content_file: None,
            log_level: "info".to_string(),
            mouse: true,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 加载配置，失败时退回默认值并带回错误（启动后在错误弹窗中展示）
pub fn load_or_default(service: &dyn ConfigService) -> (AppConfig, Option<anyhow::Error>) {
    match service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置：`<config_dir>/mlops-guide/config.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        // 文件不存在不算错误
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", self.path.display()))?;

        Ok(config)
    }
}
