use crate::draw::fetch::DEFAULT_DRAW_URL;
use crate::error::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 抽せんページURL
    pub draw_url: String,
    /// HTTPタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draw_url: DEFAULT_DRAW_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CheckerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("powerball-checker")
            .join("config.json"))
    }

    /// 抽せんページURLを解決する
    ///
    /// 優先順: 環境変数 POWERBALL_DRAW_URL → 設定ファイル
    pub fn draw_url(&self) -> String {
        if let Ok(url) = std::env::var("POWERBALL_DRAW_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.draw_url.clone()
    }

    pub fn set_draw_url(&mut self, url: String) -> Result<()> {
        self.draw_url = url;
        self.save()
    }
}
