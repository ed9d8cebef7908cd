// ==========================================
// 成衣产线跟踪系统 - 配置管理器
// ==========================================
// 职责: 配置加载与多级覆写
// 顺序: 内置默认值 → JSON 配置文件 → 环境变量
// 说明: 配置文件不存在时视为全部默认，不报错
// ==========================================

use crate::config::planner_config::{ConfigError, PlannerConfig};
use crate::config::planner_config_trait::PlannerConfigReader;
use crate::domain::slot::ShiftLayout;
use crate::engine::alert::AlertThresholds;
use crate::engine::numeric::safe_num;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置相关键名
pub mod config_keys {
    /// 配置文件路径
    pub const ENV_CONFIG_PATH: &str = "LINE_TRACKER_CONFIG";
    /// 界面语言覆写
    pub const ENV_LOCALE: &str = "LINE_TRACKER_LOCALE";
    /// 默认效率覆写
    pub const ENV_DEFAULT_EFFICIENCY: &str = "LINE_TRACKER_DEFAULT_EFFICIENCY";

    /// 用户配置目录下的应用子目录
    pub const APP_DIR: &str = "garment-line-tracker";
    pub const FILE_NAME: &str = "config.json";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PlannerConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用给定配置（校验后）
    pub fn with_config(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 按完整顺序加载: 默认值 → 文件 → 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(config_keys::ENV_CONFIG_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_config_path);

        let mut config = match &path {
            Some(p) => Self::read_file(p)?,
            None => None,
        };
        let source = config.as_ref().and(path);

        let mut resolved = config.take().unwrap_or_default();
        Self::apply_overrides(&mut resolved, |key| std::env::var(key).ok())?;
        resolved.validate()?;

        info!(
            source = ?source,
            locale = %resolved.locale,
            default_efficiency = resolved.default_efficiency,
            "配置加载完成"
        );

        Ok(Self {
            config: resolved,
            source,
        })
    }

    /// 仅从指定文件加载（不读环境变量）；文件不存在时取默认值
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let loaded = Self::read_file(path)?;
        let source = loaded.as_ref().map(|_| path.to_path_buf());
        let config = loaded.unwrap_or_default();
        config.validate()?;

        Ok(Self { config, source })
    }

    /// 用户配置目录下的默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config_keys::APP_DIR).join(config_keys::FILE_NAME))
    }

    fn read_file(path: &Path) -> Result<Option<PlannerConfig>, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在，使用默认值");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// 应用环境变量覆写
    ///
    /// `lookup` 按键名取值，测试中可注入固定映射
    pub fn apply_overrides<F>(config: &mut PlannerConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(config_keys::ENV_LOCALE) {
            let locale = locale.trim();
            if !locale.is_empty() {
                config.locale = locale.to_string();
            }
        }

        if let Some(raw) = lookup(config_keys::ENV_DEFAULT_EFFICIENCY) {
            let value = safe_num(raw.as_str(), f64::NAN);
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidOverride {
                    key: config_keys::ENV_DEFAULT_EFFICIENCY.to_string(),
                    value: raw,
                });
            }
            config.default_efficiency = value;
        }

        Ok(())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 实际读取到的配置文件（None = 未使用文件）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 配置快照（JSON）
    pub fn snapshot_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::Other(e.into()))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: PlannerConfig::default(),
            source: None,
        }
    }
}

#[async_trait]
impl PlannerConfigReader for ConfigManager {
    async fn get_shift_layout(&self) -> Result<ShiftLayout, ConfigError> {
        Ok(self.config.shift)
    }

    async fn get_default_efficiency(&self) -> Result<f64, ConfigError> {
        Ok(self.config.default_efficiency)
    }

    async fn get_alert_thresholds(&self) -> Result<AlertThresholds, ConfigError> {
        Ok(self.config.alert_thresholds)
    }

    async fn get_balanced_tolerance(&self) -> Result<f64, ConfigError> {
        Ok(self.config.balanced_tolerance)
    }

    async fn get_locale(&self) -> Result<String, ConfigError> {
        Ok(self.config.locale.clone())
    }
}
