// ==========================================
// 成衣产线跟踪系统 - 计划参数配置
// ==========================================
// 职责: 班次布局、默认效率、告警阈值、平衡容差、界面语言
// 格式: JSON，每个字段均可省略（缺省取内置默认值）
// ==========================================

use crate::domain::slot::ShiftLayout;
use crate::engine::alert::AlertThresholds;
use crate::engine::balancing::DEFAULT_BALANCED_TOLERANCE;
use crate::engine::target::DEFAULT_EFFICIENCY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 支持的界面语言
pub const SUPPORTED_LOCALES: &[&str] = &["es", "en"];

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "es";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: path={path}, {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("环境变量覆写无效: {key}={value}")]
    InvalidOverride { key: String, value: String },

    #[error("配置校验失败: {0}")]
    Invalid(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// PlannerConfig - 计划参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub shift: ShiftLayout,
    pub default_efficiency: f64,
    pub alert_thresholds: AlertThresholds,
    pub balanced_tolerance: f64,
    pub locale: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            shift: ShiftLayout::default(),
            default_efficiency: DEFAULT_EFFICIENCY,
            alert_thresholds: AlertThresholds::default(),
            balanced_tolerance: DEFAULT_BALANCED_TOLERANCE,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl PlannerConfig {
    /// 校验配置取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shift = &self.shift;
        if shift.start_hour > 23 || shift.end_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "班次整点超出 0..=23: start={}, end={}",
                shift.start_hour, shift.end_hour
            )));
        }
        if shift.start_hour >= shift.end_hour {
            return Err(ConfigError::Invalid(format!(
                "班次开始须早于结束: start={}, end={}",
                shift.start_hour, shift.end_hour
            )));
        }
        if let Some(lunch) = shift.lunch_hour {
            if lunch > 23 {
                return Err(ConfigError::Invalid(format!("午休整点超出 0..=23: {}", lunch)));
            }
        }
        if let Some(minutes) = shift.last_slot_minutes {
            if minutes > 60 {
                return Err(ConfigError::Invalid(format!("末段分钟数超出 0..=60: {}", minutes)));
            }
        }

        if !(self.default_efficiency > 0.0 && self.default_efficiency <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "默认效率须在 (0, 1]: {}",
                self.default_efficiency
            )));
        }

        let th = &self.alert_thresholds;
        let ratios = [
            ("critical_variance_ratio", th.critical_variance_ratio),
            ("variance_ratio", th.variance_ratio),
            ("high_variance_ratio", th.high_variance_ratio),
            ("efficiency_low", th.efficiency_low),
            ("efficiency_warning", th.efficiency_warning),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("告警阈值无效: {}={}", name, value)));
            }
        }
        if th.efficiency_low > th.efficiency_warning {
            return Err(ConfigError::Invalid(format!(
                "效率阈值顺序错误: low={} > warning={}",
                th.efficiency_low, th.efficiency_warning
            )));
        }

        if !self.balanced_tolerance.is_finite() || self.balanced_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "平衡容差无效: {}",
                self.balanced_tolerance
            )));
        }

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::Invalid(format!("不支持的语言: {}", self.locale)));
        }

        Ok(())
    }
}
