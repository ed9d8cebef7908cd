// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use garment_line_tracker::config::{ConfigError, PlannerConfigReader};
use garment_line_tracker::domain::ShiftLayout;
use garment_line_tracker::engine::AlertThresholds;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub layout: ShiftLayout,
    pub default_efficiency: f64,
    pub thresholds: AlertThresholds,
    pub balanced_tolerance: f64,
    pub locale: String,
    /// 为 true 时所有读取返回错误
    pub fail: bool,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            layout: ShiftLayout::default(),
            default_efficiency: 0.7,
            thresholds: AlertThresholds::default(),
            balanced_tolerance: 0.01,
            locale: "es".to_string(),
            fail: false,
        }
    }

    /// 无午休、整点结束的 8:00-16:00 班次
    pub fn day_shift() -> Self {
        let mut config = Self::default();
        config.layout = ShiftLayout {
            start_hour: 8,
            end_hour: 16,
            lunch_hour: None,
            last_slot_minutes: None,
        };
        config
    }

    /// 读取失败的配置
    pub fn failing() -> Self {
        let mut config = Self::default();
        config.fail = true;
        config
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.fail {
            Err(ConfigError::Invalid("mock config unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PlannerConfigReader for MockConfig {
    async fn get_shift_layout(&self) -> Result<ShiftLayout, ConfigError> {
        self.check()?;
        Ok(self.layout)
    }

    async fn get_default_efficiency(&self) -> Result<f64, ConfigError> {
        self.check()?;
        Ok(self.default_efficiency)
    }

    async fn get_alert_thresholds(&self) -> Result<AlertThresholds, ConfigError> {
        self.check()?;
        Ok(self.thresholds)
    }

    async fn get_balanced_tolerance(&self) -> Result<f64, ConfigError> {
        self.check()?;
        Ok(self.balanced_tolerance)
    }

    async fn get_locale(&self) -> Result<String, ConfigError> {
        self.check()?;
        Ok(self.locale.clone())
    }
}
