// ==========================================
// 成衣产线跟踪系统 - 计划参数读取 Trait
// ==========================================
// 职责: 定义应用层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::planner_config::ConfigError;
use crate::domain::slot::ShiftLayout;
use crate::engine::alert::AlertThresholds;
use async_trait::async_trait;

// ==========================================
// PlannerConfigReader Trait
// ==========================================
// 实现者: ConfigManager（文件 + 环境变量）
#[async_trait]
pub trait PlannerConfigReader: Send + Sync {
    /// 班次布局
    ///
    /// # 默认值
    /// - 9:00 至 17:36，13 点午休
    async fn get_shift_layout(&self) -> Result<ShiftLayout, ConfigError>;

    /// 表头未选效率时的默认值
    ///
    /// # 默认值
    /// - 0.7
    async fn get_default_efficiency(&self) -> Result<f64, ConfigError>;

    /// 告警阈值
    async fn get_alert_thresholds(&self) -> Result<AlertThresholds, ConfigError>;

    /// 线平衡展示容差（件/小时）
    ///
    /// # 默认值
    /// - 0.01
    async fn get_balanced_tolerance(&self) -> Result<f64, ConfigError>;

    /// 界面语言
    ///
    /// # 默认值
    /// - "es"
    async fn get_locale(&self) -> Result<String, ConfigError>;
}
