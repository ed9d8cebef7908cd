// ==========================================
// 成衣产线跟踪系统 - 配置层
// ==========================================
// 职责: 计划参数管理，支持文件与环境变量多级覆写
// 存储: JSON 配置文件（可选）
// ==========================================

pub mod config_manager;
pub mod efficiency_presets;
pub mod planner_config;
pub mod planner_config_trait;

// 重导出核心配置
pub use config_manager::{config_keys, ConfigManager};
pub use efficiency_presets::{EfficiencyPreset, EFFICIENCY_PRESETS};
pub use planner_config::{ConfigError, PlannerConfig, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use planner_config_trait::PlannerConfigReader;
