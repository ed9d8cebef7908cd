// ==========================================
// 成衣产线跟踪系统 - 核心库
// ==========================================
// 职责: 目标计算、班次时段分配、缝制数量汇总、线平衡建议、告警
// 系统定位: 决策支持（建议只预填，提交由用户决定）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 纯计算
pub mod engine;

// 配置层 - 计划参数
pub mod config;

// 网关层 - 外部后端
pub mod gateway;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 用例接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertType, GapStatus, Role, Severity};

// 领域实体
pub use domain::{
    Alert, BalancingAssignment, BalancingOutcome, BalancingSuggestion, HeaderInput, NumberLike,
    OperationRow, OperatorCapacityRecord, Session, ShiftLayout, ShiftSlot,
};

// 引擎
pub use engine::{
    build_shift_slots, calc_target_from_sam, cumulative, distribute_proportional, safe_num,
    AlertGenerator, HourlyPlan, LineBalancer, TargetCalculator,
};

// API
pub use api::{ApiError, ApiResult, BalancingApi, DashboardApi, PlannerApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "成衣产线跟踪系统";
