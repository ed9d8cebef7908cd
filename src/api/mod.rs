// ==========================================
// 成衣产线跟踪系统 - API 层
// ==========================================
// 职责: 提供用例接口，组合引擎计算与后端网关
// ==========================================

pub mod balancing_api;
pub mod dashboard_api;
pub mod error;
pub mod planner_api;
pub mod validator;

// 重导出核心类型
pub use balancing_api::{outcome_message, BalancingApi, BalancingProposal};
pub use dashboard_api::{DashboardApi, RunDashboard};
pub use error::{ApiError, ApiResult};
pub use planner_api::{LinePlan, LoadedRun, PlannerApi};
pub use validator::{ensure_savable, require_role, validate_assignments};
