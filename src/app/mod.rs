// ==========================================
// 成衣产线跟踪系统 - 应用层
// ==========================================
// 职责: 组装配置、网关与各 API
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
