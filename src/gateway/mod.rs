// ==========================================
// 成衣产线跟踪系统 - 后端网关层
// ==========================================
// 职责: 与外部后端（保存/加载/平衡数据）的异步交互边界
// 红线: 引擎层不依赖本层
// ==========================================

pub mod error;
pub mod memory;
pub mod production_gateway;

pub use error::{GatewayError, GatewayResult};
pub use memory::InMemoryGateway;
pub use production_gateway::ProductionGateway;
