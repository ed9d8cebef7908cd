// ==========================================
// 成衣产线跟踪系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含计算逻辑,不含 I/O
// ==========================================

pub mod alert;
pub mod balancing;
pub mod header;
pub mod number;
pub mod operation;
pub mod run;
pub mod session;
pub mod slot;
pub mod types;

// 重导出核心类型
pub use alert::{Alert, OperatorPerformance};
pub use balancing::{
    BalancingAssignment, BalancingContext, BalancingOutcome, BalancingRunInfo,
    BalancingSuggestion, OperationCapacity, OperatorCapacityRecord, OperatorGap, UncoveredNeed,
};
pub use header::HeaderInput;
pub use number::NumberLike;
pub use operation::{OperationRow, StitchedEntry};
pub use run::{
    OperationRecord, OperatorInfo, OperatorOperations, RunDetail, RunListing, RunRecord,
    SaveRunRequest,
};
pub use session::Session;
pub use slot::{ShiftLayout, ShiftSlot};
pub use types::{AlertType, GapStatus, Role, Severity};
