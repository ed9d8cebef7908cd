// ==========================================
// 成衣产线跟踪系统 - 生产数据网关 Trait
// ==========================================
// 职责: 定义与外部后端交换运行数据的接口（不包含实现）
// 说明: 返回的数值字段一律为 NumberLike，由调用方经 safe_num 使用
// ==========================================

use crate::domain::balancing::{BalancingAssignment, BalancingContext};
use crate::domain::operation::OperationRow;
use crate::domain::run::{RunDetail, RunListing, SaveRunRequest};
use crate::gateway::error::GatewayResult;
use async_trait::async_trait;

// ==========================================
// ProductionGateway Trait
// ==========================================
// 实现者: InMemoryGateway（测试/演示）；REST 客户端由宿主提供
#[async_trait]
pub trait ProductionGateway: Send + Sync {
    /// 保存一次产线运行
    ///
    /// # 返回
    /// 后端生成的运行ID
    async fn save_run(&self, request: &SaveRunRequest) -> GatewayResult<String>;

    /// 运行列表
    async fn list_runs(&self) -> GatewayResult<Vec<RunListing>>;

    /// 运行明细（按操作工分组的工序记录）
    async fn load_run_detail(&self, run_id: &str) -> GatewayResult<RunDetail>;

    /// 保存每小时录入（整体覆盖该运行的工序行）
    async fn save_hourly(&self, run_id: &str, rows: &[OperationRow]) -> GatewayResult<()>;

    /// 线平衡所需的运行概要与操作工产能
    async fn fetch_balancing(&self, run_id: &str) -> GatewayResult<BalancingContext>;

    /// 提交平衡分配
    ///
    /// # 返回
    /// 被接受的分配条数
    async fn save_assignments(
        &self,
        run_id: &str,
        assignments: &[BalancingAssignment],
    ) -> GatewayResult<usize>;
}
