// ==========================================
// 成衣产线跟踪系统 - 内存网关
// ==========================================
// 职责: ProductionGateway 的进程内实现（测试与演示）
// 存储: tokio RwLock 保护的运行列表（按保存顺序）
// 说明: 计划侧数量 stitched_data 由运行目标按时段比例分配得出，
//       实际数量 sewed_data 取自每小时录入
// ==========================================

use crate::domain::balancing::{
    BalancingAssignment, BalancingContext, BalancingRunInfo, OperationCapacity,
    OperatorCapacityRecord,
};
use crate::domain::number::NumberLike;
use crate::domain::operation::{OperationRow, StitchedEntry};
use crate::domain::run::{
    OperationRecord, OperatorInfo, OperatorOperations, RunDetail, RunListing, RunRecord,
    SaveRunRequest,
};
use crate::engine::aggregator::group_by_operator;
use crate::engine::distributor::distribute_proportional;
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::production_gateway::ProductionGateway;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredRun {
    id: String,
    request: SaveRunRequest,
    rows: Vec<OperationRow>,
    assignments: Vec<BalancingAssignment>,
}

impl StoredRun {
    /// 每时段计划数量（按时段ID）
    fn planned_entry(&self) -> StitchedEntry {
        let slots = &self.request.slots;
        distribute_proportional(self.request.target, slots)
            .into_iter()
            .zip(slots.iter())
            .map(|(qty, slot)| (slot.id.clone(), NumberLike::Number(qty)))
            .collect()
    }

    /// 按操作工分组的工序记录；未分配行各自成组
    fn operator_operations(&self) -> Vec<OperatorOperations> {
        let planned = self.planned_entry();
        let to_record = |row: &OperationRow| OperationRecord {
            operation_id: Some(row.id.clone()),
            operation_name: row.operation.clone(),
            capacity_per_hour: NumberLike::Number(row.effective_capacity()),
            stitched_data: planned.clone(),
            sewed_data: row.stitched.clone(),
        };

        let mut out = Vec::new();
        for group in group_by_operator(&self.rows, &self.request.slots) {
            match &group.operator_no {
                Some(no) => out.push(OperatorOperations {
                    operator: OperatorInfo {
                        operator_id: no.clone(),
                        operator_no: Some(no.clone()),
                        operator_name: group.operator_name.clone(),
                    },
                    operations: group.rows.iter().map(to_record).collect(),
                }),
                None => out.extend(group.rows.iter().map(|row| OperatorOperations {
                    operator: OperatorInfo {
                        operator_id: row.id.clone(),
                        operator_no: None,
                        operator_name: row.operator_name.clone(),
                    },
                    operations: vec![to_record(row)],
                })),
            }
        }
        out
    }

    fn record(&self) -> RunRecord {
        let req = &self.request;
        RunRecord {
            id: self.id.clone(),
            line_no: Some(req.line.clone()),
            run_date: req.date.clone(),
            style: req.style.clone(),
            target_pcs: NumberLike::Number(req.target),
            target_per_hour: NumberLike::Number(req.target_per_hour),
            working_hours: req.working_hours.clone(),
            sam_minutes: req.sam.clone(),
            efficiency: NumberLike::Number(req.efficiency),
            slots: req.slots.clone(),
        }
    }
}

// ==========================================
// InMemoryGateway - 内存网关
// ==========================================
pub struct InMemoryGateway {
    runs: RwLock<Vec<StoredRun>>,
    available: AtomicBool,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            runs: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// 模拟后端上线/下线（下线时所有调用返回 Unavailable）
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// 已提交的平衡分配（诊断用）
    pub async fn assignments(&self, run_id: &str) -> GatewayResult<Vec<BalancingAssignment>> {
        self.ensure_available()?;
        let runs = self.runs.read().await;
        find_run(&runs, run_id).map(|run| run.assignments.clone())
    }

    /// 已保存的工序行（诊断用）
    pub async fn rows(&self, run_id: &str) -> GatewayResult<Vec<OperationRow>> {
        self.ensure_available()?;
        let runs = self.runs.read().await;
        find_run(&runs, run_id).map(|run| run.rows.clone())
    }

    fn ensure_available(&self) -> GatewayResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(GatewayError::Unavailable("in-memory backend offline".to_string()))
        }
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn find_run<'a>(runs: &'a [StoredRun], run_id: &str) -> GatewayResult<&'a StoredRun> {
    runs.iter()
        .find(|r| r.id == run_id)
        .ok_or_else(|| GatewayError::not_found("run", run_id))
}

fn find_run_mut<'a>(runs: &'a mut [StoredRun], run_id: &str) -> GatewayResult<&'a mut StoredRun> {
    runs.iter_mut()
        .find(|r| r.id == run_id)
        .ok_or_else(|| GatewayError::not_found("run", run_id))
}

#[async_trait]
impl ProductionGateway for InMemoryGateway {
    async fn save_run(&self, request: &SaveRunRequest) -> GatewayResult<String> {
        self.ensure_available()?;
        if request.line.trim().is_empty() || request.date.trim().is_empty() {
            return Err(GatewayError::Rejected("line and date are required".to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let mut runs = self.runs.write().await;
        runs.push(StoredRun {
            id: id.clone(),
            request: request.clone(),
            rows: Vec::new(),
            assignments: Vec::new(),
        });

        info!(run_id = %id, line = %request.line, date = %request.date, "运行已保存");
        Ok(id)
    }

    async fn list_runs(&self) -> GatewayResult<Vec<RunListing>> {
        self.ensure_available()?;
        let runs = self.runs.read().await;

        Ok(runs
            .iter()
            .rev()
            .map(|run| RunListing {
                id: run.id.clone(),
                line_no: Some(run.request.line.clone()),
                run_date: run.request.date.clone(),
                style: run.request.style.clone(),
            })
            .collect())
    }

    async fn load_run_detail(&self, run_id: &str) -> GatewayResult<RunDetail> {
        self.ensure_available()?;
        let runs = self.runs.read().await;
        let run = find_run(&runs, run_id)?;

        Ok(RunDetail {
            run: run.record(),
            operations: run.operator_operations(),
        })
    }

    async fn save_hourly(&self, run_id: &str, rows: &[OperationRow]) -> GatewayResult<()> {
        self.ensure_available()?;
        let mut runs = self.runs.write().await;
        let run = find_run_mut(&mut runs, run_id)?;
        run.rows = rows.to_vec();

        debug!(run_id, row_count = rows.len(), "每小时录入已保存");
        Ok(())
    }

    async fn fetch_balancing(&self, run_id: &str) -> GatewayResult<BalancingContext> {
        self.ensure_available()?;
        let runs = self.runs.read().await;
        let run = find_run(&runs, run_id)?;
        let req = &run.request;

        let operators = run
            .operator_operations()
            .into_iter()
            .map(|entry| OperatorCapacityRecord {
                operator_id: entry.operator.operator_id,
                operator_no: entry.operator.operator_no,
                operator_name: entry.operator.operator_name,
                operations: entry
                    .operations
                    .into_iter()
                    .map(|rec| OperationCapacity {
                        operation_id: rec.operation_id,
                        operation_name: rec.operation_name,
                        capacity_per_hour: rec.capacity_per_hour,
                    })
                    .collect(),
            })
            .collect();

        Ok(BalancingContext {
            run: BalancingRunInfo {
                target_per_hour: NumberLike::Number(req.target_per_hour),
                working_hours: req.working_hours.clone(),
                operators_count: req.operators.clone(),
                line_no: Some(req.line.clone()),
            },
            operators,
        })
    }

    async fn save_assignments(
        &self,
        run_id: &str,
        assignments: &[BalancingAssignment],
    ) -> GatewayResult<usize> {
        self.ensure_available()?;
        let mut runs = self.runs.write().await;
        let run = find_run_mut(&mut runs, run_id)?;

        let known: Vec<String> = run
            .operator_operations()
            .into_iter()
            .map(|entry| entry.operator.operator_id)
            .collect();
        if let Some(bad) = assignments.iter().find(|a| {
            !known.contains(&a.source_operator_id) || !known.contains(&a.target_operator_id)
        }) {
            return Err(GatewayError::Rejected(format!(
                "unknown operator in assignment: {} -> {}",
                bad.source_operator_id, bad.target_operator_id
            )));
        }

        run.assignments = assignments.to_vec();
        info!(run_id, accepted = assignments.len(), "平衡分配已保存");
        Ok(assignments.len())
    }
}
