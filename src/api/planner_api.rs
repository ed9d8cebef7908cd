// ==========================================
// 成衣产线跟踪系统 - 计划录入 API
// ==========================================
// 职责: 表头 → 目标/时段/每小时计划；运行保存与加载；每小时录入保存
// 架构: API 层 → Engine 层（纯计算）+ Gateway 层（外部后端）
// 会话: 任意角色可用，会话仅用于日志
// ==========================================

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::error::ApiResult;
use crate::api::validator::ensure_savable;
use crate::config::efficiency_presets::{EfficiencyPreset, EFFICIENCY_PRESETS};
use crate::domain::header::HeaderInput;
use crate::domain::number::NumberLike;
use crate::domain::operation::OperationRow;
use crate::domain::run::{RunDetail, RunListing, RunRecord, SaveRunRequest};
use crate::domain::session::Session;
use crate::domain::slot::{ShiftLayout, ShiftSlot};
use crate::engine::aggregator::{apply_stitched_edit, line_total};
use crate::engine::distributor::HourlyPlan;
use crate::engine::numeric::safe_num;
use crate::engine::shift_slots::{build_shift_slots, ShiftSlotBuilder};
use crate::engine::target::{target_per_hour, TargetCalculator};
use crate::gateway::ProductionGateway;

// ==========================================
// 返回结构
// ==========================================

/// 表头派生出的计划
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePlan {
    pub target: f64,
    pub target_per_hour: f64,
    pub slots: Vec<ShiftSlot>,
    pub hourly: HourlyPlan,
    /// 目标 > 0 且产线号/日期已填写
    pub can_save: bool,
}

/// 加载后的运行（可编辑）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedRun {
    pub run: RunRecord,
    pub target: f64,
    pub slots: Vec<ShiftSlot>,
    pub rows: Vec<OperationRow>,
}

// ==========================================
// PlannerApi - 计划录入 API
// ==========================================
pub struct PlannerApi {
    gateway: Arc<dyn ProductionGateway>,
    layout: ShiftLayout,
    default_efficiency: f64,
    calculator: Mutex<TargetCalculator>,
    slot_builder: Mutex<ShiftSlotBuilder>,
}

impl PlannerApi {
    pub fn new(
        gateway: Arc<dyn ProductionGateway>,
        layout: ShiftLayout,
        default_efficiency: f64,
    ) -> Self {
        Self {
            gateway,
            layout,
            default_efficiency,
            calculator: Mutex::new(TargetCalculator::new(default_efficiency)),
            slot_builder: Mutex::new(ShiftSlotBuilder::new(layout)),
        }
    }

    /// 效率下拉框候选值
    pub fn efficiency_presets(&self) -> &'static [EfficiencyPreset] {
        EFFICIENCY_PRESETS
    }

    // ==========================================
    // 纯计算（每次表头变化都可调用）
    // ==========================================

    /// 由表头计算目标、时段与每小时计划
    pub fn build_plan(&self, header: &HeaderInput) -> LinePlan {
        let target = self
            .calculator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .target_for(header);
        let slots = self
            .slot_builder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .build(&header.working_hours);

        LinePlan {
            target,
            target_per_hour: target_per_hour(target, &header.working_hours),
            hourly: HourlyPlan::targets_only(target, &slots),
            slots,
            can_save: ensure_savable(header, target).is_ok(),
        }
    }

    /// 单行的每小时计划与对账
    pub fn row_plan(&self, target: f64, slots: &[ShiftSlot], row: &OperationRow) -> HourlyPlan {
        HourlyPlan::build(target, slots, &row.stitched)
    }

    /// 应用一次录入（同编号行同步），返回被更新的行数
    pub fn apply_edit(
        &self,
        rows: &mut [OperationRow],
        row_id: &str,
        slot_id: &str,
        value: impl Into<NumberLike>,
    ) -> usize {
        apply_stitched_edit(rows, row_id, slot_id, value.into())
    }

    /// 产线合计（多工序操作工只计一次）
    pub fn line_total(&self, rows: &[OperationRow], slots: &[ShiftSlot]) -> f64 {
        line_total(rows, slots)
    }

    // ==========================================
    // 后端交互
    // ==========================================

    /// 保存运行
    ///
    /// # 返回
    /// - Ok(run_id)
    /// - Err(ApiError::InsufficientInput): 目标为 0 或产线号/日期缺失
    #[instrument(skip(self, session, header), fields(user = %session.username, line = %header.line))]
    pub async fn save_run(&self, session: &Session, header: &HeaderInput) -> ApiResult<String> {
        let plan = self.build_plan(header);
        ensure_savable(header, plan.target)?;

        let request = SaveRunRequest {
            line: header.line.trim().to_string(),
            date: header.date.trim().to_string(),
            style: header.style.trim().to_string(),
            operators: header.operators.clone(),
            working_hours: header.working_hours.clone(),
            sam: header.sam.clone(),
            efficiency: safe_num(&header.efficiency, self.default_efficiency),
            target: plan.target,
            target_per_hour: plan.target_per_hour,
            slots: plan.slots,
        };

        let run_id = self.gateway.save_run(&request).await?;
        info!(run_id = %run_id, target = request.target, "运行保存完成");
        Ok(run_id)
    }

    /// 运行列表
    pub async fn list_runs(&self, _session: &Session) -> ApiResult<Vec<RunListing>> {
        Ok(self.gateway.list_runs().await?)
    }

    /// 加载运行为可编辑的工序行
    #[instrument(skip(self, session), fields(user = %session.username))]
    pub async fn load_run(&self, session: &Session, run_id: &str) -> ApiResult<LoadedRun> {
        let detail = self.gateway.load_run_detail(run_id).await?;

        let slots = if detail.run.slots.is_empty() {
            build_shift_slots(&detail.run.working_hours, &self.layout)
        } else {
            detail.run.slots.clone()
        };
        let rows = rows_from_detail(&detail);

        info!(run_id, row_count = rows.len(), "运行加载完成");
        Ok(LoadedRun {
            target: safe_num(&detail.run.target_pcs, 0.0),
            run: detail.run,
            slots,
            rows,
        })
    }

    /// 保存每小时录入
    #[instrument(skip(self, session, rows), fields(user = %session.username, row_count = rows.len()))]
    pub async fn save_hourly(
        &self,
        session: &Session,
        run_id: &str,
        rows: &[OperationRow],
    ) -> ApiResult<()> {
        self.gateway.save_hourly(run_id, rows).await?;
        info!(run_id, "每小时录入保存完成");
        Ok(())
    }
}

/// 运行明细 → 工序行（实际数量取 sewed_data）
fn rows_from_detail(detail: &RunDetail) -> Vec<OperationRow> {
    detail
        .operations
        .iter()
        .flat_map(|entry| {
            let op = &entry.operator;
            entry.operations.iter().enumerate().map(move |(idx, rec)| {
                let id = rec
                    .operation_id
                    .clone()
                    .unwrap_or_else(|| format!("{}-{}", op.operator_id, idx));
                OperationRow {
                    id,
                    operator_no: op.operator_no.clone(),
                    operator_name: op.operator_name.clone(),
                    operation: rec.operation_name.clone(),
                    cap_per_operator: rec.capacity_per_hour.clone(),
                    stitched: rec.sewed_data.clone(),
                    ..Default::default()
                }
            })
        })
        .collect()
}
