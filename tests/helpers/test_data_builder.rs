// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use garment_line_tracker::domain::{
    HeaderInput, NumberLike, OperationCapacity, OperationRow, OperatorCapacityRecord,
    OperatorPerformance, ShiftLayout, ShiftSlot,
};
use garment_line_tracker::engine::build_shift_slots;

// ==========================================
// 表头
// ==========================================

/// 示例表头: 25 人 × 8 小时, SAM 18.5, 效率 0.7
pub fn sample_header() -> HeaderInput {
    HeaderInput::new(25, 8, 18.5, 0.7).with_run("L1", "2026-10-19", "POLO-001")
}

/// 每小时目标为 50 的表头: 10 人 × 8 小时, SAM 12, 效率 1.0 → 目标 400
pub fn header_tph_50(line: &str) -> HeaderInput {
    HeaderInput::new(10, 8, 12, 1.0).with_run(line, "2026-10-19", "TEE-050")
}

/// 默认布局下的时段
pub fn default_slots(working_hours: f64) -> Vec<ShiftSlot> {
    build_shift_slots(&working_hours, &ShiftLayout::default())
}

// ==========================================
// OperatorCapacityRecord 构建器
// ==========================================

pub struct OperatorBuilder {
    record: OperatorCapacityRecord,
}

impl OperatorBuilder {
    pub fn new(operator_id: &str) -> Self {
        Self {
            record: OperatorCapacityRecord {
                operator_id: operator_id.to_string(),
                operator_no: Some(operator_id.to_string()),
                operator_name: format!("Operador {}", operator_id),
                operations: Vec::new(),
            },
        }
    }

    pub fn operation(mut self, operation_id: &str, capacity: impl Into<NumberLike>) -> Self {
        self.record.operations.push(OperationCapacity {
            operation_id: Some(operation_id.to_string()),
            operation_name: format!("Operación {}", operation_id),
            capacity_per_hour: capacity.into(),
        });
        self
    }

    pub fn build(self) -> OperatorCapacityRecord {
        self.record
    }
}

/// 只有一道主工序的操作工
pub fn operator(operator_id: &str, capacity: impl Into<NumberLike>) -> OperatorCapacityRecord {
    OperatorBuilder::new(operator_id)
        .operation(&format!("OP-{}", operator_id), capacity)
        .build()
}

// ==========================================
// OperatorPerformance
// ==========================================

pub fn performance(
    operator_no: &str,
    planned_qty: f64,
    total_sewed: f64,
    capacity_per_hour: f64,
) -> OperatorPerformance {
    OperatorPerformance {
        operator_no: Some(operator_no.to_string()),
        operator_name: format!("Operador {}", operator_no),
        operation_name: "Pegar cuello".to_string(),
        style: "POLO-001".to_string(),
        planned_qty,
        total_sewed,
        capacity_per_hour,
    }
}

// ==========================================
// 工序行
// ==========================================

/// 五行示例:
/// - r1/r2: 操作工 1（两道工序）
/// - r3: 操作工 2
/// - r4: 未分配
/// - r5: 操作工 " 10 "（编号带空白）
pub fn sample_rows() -> Vec<OperationRow> {
    vec![
        OperationRow::new("r1", Some("1"), "Cerrar hombro").with_operator_name("Ana"),
        OperationRow::new("r2", Some("1"), "Pegar cuello").with_operator_name("Ana"),
        OperationRow::new("r3", Some("2"), "Ruedo").with_operator_name("Luis"),
        OperationRow::new("r4", None, "Inspección"),
        OperationRow::new("r5", Some(" 10 "), "Botones").with_operator_name("Marta"),
    ]
}

/// 带已存产能的工序行
pub fn row_with_capacity(id: &str, operator_no: &str, capacity: f64) -> OperationRow {
    let mut row = OperationRow::new(id, Some(operator_no), &format!("Operación {}", id))
        .with_operator_name(&format!("Operador {}", operator_no));
    row.cap_per_operator = NumberLike::Number(capacity);
    row
}
