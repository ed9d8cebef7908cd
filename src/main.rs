// ==========================================
// 成衣产线跟踪系统 - 命令行入口
// ==========================================
// 用法: garment-line-tracker [header.json]
// 输出: 表头派生的计划（目标/时段/每小时目标）JSON
// 说明: 未给文件时使用示例表头；后端为内存网关
// ==========================================

use std::process::ExitCode;

use garment_line_tracker::app::AppState;
use garment_line_tracker::domain::HeaderInput;
use garment_line_tracker::{logging, APP_NAME, VERSION};

fn sample_header() -> HeaderInput {
    HeaderInput::new(25, 8, 18.5, 0.7).with_run("L1", "2026-10-19", "POLO-001")
}

fn read_header(path: &str) -> anyhow::Result<HeaderInput> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let state = match AppState::load_in_memory().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("配置加载失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let header = match std::env::args().nth(1) {
        Some(path) => match read_header(&path) {
            Ok(header) => header,
            Err(e) => {
                tracing::error!("表头文件读取失败: path={}, {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => sample_header(),
    };

    let plan = state.planner_api.build_plan(&header);
    match serde_json::to_string_pretty(&plan) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("计划序列化失败: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if !plan.can_save {
        tracing::warn!("目标为 0 或产线号/日期缺失，不能保存");
    }

    ExitCode::SUCCESS
}
