//! 演示输出与运行报告
//!
//! 列表输出走 tabled 表格或 JSON，逐个运行时打印彩色分隔头，
//! 最后以小结表格汇报每个演示的耗时。

use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::time::{Duration, Instant};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::demo::Demo;
use crate::common::{LabError, LabResult};

/// 单次演示的运行报告
#[derive(Debug, Clone)]
pub struct RunReport {
    pub name: &'static str,
    pub started: DateTime<Local>,
    pub elapsed: Duration,
}

/// 运行一个演示并返回报告
pub fn run_demo(demo: &Demo) -> RunReport {
    log::info!("running demo {}", demo.name);

    let header = format!("=== {} — {} ===", demo.name, demo.summary);
    println!("{}", header.cyan().bold());

    let started = Local::now();
    let timer = Instant::now();
    (demo.run)();
    let elapsed = timer.elapsed();

    println!();
    RunReport {
        name: demo.name,
        started,
        elapsed,
    }
}

#[derive(Tabled)]
struct DemoRow {
    #[tabled(rename = "name")]
    name: &'static str,
    #[tabled(rename = "category")]
    category: &'static str,
    #[tabled(rename = "summary")]
    summary: &'static str,
}

/// 以表格形式打印演示列表
pub fn print_listing(demos: &[Demo]) {
    let rows: Vec<DemoRow> = demos
        .iter()
        .map(|demo| DemoRow {
            name: demo.name,
            category: demo.category.as_str(),
            summary: demo.summary,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    println!("{} demos", demos.len());
}

#[derive(Serialize)]
struct DemoJson {
    name: &'static str,
    category: &'static str,
    summary: &'static str,
}

/// 演示列表的JSON形式
pub fn listing_json(demos: &[Demo]) -> LabResult<String> {
    let rows: Vec<DemoJson> = demos
        .iter()
        .map(|demo| DemoJson {
            name: demo.name,
            category: demo.category.as_str(),
            summary: demo.summary,
        })
        .collect();

    serde_json::to_string_pretty(&rows).map_err(|e| LabError::Serialization(e.to_string()))
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "name")]
    name: &'static str,
    #[tabled(rename = "started")]
    started: String,
    #[tabled(rename = "elapsed")]
    elapsed: String,
}

/// 打印一批运行报告的小结表格
pub fn print_summary(reports: &[RunReport]) {
    if reports.is_empty() {
        return;
    }

    let rows: Vec<ReportRow> = reports
        .iter()
        .map(|report| ReportRow {
            name: report.name,
            started: report.started.format("%H:%M:%S%.3f").to_string(),
            elapsed: format!("{:.2?}", report.elapsed),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", format!("ran {} demos", reports.len()).green().bold());
    println!("{}", table);
}
