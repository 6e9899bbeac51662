use prettytable::{format, row, Table};

use crate::models::verdict::{RunReport, VerdictState};

// 按阶段打印每项结论，性能类检查再补一张统计表
pub fn show_report(report: &RunReport) {
    for phase in &report.phases {
        println!();
        println!("=== {} ===", phase.name);
        for verdict in &phase.verdicts {
            let label = match verdict.state {
                VerdictState::Pass => "PASS",
                VerdictState::Fail => "FAIL",
                VerdictState::Skip => "SKIP",
            };
            match &verdict.reason {
                Some(reason) => println!("[{}] {} - {}", label, verdict.name, reason),
                None => println!("[{}] {}", label, verdict.name),
            }
        }
    }

    println!();
    println!(
        "汇总: 通过 {} / 失败 {} / 跳过 {}",
        report.passed, report.failed, report.skipped
    );

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["检查项", "样本数", "最小", "最大", "平均", "P95"]);
    let mut has_stats = false;
    for phase in &report.phases {
        for verdict in &phase.verdicts {
            if let Some(summary) = &verdict.summary {
                has_stats = true;
                table.add_row(row![
                    verdict.name,
                    format!("{}", summary.count),
                    format!("{}ms", summary.min_ms),
                    format!("{}ms", summary.max_ms),
                    format!("{}ms", summary.mean_ms),
                    format!("{}ms", summary.p95_ms),
                ]);
            }
        }
    }
    if has_stats {
        println!("性能统计:");
        table.printstd();
    }

    println!();
    if report.aggregate_pass {
        println!("总体结论: PASS");
    } else {
        println!("总体结论: FAIL");
    }
}
