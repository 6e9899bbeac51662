use clap::Parser;

use stack_health_engine::core;
use stack_health_engine::models::args::Args;
use stack_health_engine::models::run_config::RunConfig;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = RunConfig::from(args);
    match core::runner::run(&config).await {
        Ok(report) => {
            core::show_report::show_report(&report);
            if config.verbose {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("报告序列化失败: {}", e),
                }
            }
            // 有任何必选检查失败就以1退出
            std::process::exit(if report.aggregate_pass { 0 } else { 1 });
        }
        Err(e) => {
            eprintln!("配置错误: {}", e);
            std::process::exit(1);
        }
    }
}
