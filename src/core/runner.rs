use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use indicatif::ProgressBar;
use tokio::time::interval;

use crate::core::check_targets::check_targets;
use crate::core::checks::evaluate_check;
use crate::core::probe::{build_client, probe};
use crate::core::sampler::sample;
use crate::core::stats::summarize;
use crate::core::sustained::run_for;
use crate::core::threshold::evaluate;
use crate::models::run_config::RunConfig;
use crate::models::sample::ProbeSample;
use crate::models::target::{CheckKind, ProbeMode, Target};
use crate::models::verdict::{CheckVerdict, RunReport};

// 边界校验用更短的超时，等5秒只是浪费时间
const BOUNDARY_TIMEOUT_SECS: u64 = 2;

// 按运行配置展开的检查计划
pub struct RunPlan {
    pub health: Vec<Target>,
    pub boundary: Target,
    pub performance: Target,
    pub sustained: Target,
}

fn target(
    name: &str,
    url: String,
    check: CheckKind,
    optional: bool,
    timeout_secs: u64,
) -> Target {
    Target {
        name: name.to_string(),
        url,
        method: "GET".to_string(),
        check,
        body_substrings: None,
        optional,
        timeout_secs,
    }
}

// 生成一个本次运行专用的关联ID
fn generated_request_id() -> String {
    let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_millis(),
        Err(_) => 0,
    };
    format!("req-{}", millis)
}

/// 把配置里的服务地址展开成四个阶段的检查计划。
/// 网关、前端和边界校验是必选项，向量存储和缓存是可选依赖。
pub fn build_plan(config: &RunConfig) -> RunPlan {
    let t = config.timeout_secs;
    let mut health = vec![
        target(
            "网关存活",
            format!("{}/health", config.gateway_url),
            CheckKind::EndpointUp {
                expected_status: 200,
            },
            false,
            t,
        ),
        target(
            "网关依赖组件",
            format!("{}/health", config.gateway_url),
            CheckKind::ComponentStatus {
                component: "internalApi".to_string(),
                expected: "UP".to_string(),
            },
            false,
            t,
        ),
        target(
            "关联ID生成",
            format!("{}/health", config.gateway_url),
            CheckKind::CorrelationEcho { request_id: None },
            false,
            t,
        ),
        target(
            "关联ID透传",
            format!("{}/health", config.gateway_url),
            CheckKind::CorrelationEcho {
                request_id: Some(generated_request_id()),
            },
            false,
            t,
        ),
        target(
            "向量存储存活",
            format!("{}/healthz", config.vector_url),
            CheckKind::EndpointUp {
                expected_status: 200,
            },
            true,
            t,
        ),
        target(
            "缓存服务存活",
            format!("{}/health", config.cache_url),
            CheckKind::EndpointUp {
                expected_status: 200,
            },
            true,
            t,
        ),
    ];
    // 前端要能出页面，不只是状态码对
    let mut frontend = target(
        "前端页面",
        format!("{}/", config.frontend_url),
        CheckKind::EndpointUp {
            expected_status: 200,
        },
        false,
        t,
    );
    frontend.body_substrings = Some(vec!["<html".to_string()]);
    health.push(frontend);

    RunPlan {
        health,
        boundary: target(
            "内部服务直连防护",
            format!("{}/health", config.internal_url),
            CheckKind::NegativeReachability,
            false,
            BOUNDARY_TIMEOUT_SECS,
        ),
        performance: target(
            "网关性能",
            format!("{}/health", config.gateway_url),
            CheckKind::EndpointUp {
                expected_status: 200,
            },
            false,
            t,
        ),
        sustained: target(
            "网关持续负载",
            format!("{}/health", config.gateway_url),
            CheckKind::EndpointUp {
                expected_status: 200,
            },
            false,
            t,
        ),
    }
}

/// 跑完整个检查计划。单项失败只记入结论继续往下跑，
/// 只有配置错误才会在开跑之前直接返回Err。
pub async fn run(config: &RunConfig) -> anyhow::Result<RunReport> {
    let plan = build_plan(config);
    // 开跑前校验配置，这是唯一的致命错误出口
    let mut all_targets: Vec<&Target> = plan.health.iter().collect();
    all_targets.push(&plan.boundary);
    all_targets.push(&plan.performance);
    all_targets.push(&plan.sustained);
    check_targets(&all_targets, config.request_count, config.concurrency)?;

    let client = build_client(config.timeout_secs)?;
    let boundary_client = build_client(BOUNDARY_TIMEOUT_SECS)?;
    let mut report = RunReport::new();

    // 阶段一: 健康检查，每个目标探测一次
    let mut verdicts = Vec::new();
    let mut gateway_reachable = false;
    for target in &plan.health {
        let sample: ProbeSample = probe(&client, target, 0).await;
        if target.name == "网关存活" && sample.is_success() {
            gateway_reachable = true;
        }
        if config.verbose {
            println!("[探测] {} -> {:?} {}ms", target.name, sample.outcome, sample.latency_ms);
        }
        verdicts.push(evaluate_check(target, &sample));
    }
    report.push_phase("健康检查", verdicts);

    // 阶段二: 边界校验，连不上才是好消息
    let boundary_sample = probe(&boundary_client, &plan.boundary, 0).await;
    report.push_phase(
        "边界校验",
        vec![evaluate_check(&plan.boundary, &boundary_sample)],
    );

    // 网关整个不可达时性能阶段没有意义，降级为SKIP，
    // 健康检查里已经记了失败，总体结论不会因此变好
    if !gateway_reachable {
        let reason = "网关不可达，跳过性能阶段".to_string();
        report.push_phase(
            "性能检查",
            vec![
                CheckVerdict::skip("网关基准延迟", reason.clone()),
                CheckVerdict::skip("网关并发延迟", reason.clone()),
            ],
        );
        report.push_phase("持续负载", vec![CheckVerdict::skip("网关持续负载", reason)]);
        return Ok(report);
    }

    // 阶段三: 性能检查，先串行基准再并发负载
    let single_set = sample(&client, &plan.performance, config.request_count, 1).await;
    let single_verdict = evaluate(
        "网关基准延迟",
        summarize(&single_set),
        single_set.error_rate(),
        &config.threshold,
        ProbeMode::SingleShot,
    );
    let load_set = sample(
        &client,
        &plan.performance,
        config.request_count,
        config.concurrency,
    )
    .await;
    let load_verdict = evaluate(
        "网关并发延迟",
        summarize(&load_set),
        load_set.error_rate(),
        &config.threshold,
        ProbeMode::ConcurrentLoad,
    );
    report.push_phase("性能检查", vec![single_verdict, load_verdict]);

    // 阶段四: 持续负载
    let duration = Duration::from_secs(config.sustained_secs);
    if !config.verbose {
        // 进度条按耗时推进
        let pb = ProgressBar::new(100);
        let test_start = Instant::now();
        let test_end = test_start + duration;
        let total_secs = config.sustained_secs as f64;
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_millis(300));
            while Instant::now() < test_end {
                interval.tick().await;
                let elapsed = Instant::now().duration_since(test_start).as_secs_f64();
                pb.set_position(((elapsed / total_secs) * 100.0) as u64);
            }
            pb.finish_and_clear();
        });
    }
    let sustained_result = run_for(&client, &plan.sustained, duration, config.verbose).await;
    let mut sustained_verdict = evaluate(
        "网关持续负载",
        summarize(&sustained_result.sample_set),
        sustained_result.error_rate,
        &config.threshold,
        ProbeMode::SustainedLoad,
    );
    if sustained_verdict.reason.is_none() {
        sustained_verdict = sustained_verdict.with_reason(format!(
            "吞吐 {:.1} req/s，错误率 {:.2}%，共{}个样本",
            sustained_result.throughput_rps,
            sustained_result.error_rate,
            sustained_result.sample_set.samples.len()
        ));
    }
    report.push_phase("持续负载", vec![sustained_verdict]);

    Ok(report)
}

/*
    单测
*/
