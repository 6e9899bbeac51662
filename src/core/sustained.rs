use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::interval;

use crate::core::probe::probe;
use crate::core::status_share::{StatusSnapshot, STATUS_QUEUE};
use crate::models::sample::SampleSet;
use crate::models::target::{ProbeMode, Target};

#[derive(Clone, Debug, Serialize)]
pub struct SustainedResult {
    pub sample_set: SampleSet,
    pub elapsed_secs: f64,
    // 成功数/实际耗时（秒）
    pub throughput_rps: f64,
    // 失败数/总数，百分比
    pub error_rate: f64,
}

/// 在固定的墙钟时长内持续探测，不限定次数，到点即停。
/// 每次迭代就是一次probe调用，样本总数随环境抖动，只能按区间断言。
pub async fn run_for(
    client: &Client,
    target: &Target,
    duration: Duration,
    verbose: bool,
) -> SustainedResult {
    let test_start = Instant::now();
    let test_end = test_start + duration;
    // 请求总数统计
    let total_requests = Arc::new(Mutex::new(0u64));
    // 成功数据统计
    let successful_requests = Arc::new(Mutex::new(0u64));

    // 每秒共享一次运行状态
    {
        let total_clone = total_requests.clone();
        let successful_clone = successful_requests.clone();
        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(1));
            while Instant::now() < test_end {
                interval.tick().await;
                let elapsed = (Instant::now() - test_start).as_secs_f64();
                let total = *total_clone.lock().await;
                let success = *successful_clone.lock().await;
                let error_rate = if total == 0 {
                    0.0
                } else {
                    (total - success) as f64 / total as f64 * 100.0
                };
                let snapshot = StatusSnapshot {
                    elapsed_secs: elapsed,
                    total_requests: total,
                    successful_requests: success,
                    error_rate,
                    rps: success as f64 / elapsed,
                };
                let mut queue = STATUS_QUEUE.lock();
                // 队列里只留最新一条
                if queue.len() == 1 {
                    queue.pop_front();
                }
                queue.push_back(snapshot);
            }
        });
    }

    let mut set = SampleSet::new(&target.name, ProbeMode::SustainedLoad);
    let mut ordinal: u64 = 0;
    while Instant::now() < test_end {
        *total_requests.lock().await += 1;
        let sample = probe(client, target, ordinal).await;
        if sample.is_success() {
            *successful_requests.lock().await += 1;
        } else if verbose {
            eprintln!("持续负载第{}次请求失败: {:?}", ordinal, sample.outcome);
        }
        set.samples.push(sample);
        ordinal += 1;
    }

    let elapsed_secs = test_start.elapsed().as_secs_f64();
    let success = set.success_count();
    let error_rate = set.error_rate();
    SustainedResult {
        elapsed_secs,
        throughput_rps: success as f64 / elapsed_secs,
        error_rate,
        sample_set: set,
    }
}

/*
    单测
*/
