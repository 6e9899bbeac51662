use std::sync::Arc;

use futures::future::join_all;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::core::probe::probe;
use crate::models::sample::SampleSet;
use crate::models::target::{ProbeMode, Target};

/// 对同一个目标探测count次。concurrency为1时严格串行；
/// 大于1时把count平均拆给concurrency个独立worker并发执行，
/// 余数分给前几个worker。所有worker都结束后才返回，
/// 单个worker失败不影响其它worker，总样本数恒等于count。
pub async fn sample(
    client: &Client,
    target: &Target,
    count: usize,
    concurrency: usize,
) -> SampleSet {
    if concurrency <= 1 {
        // 串行采样
        let mut set = SampleSet::new(&target.name, ProbeMode::SingleShot);
        for i in 0..count {
            let sample = probe(client, target, i as u64).await;
            set.samples.push(sample);
        }
        return set;
    }

    // 结果容器，worker之间只共享这一个追加用的集合
    let results = Arc::new(Mutex::new(Vec::with_capacity(count)));
    let mut handles = Vec::new();
    // 平均分配，余数给前面的worker
    let base = count / concurrency;
    let remainder = count % concurrency;
    let mut next_ordinal: u64 = 0;
    for worker in 0..concurrency {
        let quota = base + if worker < remainder { 1 } else { 0 };
        if quota == 0 {
            continue;
        }
        // 每个worker需要的副本
        let client_clone = client.clone();
        let target_clone = target.clone();
        let results_clone = results.clone();
        let start_ordinal = next_ordinal;
        next_ordinal += quota as u64;
        let handle = tokio::spawn(async move {
            for i in 0..quota {
                let sample = probe(&client_clone, &target_clone, start_ordinal + i as u64).await;
                results_clone.lock().await.push(sample);
            }
        });
        handles.push(handle);
    }

    // 等所有worker收尾，没收完之前绝不返回
    for joined in join_all(handles).await {
        if let Err(e) = joined {
            eprintln!("采样worker异常退出:{:?}", e);
        }
    }

    let mut set = SampleSet::new(&target.name, ProbeMode::ConcurrentLoad);
    set.samples = results.lock().await.drain(..).collect();
    set
}

/*
    单测
*/
