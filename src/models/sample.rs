use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::target::ProbeMode;

// 单次探测的结果: 拿到状态码，或者根本没有拿到响应
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ProbeOutcome {
    Status(u16),
    ConnectionError(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProbeSample {
    pub ordinal: u64,
    pub latency_ms: u64,
    pub outcome: ProbeOutcome,
    // 只有判定需要时才保留
    pub body: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl ProbeSample {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Status(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::Status(code) => Some(code),
            ProbeOutcome::ConnectionError(_) => None,
        }
    }
}

// 同一个目标、同一种模式下采集到的全部样本
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SampleSet {
    pub target_name: String,
    pub mode: ProbeMode,
    pub samples: Vec<ProbeSample>,
}

impl SampleSet {
    pub fn new(target_name: &str, mode: ProbeMode) -> Self {
        SampleSet {
            target_name: target_name.to_string(),
            mode,
            samples: Vec::new(),
        }
    }

    // 成功样本的响应时间，失败样本只参与错误率
    pub fn success_latencies(&self) -> Vec<u64> {
        self.samples
            .iter()
            .filter(|s| s.is_success())
            .map(|s| s.latency_ms)
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.samples.len() - self.success_count()
    }

    // 错误率（百分比），空集合视为100%
    pub fn error_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 100.0;
        }
        self.failure_count() as f64 / self.samples.len() as f64 * 100.0
    }
}
