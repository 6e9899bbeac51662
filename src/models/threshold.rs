use serde::{Deserialize, Serialize};

// 通过/失败的判定阈值，属于配置而不是测量结果
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Threshold {
    pub max_p95_ms: u64,
    // 百分比
    pub max_error_rate: f64,
    // 并发负载下对p95阈值的放宽倍数
    pub load_multiplier: f64,
}
