use serde::{Deserialize, Serialize};

// 由一组成功样本归约出来的统计值，空集合时全部为0
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub count: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    pub mean_ms: u64,
    pub p95_ms: u64,
}
