use crate::models::sample::SampleSet;
use crate::models::summary::StatisticsSummary;

/// 把一个样本集归约成统计值。失败样本不参与延迟统计，
/// 只进错误率；没有任何成功样本时返回全0的统计值，不报错。
pub fn summarize(set: &SampleSet) -> StatisticsSummary {
    let mut latencies = set.success_latencies();
    if latencies.is_empty() {
        return StatisticsSummary::default();
    }
    latencies.sort_unstable();
    let count = latencies.len() as u64;
    // 平均值统一用截断整除
    let mean_ms = latencies.iter().sum::<u64>() / count;
    StatisticsSummary {
        count,
        min_ms: latencies[0],
        max_ms: latencies[latencies.len() - 1],
        mean_ms,
        p95_ms: nearest_rank(&latencies, 95.0),
    }
}

// 最近秩法: rank = ceil(p/100 * n)，最小取1，按1起的序号取值
pub(crate) fn nearest_rank(sorted: &[u64], percentile: f64) -> u64 {
    let n = sorted.len();
    let rank = ((percentile / 100.0) * n as f64).ceil() as usize;
    let rank = rank.clamp(1, n);
    sorted[rank - 1]
}

/*
    单测
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::{ProbeOutcome, ProbeSample};
    use crate::models::target::ProbeMode;

    fn set_with_latencies(latencies: &[u64]) -> SampleSet {
        let mut set = SampleSet::new("统计测试", ProbeMode::SingleShot);
        for (i, l) in latencies.iter().enumerate() {
            set.samples.push(ProbeSample {
                ordinal: i as u64,
                latency_ms: *l,
                outcome: ProbeOutcome::Status(200),
                body: None,
                headers: None,
            });
        }
        set
    }

    #[test]
    fn test_p95_nearest_rank_on_1_to_100() {
        let latencies: Vec<u64> = (1..=100).collect();
        let summary = summarize(&set_with_latencies(&latencies));
        assert_eq!(summary.count, 100);
        assert_eq!(summary.min_ms, 1);
        assert_eq!(summary.max_ms, 100);
        // ceil(0.95*100)=95，升序第95个就是95
        assert_eq!(summary.p95_ms, 95);
    }

    #[test]
    fn test_summary_ordering_invariants() {
        let summary = summarize(&set_with_latencies(&[42, 7, 99, 13, 57, 8, 120, 3]));
        assert!(summary.min_ms <= summary.mean_ms);
        assert!(summary.mean_ms <= summary.max_ms);
        assert!(summary.min_ms <= summary.p95_ms);
        assert!(summary.p95_ms <= summary.max_ms);
    }

    #[test]
    fn test_empty_set_is_all_zero_not_fatal() {
        let set = SampleSet::new("空集合", ProbeMode::SingleShot);
        let summary = summarize(&set);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.p95_ms, 0);
        assert_eq!(set.error_rate(), 100.0);
    }

    #[test]
    fn test_failures_excluded_from_latency() {
        let mut set = set_with_latencies(&[10, 20, 30]);
        // 一个超时失败样本，延迟很大，但不应该进统计
        set.samples.push(ProbeSample {
            ordinal: 3,
            latency_ms: 5000,
            outcome: ProbeOutcome::ConnectionError("超时".to_string()),
            body: None,
            headers: None,
        });
        let summary = summarize(&set);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.max_ms, 30);
        assert_eq!(set.error_rate(), 25.0);
    }

    #[test]
    fn test_single_sample_rank_clamped_to_one() {
        let summary = summarize(&set_with_latencies(&[77]));
        assert_eq!(summary.p95_ms, 77);
        assert_eq!(summary.mean_ms, 77);
    }

    #[test]
    fn test_mean_uses_truncating_division() {
        // (1+2+4)/3 = 2.33.. 截断成2
        let summary = summarize(&set_with_latencies(&[1, 2, 4]));
        assert_eq!(summary.mean_ms, 2);
    }
}
