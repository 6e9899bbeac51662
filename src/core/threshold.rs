use crate::models::summary::StatisticsSummary;
use crate::models::target::ProbeMode;
use crate::models::threshold::Threshold;
use crate::models::verdict::CheckVerdict;

/// 用阈值给统计值打分。判定是严格小于: p95等于阈值算失败。
/// 并发负载模式下p95阈值先乘以放宽倍数再比较，单发模式用原始阈值。
/// 没有任何成功样本时无法主张延迟指标，直接判失败。
pub fn evaluate(
    name: &str,
    summary: StatisticsSummary,
    error_rate: f64,
    threshold: &Threshold,
    mode: ProbeMode,
) -> CheckVerdict {
    let limit_ms = match mode {
        ProbeMode::ConcurrentLoad => {
            (threshold.max_p95_ms as f64 * threshold.load_multiplier) as u64
        }
        _ => threshold.max_p95_ms,
    };
    if summary.count == 0 {
        return CheckVerdict::fail(name, "无成功样本，错误率100%，无法评估延迟指标".to_string())
            .with_summary(summary);
    }
    if summary.p95_ms >= limit_ms {
        return CheckVerdict::fail(
            name,
            format!("p95 {}ms 达到或超过阈值 {}ms", summary.p95_ms, limit_ms),
        )
        .with_summary(summary);
    }
    if error_rate >= threshold.max_error_rate {
        return CheckVerdict::fail(
            name,
            format!(
                "错误率 {:.2}% 达到或超过阈值 {:.2}%",
                error_rate, threshold.max_error_rate
            ),
        )
        .with_summary(summary);
    }
    CheckVerdict::pass(name).with_summary(summary)
}

/*
    单测
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::verdict::VerdictState;

    fn summary_with_p95(p95: u64) -> StatisticsSummary {
        StatisticsSummary {
            count: 100,
            min_ms: 1,
            max_ms: p95 + 10,
            mean_ms: p95 / 2,
            p95_ms: p95,
        }
    }

    fn threshold() -> Threshold {
        Threshold {
            max_p95_ms: 500,
            max_error_rate: 1.0,
            load_multiplier: 1.5,
        }
    }

    #[test]
    fn test_tie_on_p95_fails() {
        let verdict = evaluate(
            "边界",
            summary_with_p95(500),
            0.0,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Fail);
    }

    #[test]
    fn test_one_below_threshold_passes() {
        let verdict = evaluate(
            "边界",
            summary_with_p95(499),
            0.0,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Pass);
    }

    #[test]
    fn test_load_multiplier_only_under_concurrency() {
        // 并发模式下阈值放宽到750
        let verdict = evaluate(
            "并发",
            summary_with_p95(700),
            0.0,
            &threshold(),
            ProbeMode::ConcurrentLoad,
        );
        assert_eq!(verdict.state, VerdictState::Pass);
        // 单发模式不放宽
        let verdict = evaluate(
            "单发",
            summary_with_p95(700),
            0.0,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Fail);
        // 放宽后的边界同样是严格小于
        let verdict = evaluate(
            "并发边界",
            summary_with_p95(750),
            0.0,
            &threshold(),
            ProbeMode::ConcurrentLoad,
        );
        assert_eq!(verdict.state, VerdictState::Fail);
    }

    #[test]
    fn test_error_rate_tie_fails() {
        let verdict = evaluate(
            "错误率",
            summary_with_p95(100),
            1.0,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Fail);
        let verdict = evaluate(
            "错误率",
            summary_with_p95(100),
            0.99,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Pass);
    }

    #[test]
    fn test_no_samples_fails_deterministically() {
        let verdict = evaluate(
            "空集合",
            StatisticsSummary::default(),
            100.0,
            &threshold(),
            ProbeMode::SingleShot,
        );
        assert_eq!(verdict.state, VerdictState::Fail);
        assert!(verdict.reason.is_some());
    }
}
