use jsonpath_lib::select;
use serde_json::Value;

use crate::core::probe::CORRELATION_HEADER;
use crate::models::sample::{ProbeOutcome, ProbeSample};
use crate::models::target::{CheckKind, Target};
use crate::models::verdict::CheckVerdict;

/// 按检查类型对单次探测结果下结论。四种类型各有各的规则，
/// 在这里显式分发，不靠异常控制流。
pub fn evaluate_check(target: &Target, sample: &ProbeSample) -> CheckVerdict {
    match &target.check {
        CheckKind::NegativeReachability => negative_reachability(target, sample),
        CheckKind::EndpointUp { expected_status } => match &sample.outcome {
            ProbeOutcome::ConnectionError(e) => unreachable_verdict(target, e),
            ProbeOutcome::Status(code) => endpoint_up(target, *expected_status, *code, sample),
        },
        CheckKind::ComponentStatus {
            component,
            expected,
        } => match &sample.outcome {
            ProbeOutcome::ConnectionError(e) => unreachable_verdict(target, e),
            ProbeOutcome::Status(_) => component_status(target, component, expected, sample),
        },
        CheckKind::CorrelationEcho { request_id } => match &sample.outcome {
            ProbeOutcome::ConnectionError(e) => unreachable_verdict(target, e),
            ProbeOutcome::Status(_) => correlation_echo(target, request_id.as_deref(), sample),
        },
    }
}

// 连不上: 可选依赖降级为SKIP，必选依赖算失败
fn unreachable_verdict(target: &Target, error: &str) -> CheckVerdict {
    if target.optional {
        CheckVerdict::skip(&target.name, format!("可选依赖不可达: {}", error))
    } else {
        CheckVerdict::fail(&target.name, format!("连接失败: {}", error))
    }
}

// 内部服务必须连不上才算通过，连上了就是架构边界被打穿
fn negative_reachability(target: &Target, sample: &ProbeSample) -> CheckVerdict {
    match &sample.outcome {
        ProbeOutcome::ConnectionError(_) => {
            CheckVerdict::pass(&target.name).with_reason("内部服务不可直连，边界符合预期".to_string())
        }
        ProbeOutcome::Status(code) => CheckVerdict::fail(
            &target.name,
            format!("安全边界违规: 内部服务可被外部直接访问(状态码 {})", code),
        ),
    }
}

fn endpoint_up(
    target: &Target,
    expected_status: u16,
    actual: u16,
    sample: &ProbeSample,
) -> CheckVerdict {
    if actual != expected_status {
        return CheckVerdict::fail(
            &target.name,
            format!("预期状态码 {} 实际 {}", expected_status, actual),
        );
    }
    // 响应体关键字校验
    if let Some(substrings) = &target.body_substrings {
        let body = sample.body.as_deref().unwrap_or("");
        for needle in substrings {
            if !body.contains(needle.as_str()) {
                return CheckVerdict::fail(
                    &target.name,
                    format!("响应体缺少关键字 {:?}", needle),
                );
            }
        }
    }
    CheckVerdict::pass(&target.name)
}

// 从复合健康信息里取出具名组件的子状态比对，组件缺失算失败不算跳过
fn component_status(
    target: &Target,
    component: &str,
    expected: &str,
    sample: &ProbeSample,
) -> CheckVerdict {
    let body = match sample.body.as_deref() {
        Some(b) if !b.is_empty() => b,
        _ => {
            return CheckVerdict::fail(&target.name, "健康接口响应体为空".to_string());
        }
    };
    let json_value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            return CheckVerdict::fail(&target.name, format!("健康接口响应体不是json: {}", e));
        }
    };
    let path = format!("$.components.{}.status", component);
    match select(&json_value, &path) {
        Ok(results) => {
            if results.is_empty() {
                return CheckVerdict::fail(
                    &target.name,
                    format!("健康信息中缺少组件 {:?}", component),
                );
            }
            if results.len() > 1 {
                return CheckVerdict::fail(
                    &target.name,
                    format!("组件 {:?} 匹配到多个状态，无法判定", component),
                );
            }
            let actual = results[0];
            if actual.as_str() == Some(expected) {
                CheckVerdict::pass(&target.name)
            } else {
                CheckVerdict::fail(
                    &target.name,
                    format!("组件 {:?} 状态 {} 预期 {:?}", component, actual, expected),
                )
            }
        }
        Err(e) => CheckVerdict::fail(&target.name, format!("JSONPath查询失败: {}", e)),
    }
}

// 关联ID两种情况: 没给ID时要求网关生成一个非空ID，
// 给了ID时要求原样透传回来，替换掉也算失败
fn correlation_echo(
    target: &Target,
    request_id: Option<&str>,
    sample: &ProbeSample,
) -> CheckVerdict {
    let header = sample
        .headers
        .as_ref()
        .and_then(|h| h.get(&CORRELATION_HEADER.to_lowercase()))
        .map(|v| v.as_str())
        .unwrap_or("");
    match request_id {
        None => {
            if header.is_empty() {
                CheckVerdict::fail(
                    &target.name,
                    format!("响应缺少 {} 头，网关未生成关联ID", CORRELATION_HEADER),
                )
            } else {
                CheckVerdict::pass(&target.name)
            }
        }
        Some(expected) => {
            if header == expected {
                CheckVerdict::pass(&target.name)
            } else {
                CheckVerdict::fail(
                    &target.name,
                    format!("关联ID未透传: 预期 {:?} 实际 {:?}", expected, header),
                )
            }
        }
    }
}

/*
    单测
*/
