use std::collections::HashSet;
use std::str::FromStr;

use anyhow::anyhow;
use reqwest::{Method, Url};

use crate::models::target::Target;

// 配置错误是唯一的致命错误类型，必须在发出任何探测之前拦下来
pub(crate) fn check_targets(
    targets: &[&Target],
    count: usize,
    concurrency: usize,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Err(anyhow!("没有配置任何检查目标"));
    }
    if count == 0 {
        return Err(anyhow!("请求数必须大于0"));
    }
    if concurrency == 0 {
        return Err(anyhow!("并发数必须大于0"));
    }
    let mut names_set = HashSet::new();
    for target in targets {
        if target.name.is_empty() {
            return Err(anyhow!("目标名称不能为空"));
        }
        if !names_set.insert(target.name.clone()) {
            return Err(anyhow!("重复的目标名称: {}", target.name));
        }
        Url::parse(&target.url).map_err(|e| anyhow!("无效的URL {}: {}", target.url, e))?;
        Method::from_str(&target.method.to_uppercase())
            .map_err(|_| anyhow!("无效的请求方法: {}", target.method))?;
    }
    Ok(())
}

/*
    单测
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::target::CheckKind;

    fn target(name: &str, url: &str) -> Target {
        Target {
            name: name.to_string(),
            url: url.to_string(),
            method: "GET".to_string(),
            check: CheckKind::EndpointUp {
                expected_status: 200,
            },
            body_substrings: None,
            optional: false,
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let a = target("网关", "http://localhost:8080/health");
        let b = target("网关", "http://localhost:8080/health");
        assert!(check_targets(&[&a, &b], 10, 2).is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let a = target("坏地址", "不是url");
        assert!(check_targets(&[&a], 10, 2).is_err());
    }

    #[test]
    fn test_zero_count_or_concurrency_rejected() {
        let a = target("网关", "http://localhost:8080/health");
        assert!(check_targets(&[&a], 0, 2).is_err());
        assert!(check_targets(&[&a], 10, 0).is_err());
        assert!(check_targets(&[&a], 10, 2).is_ok());
    }

    #[test]
    fn test_empty_plan_rejected() {
        assert!(check_targets(&[], 10, 2).is_err());
    }
}
