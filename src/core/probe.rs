use std::collections::HashMap;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use reqwest::{Client, Method};

use crate::models::sample::{ProbeOutcome, ProbeSample};
use crate::models::target::{CheckKind, Target};

pub const CORRELATION_HEADER: &str = "X-Correlation-ID";

// user_agent格式: 名称 版本 (系统; 系统版本)
pub fn user_agent() -> String {
    let info = os_info::get();
    let os_type = info.os_type();
    let os_version = info.version().to_string();
    let app_name = env!("CARGO_PKG_NAME");
    let app_version = env!("CARGO_PKG_VERSION");
    format!("{} {} ({}; {})", app_name, app_version, os_type, os_version)
}

// 构建http客户端，超时时间必须有限，防止一个挂死的连接拖住整个运行
pub fn build_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let timeout = if timeout_secs > 0 { timeout_secs } else { 5 };
    Client::builder()
        .timeout(Duration::from_secs(timeout))
        .user_agent(user_agent())
        .build()
        .context("构建带超时的http客户端失败")
}

/// 对目标发起一次探测。连接失败、超时、响应体读不出来都折算成
/// ConnectionError样本返回，绝不向调用方抛错，也不做任何重试。
/// 响应时间从发出请求计到整个响应体读完（或确定失败）为止。
pub async fn probe(client: &Client, target: &Target, ordinal: u64) -> ProbeSample {
    let method = match Method::from_str(&target.method.to_uppercase()) {
        Ok(m) => m,
        Err(_) => {
            return ProbeSample {
                ordinal,
                latency_ms: 0,
                outcome: ProbeOutcome::ConnectionError(format!(
                    "无效的请求方法: {}",
                    target.method
                )),
                body: None,
                headers: None,
            };
        }
    };
    let mut request = client.request(method, &target.url);
    // 透传校验需要带上调用方给定的关联ID
    if let CheckKind::CorrelationEcho {
        request_id: Some(id),
    } = &target.check
    {
        request = request.header(CORRELATION_HEADER, id);
    }
    let start = Instant::now();
    match request.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            // 响应头统一转小写键，后面的检查不用再关心大小写
            let headers = if target.wants_headers() {
                let mut map = HashMap::new();
                for (name, value) in response.headers() {
                    if let Ok(v) = value.to_str() {
                        map.insert(name.as_str().to_lowercase(), v.to_string());
                    }
                }
                Some(map)
            } else {
                None
            };
            // 为了量完整的响应时间，响应体总是读完，只在需要时保留
            let wants_body = target.wants_body();
            match response.bytes().await {
                Ok(bytes) => {
                    let latency_ms = start.elapsed().as_millis() as u64;
                    let body = if wants_body {
                        Some(String::from_utf8_lossy(&bytes).to_string())
                    } else {
                        None
                    };
                    ProbeSample {
                        ordinal,
                        latency_ms,
                        outcome: ProbeOutcome::Status(status),
                        body,
                        headers,
                    }
                }
                Err(e) => ProbeSample {
                    ordinal,
                    latency_ms: start.elapsed().as_millis() as u64,
                    outcome: ProbeOutcome::ConnectionError(format!("读取响应体失败: {}", e)),
                    body: None,
                    headers: None,
                },
            }
        }
        Err(e) => ProbeSample {
            ordinal,
            latency_ms: start.elapsed().as_millis() as u64,
            outcome: ProbeOutcome::ConnectionError(e.to_string()),
            body: None,
            headers: None,
        },
    }
}

/*
    单测
*/
