use serde::{Deserialize, Serialize};

// 探测模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeMode {
    SingleShot,
    ConcurrentLoad,
    SustainedLoad,
}

// 检查类型，每种类型有自己的判定规则
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CheckKind {
    // 端点存活: 状态码必须和预期完全一致
    EndpointUp { expected_status: u16 },
    // 依赖组件: 从健康接口的json中取出组件子状态并比对
    ComponentStatus { component: String, expected: String },
    // 关联ID: request_id为None时校验网关生成，Some时校验原样透传
    CorrelationEcho { request_id: Option<String> },
    // 边界校验: 内部服务必须不可直连，连不上才算通过
    NegativeReachability,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub url: String,
    pub method: String,
    pub check: CheckKind,
    // 响应体必须包含的关键字
    pub body_substrings: Option<Vec<String>>,
    // 可选依赖连不上时降级为SKIP而不是FAIL
    pub optional: bool,
    pub timeout_secs: u64,
}

impl Target {
    // 判定时是否需要保留响应体
    pub fn wants_body(&self) -> bool {
        matches!(self.check, CheckKind::ComponentStatus { .. }) || self.body_substrings.is_some()
    }

    // 判定时是否需要保留响应头
    pub fn wants_headers(&self) -> bool {
        matches!(self.check, CheckKind::CorrelationEcho { .. })
    }
}
