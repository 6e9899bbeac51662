use crate::models::args::Args;
use crate::models::threshold::Threshold;

// 一次运行的完整上下文，构建一次后只读传递，不走全局变量
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub gateway_url: String,
    pub internal_url: String,
    pub frontend_url: String,
    pub vector_url: String,
    pub cache_url: String,
    pub request_count: usize,
    pub concurrency: usize,
    pub threshold: Threshold,
    pub sustained_secs: u64,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            gateway_url: args.gateway_url,
            internal_url: args.internal_url,
            frontend_url: args.frontend_url,
            vector_url: args.vector_url,
            cache_url: args.cache_url,
            request_count: args.requests,
            concurrency: args.concurrency,
            threshold: Threshold {
                max_p95_ms: args.latency_threshold,
                max_error_rate: args.max_error_rate,
                load_multiplier: args.load_multiplier,
            },
            sustained_secs: args.duration_secs,
            timeout_secs: args.timeout,
            verbose: args.verbose,
        }
    }
}
