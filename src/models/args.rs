use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 网关地址
    #[arg(long, env = "GATEWAY_URL", default_value = "http://localhost:8080")]
    pub gateway_url: String,

    /// 内部服务直连地址，按架构约束应当不可达
    #[arg(long, env = "INTERNAL_URL", default_value = "http://localhost:8000")]
    pub internal_url: String,

    /// 前端地址
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,

    /// 向量存储地址（可选依赖）
    #[arg(long, env = "VECTOR_URL", default_value = "http://localhost:6333")]
    pub vector_url: String,

    /// 缓存服务地址（可选依赖）
    #[arg(long, env = "CACHE_URL", default_value = "http://localhost:8091")]
    pub cache_url: String,

    /// 性能检查的请求数
    #[arg(short, long, env = "REQUEST_COUNT", default_value_t = 100)]
    pub requests: usize,

    /// 并发数
    #[arg(short, long, env = "CONCURRENCY", default_value_t = 10)]
    pub concurrency: usize,

    /// p95延迟阈值（毫秒）
    #[arg(long, env = "LATENCY_THRESHOLD_MS", default_value_t = 500)]
    pub latency_threshold: u64,

    /// 错误率阈值（百分比）
    #[arg(long, env = "MAX_ERROR_RATE", default_value_t = 1.0)]
    pub max_error_rate: f64,

    /// 并发负载下p95阈值的放宽倍数
    #[arg(long, env = "LOAD_MULTIPLIER", default_value_t = 1.5)]
    pub load_multiplier: f64,

    /// 持续负载时长（秒）
    #[arg(short, long, env = "SUSTAINED_DURATION_SECS", default_value_t = 10)]
    pub duration_secs: u64,

    /// 单次请求超时时间（秒）
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// 打印详情
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
