use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::VecDeque;

// 持续负载阶段每秒一条的运行快照
#[derive(Clone, Debug)]
pub struct StatusSnapshot {
    pub elapsed_secs: f64,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub error_rate: f64,
    pub rps: f64,
}

// 定义一个全局的队列
lazy_static! {
    pub static ref STATUS_QUEUE: Mutex<VecDeque<StatusSnapshot>> = Mutex::new(VecDeque::new());
}
