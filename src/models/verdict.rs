use serde::{Deserialize, Serialize};

use crate::models::summary::StatisticsSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictState {
    Pass,
    Fail,
    Skip,
}

// 单项检查的结论
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckVerdict {
    pub name: String,
    pub state: VerdictState,
    pub summary: Option<StatisticsSummary>,
    pub reason: Option<String>,
}

impl CheckVerdict {
    pub fn pass(name: &str) -> Self {
        CheckVerdict {
            name: name.to_string(),
            state: VerdictState::Pass,
            summary: None,
            reason: None,
        }
    }

    pub fn fail(name: &str, reason: String) -> Self {
        CheckVerdict {
            name: name.to_string(),
            state: VerdictState::Fail,
            summary: None,
            reason: Some(reason),
        }
    }

    pub fn skip(name: &str, reason: String) -> Self {
        CheckVerdict {
            name: name.to_string(),
            state: VerdictState::Skip,
            summary: None,
            reason: Some(reason),
        }
    }

    pub fn with_summary(mut self, summary: StatisticsSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_reason(mut self, reason: String) -> Self {
        self.reason = Some(reason);
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseReport {
    pub name: String,
    pub verdicts: Vec<CheckVerdict>,
}

// 一次完整运行的报告，所有检查跑完后定稿
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub phases: Vec<PhaseReport>,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub aggregate_pass: bool,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport {
            phases: Vec::new(),
            passed: 0,
            failed: 0,
            skipped: 0,
            aggregate_pass: true,
        }
    }

    // 记入一个阶段的全部结论，SKIP不影响总体判定
    pub fn push_phase(&mut self, name: &str, verdicts: Vec<CheckVerdict>) {
        for verdict in &verdicts {
            match verdict.state {
                VerdictState::Pass => self.passed += 1,
                VerdictState::Fail => {
                    self.failed += 1;
                    self.aggregate_pass = false;
                }
                VerdictState::Skip => self.skipped += 1,
            }
        }
        self.phases.push(PhaseReport {
            name: name.to_string(),
            verdicts,
        });
    }
}

impl Default for RunReport {
    fn default() -> Self {
        RunReport::new()
    }
}
