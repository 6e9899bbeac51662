pub mod check_targets;
pub mod checks;
pub mod probe;
pub mod runner;
pub mod sampler;
pub mod show_report;
pub mod stats;
pub mod status_share;
pub mod sustained;
pub mod threshold;
