pub mod args;
pub mod run_config;
pub mod sample;
pub mod summary;
pub mod target;
pub mod threshold;
pub mod verdict;
