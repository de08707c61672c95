pub mod particles;
pub mod problem_selector;
pub mod units;
pub mod utility;
