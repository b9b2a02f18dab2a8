mod count;
mod seed;

pub use count::{par_scan_support, scan_support, ScanResult};
pub use seed::seed_candidates;
