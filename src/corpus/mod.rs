pub mod filter;
pub mod scanner;

pub use filter::matches_discipline;
pub use scanner::collect_matching;
