pub mod config;
pub mod math;
pub mod pool;

pub use config::*;
pub use math::*;
pub use pool::*;
