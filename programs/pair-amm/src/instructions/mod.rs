pub mod add_liquidity;
pub mod initialize;
pub mod remove_liquidity;
pub mod swap;

// Re-export everything from each module including hidden generated types
pub use add_liquidity::*;
pub use initialize::*;
pub use remove_liquidity::*;
pub use swap::*;
