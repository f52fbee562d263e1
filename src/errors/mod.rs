pub mod types;

pub use types::CostscopeError;
