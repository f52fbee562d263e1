pub mod types;

pub use types::ServerConfig;
