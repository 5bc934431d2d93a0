// Member JDBC - Core Library
// Connection provider + member repository over raw, parameterized SQL

pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod member;
pub mod repository;

// Re-export commonly used types
pub use config::DbConfig;
pub use connection::{close, ConnectionProvider, Release};
pub use error::{RepositoryError, Result};
pub use logging::init_tracing;
pub use member::Member;
pub use repository::MemberRepository;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
