// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod error;
pub mod inventory_repo;
pub mod models;
pub mod routes;
pub mod worker;

/// Package version, baked in at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name, baked in at build time.
pub const NAME: &str = env!("CARGO_PKG_NAME");
