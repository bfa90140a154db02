pub mod config;
pub mod http;
pub mod metrics_server;
pub mod observability;
pub mod seed;
pub mod store;
pub mod validate;

pub use http::router;
pub use store::{ReadingStore, SqliteReadingStore};
