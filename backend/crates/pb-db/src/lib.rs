pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{DEFAULT_MAX_CONNECTIONS, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::project_store::ProjectStore;
