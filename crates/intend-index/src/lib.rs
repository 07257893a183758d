// SQLite session store
// Rows carry a JSON payload; only the lookup keys are real columns

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::IndexStats;
pub use schema::SCHEMA_VERSION;
