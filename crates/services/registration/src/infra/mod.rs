//! Infrastructure layer - storage engine access.

mod db;

pub use db::Database;
