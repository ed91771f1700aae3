//! Domain building blocks shared by the database and API crates.

pub mod error;
pub mod lookup;
pub mod password;
pub mod types;
