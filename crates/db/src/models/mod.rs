//! Row structs and response shapes.
//!
//! Each submodule contains a `FromRow` struct matching the query result and,
//! where it differs, the `Serialize` shape returned to clients.

pub mod car;
pub mod colour;
