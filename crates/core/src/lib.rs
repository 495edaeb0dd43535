//! Domain types and pure business rules for the car registry.
//!
//! Nothing in this crate touches the database: the colour catalog is passed
//! in as a snapshot so validation stays deterministic and easy to test.

pub mod car;
pub mod colour;
pub mod error;
pub mod types;
pub mod validation;
