//! Pure domain rules for the flashcards backend.
//!
//! Nothing in this crate performs I/O. The DB and API layers build on the
//! error taxonomy, id types, pagination and validation helpers defined here.

pub mod error;
pub mod pagination;
pub mod review;
pub mod types;
pub mod validation;
