//! Request extractors that act as middleware.
//!
//! - [`caller::Caller`] -- the calling user, taken from the `userId` header.

pub mod caller;
