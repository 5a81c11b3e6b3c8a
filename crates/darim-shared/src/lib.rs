//! # Darim Shared
//!
//! Wire types exchanged with the blog server.
//! Compiled for both the native client and a WASM front-end.

pub mod dto;
pub mod response;

pub use response::DataResponse;
