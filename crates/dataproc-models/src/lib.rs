#![deny(missing_docs)]

//! # Data Processor Models
//!
//! Wire types shared by the Data Processor backend and its clients.
//!
//! ## Exchange
//!
//! ```text
//! POST /api/process   ProcessRequest  { "data": ... }
//!                  ←  ProcessResponse { "message", "data", "timestamp" }
//! GET  /api/health                    "Backend is running!"
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`process`] | Request/response DTOs, input validation, route paths |
//! | [`error`] | [`ModelError`] |

pub mod error;
pub mod process;

pub use error::*;
pub use process::*;
