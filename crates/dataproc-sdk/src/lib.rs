//! # Data Processor SDK
//!
//! Typed client for the Data Processor HTTP service.
//!
//! The SDK provides:
//!
//! * [`ProcessClient`] — submits text to `POST /api/process` and probes
//!   `GET /api/health`.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! Wire types from [`dataproc_models`] are re-exported for convenience.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use dataproc_sdk::ProcessClient;
//!
//! # async fn run() -> Result<(), dataproc_sdk::SdkError> {
//! let client = ProcessClient::new("http://localhost:8080")?;
//! let response = client.process("hello world").await?;
//! println!("{} ({})", response.data, response.timestamp);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::ProcessClient;
pub use error::SdkError;

pub use dataproc_models::{ProcessRequest, ProcessResponse};
