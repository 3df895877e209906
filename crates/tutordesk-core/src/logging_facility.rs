//! Structured logging for TutorDesk
//!
//! Binaries call [`init`] once with a [`Profile`]. Library code never
//! initialises logging; it only emits events:
//!
//! - `DirectoryStore` wraps each operation in `log_op_start!` and then
//!   `log_op_end!` or `log_op_error!`
//! - the store crate adds `tracing::debug!` detail underneath
//!
//! ```rust
//! use tutordesk_core::logging_facility::{init, Profile};
//!
//! init(Profile::Test);
//! ```
//!
//! Tests that assert on events use [`init_test_capture`] instead of `init`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
