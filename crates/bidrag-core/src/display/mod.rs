//! Display formatting for wizard output.
//!
//! Domain models stay free of presentation logic; this module provides the
//! markdown-producing Display implementations and wrapper types consumed by
//! the terminal renderer. Wrappers hold references where practical and all
//! output is markdown so the same text renders rich or plain.
//!
//! ## Module Organization
//!
//! - [`agreement`]: the rendered private agreement document
//! - [`collections`]: wrappers for issue lists and incomplete-step lists
//! - [`models`]: Display implementations for status reports and estimates
//! - [`status`]: operation confirmation messages
//! - [`datetime`]: date/time formatting utilities

pub mod agreement;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use agreement::Agreement;
pub use collections::{IncompleteSteps, Issues};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
