// Copyright 2025 Irreducible Inc.

//! Runtime assertions that halt the current thread with a descriptive message.
//!
//! A check takes a condition and a list of options. When the condition is false the optional sink
//! receives a single line
//!
//! ```text
//! panic! <function>[<file>:<line>]: <message>
//! ```
//!
//! naming the site that invoked the check, an `ERROR` event is emitted through `tracing`, and the
//! thread panics with the message as payload. The panic can be intercepted with
//! [`catch_failure`].

pub mod call_site;
mod checker;
pub mod config;
pub mod error;
pub mod report;

pub use call_site::CallSite;
pub use checker::{check, check_with, fail};
pub use config::{with_message, with_sink, AssertOption, AssertionConfig, DEFAULT_MESSAGE};
pub use error::{catch_failure, AssertionFailure};
