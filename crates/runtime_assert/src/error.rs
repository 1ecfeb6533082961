// Copyright 2025 Irreducible Inc.

use std::{
	any::Any,
	cell::Cell,
	panic::{self, AssertUnwindSafe},
};

thread_local! {
	/// Set by [`crate::fail`] right before it panics, taken by [`catch_failure`].
	static FAILURE_RAISED: Cell<bool> = const { Cell::new(false) };
}

pub(crate) fn mark_failure_raised() {
	FAILURE_RAISED.with(|raised| raised.set(true));
}

fn take_failure_raised() -> bool {
	FAILURE_RAISED.with(|raised| raised.replace(false))
}

/// A failed check, recovered at a [`catch_failure`] boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
	message: String,
}

impl AssertionFailure {
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Extracts the message from a panic payload, handing back payloads that don't carry one.
	///
	/// This only decodes the payload. Whether the panic came from a failed check is tracked by
	/// [`catch_failure`].
	pub fn from_panic_payload(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
		let payload = match payload.downcast::<String>() {
			Ok(message) => return Ok(Self { message: *message }),
			Err(payload) => payload,
		};
		match payload.downcast::<&'static str>() {
			Ok(message) => Ok(Self {
				message: (*message).to_owned(),
			}),
			Err(payload) => Err(payload),
		}
	}
}

/// Runs `f`, converting a failed check inside it into an [`AssertionFailure`].
///
/// Only panics raised by a failing check are recovered. Any other panic, such as an out of
/// bounds index or a failed `expect`, keeps unwinding. `f` is run under [`AssertUnwindSafe`]:
/// state it mutated before the failure may be observed half-updated afterwards.
pub fn catch_failure<R>(f: impl FnOnce() -> R) -> Result<R, AssertionFailure> {
	// A failure swallowed by some other `catch_unwind` may have left the flag set.
	take_failure_raised();

	panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
		if !take_failure_raised() {
			panic::resume_unwind(payload);
		}
		AssertionFailure::from_panic_payload(payload)
			.unwrap_or_else(|payload| panic::resume_unwind(payload))
	})
}
