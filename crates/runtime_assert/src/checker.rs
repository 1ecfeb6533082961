// Copyright 2025 Irreducible Inc.

use crate::{
	call_site::CallSite,
	config::{AssertOption, AssertionConfig},
	report::report,
};

/// Works like a traditional `assert`: panics if `condition` is false.
///
/// `options` are applied in order to a fresh [`AssertionConfig`]. On failure the configured sink,
/// if any, receives one line naming the caller and the message, then the thread panics with the
/// message as payload. The default message is [`crate::DEFAULT_MESSAGE`].
///
/// ```should_panic
/// use runtime_assert::{check, with_message};
///
/// let x = -1;
/// check(x > 0, [with_message("x must be positive")]);
/// ```
#[track_caller]
pub fn check<'a>(condition: bool, options: impl IntoIterator<Item = AssertOption<'a>>) {
	let config = AssertionConfig::from_options(options);
	if !condition {
		fail(config, CallSite::caller());
	}
}

/// Same as [`check`], taking an already built config.
#[track_caller]
pub fn check_with(condition: bool, config: AssertionConfig<'_>) {
	if !condition {
		fail(config, CallSite::caller());
	}
}

/// Reports the failure at `call_site` and panics with the resolved message.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(mut config: AssertionConfig<'_>, call_site: CallSite) -> ! {
	report(&mut config, &call_site);

	let message = config.into_message();
	crate::error::mark_failure_raised();
	panic!("{message}")
}

/// Macro form of [`check`](fn@crate::check).
///
/// Options are passed as trailing arguments. The enclosing function is resolved at compile time,
/// so the reported call site never falls back to [`crate::call_site::UNKNOWN_FUNCTION`].
///
/// ```
/// use runtime_assert::{check, with_message, with_sink};
///
/// let mut log = Vec::<u8>::new();
/// check!(1 + 1 == 2);
/// check!(true, with_message("math is broken"), with_sink(&mut log));
/// assert!(log.is_empty());
/// ```
#[macro_export]
macro_rules! check {
	($cond:expr $(,)?) => {{
		let condition: bool = $cond;
		if !condition {
			$crate::fail(
				$crate::AssertionConfig::new(),
				$crate::CallSite::new($crate::function_name!(), ::core::file!(), ::core::line!()),
			);
		}
	}};
	($cond:expr, $($option:expr),+ $(,)?) => {{
		let condition: bool = $cond;
		let config = $crate::AssertionConfig::from_options([$($option),+]);
		if !condition {
			$crate::fail(
				config,
				$crate::CallSite::new($crate::function_name!(), ::core::file!(), ::core::line!()),
			);
		}
	}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{with_message, with_sink, DEFAULT_MESSAGE};

	#[test]
	fn test_check_true_is_noop() {
		let mut sink = Vec::<u8>::new();
		check(true, []);
		check(true, [with_message("unused"), with_sink(&mut sink)]);
		check_with(true, AssertionConfig::new().with_sink(&mut sink));
		assert!(sink.is_empty());
	}

	#[test]
	#[should_panic(expected = "assertion failed")]
	fn test_check_false_default_message() {
		check(false, []);
	}

	#[test]
	#[should_panic(expected = "x must be positive")]
	fn test_check_false_custom_message() {
		check(false, [with_message("x must be positive")]);
	}

	#[test]
	#[should_panic(expected = "B")]
	fn test_check_last_message_wins() {
		check(false, [with_message("A"), with_message("B")]);
	}

	#[test]
	#[should_panic(expected = "from config")]
	fn test_check_with_config() {
		check_with(false, AssertionConfig::new().with_message("from config"));
	}

	#[test]
	fn test_fail_payload_is_message() {
		let payload = std::panic::catch_unwind(|| {
			fail(AssertionConfig::new(), CallSite::new("f", "f.rs", 1));
		})
		.unwrap_err();

		assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some(DEFAULT_MESSAGE));
	}
}
