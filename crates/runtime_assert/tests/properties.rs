// Copyright 2025 Irreducible Inc.

use proptest::{collection::vec, prelude::*};
use runtime_assert::{catch_failure, check, with_message, with_sink, DEFAULT_MESSAGE};

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn test_passing_check_never_writes(messages in vec(".*", 0..8)) {
		let mut sink = Vec::<u8>::new();
		let options = messages
			.iter()
			.map(|message| with_message(message.as_str()))
			.chain([with_sink(&mut sink)]);

		check(true, options);
		prop_assert!(sink.is_empty());
	}

	#[test]
	fn test_failing_check_uses_last_message(messages in vec(".*", 0..8)) {
		let expected = match messages.last() {
			Some(message) if !message.is_empty() => message.as_str(),
			_ => DEFAULT_MESSAGE,
		};

		let mut sink = Vec::<u8>::new();
		let failure = catch_failure(|| {
			let options = messages
				.iter()
				.map(|message| with_message(message.as_str()))
				.chain([with_sink(&mut sink)]);
			check(false, options)
		})
		.unwrap_err();

		prop_assert_eq!(failure.message(), expected);

		let written = String::from_utf8(sink).unwrap();
		prop_assert!(written.starts_with("panic! "));
		let expected_suffix = format!("]: {expected}\n");
		prop_assert!(written.ends_with(&expected_suffix));
	}
}
