// Copyright 2025 Irreducible Inc.

use std::{borrow::Cow, fmt, io::Write};

/// Message reported when a failing check was given no message, or an empty one.
pub const DEFAULT_MESSAGE: &str = "assertion failed";

/// Configuration of a single check.
///
/// A fresh config is built for every check and dropped as soon as the check completes. The sink
/// is only borrowed: the caller keeps ownership and the checker never flushes or closes it.
#[derive(Default)]
pub struct AssertionConfig<'a> {
	pub(crate) message: Cow<'a, str>,
	pub(crate) sink: Option<&'a mut dyn Write>,
}

impl<'a> AssertionConfig<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a config by applying `options` in order, later options overriding earlier ones.
	pub fn from_options(options: impl IntoIterator<Item = AssertOption<'a>>) -> Self {
		let mut config = Self::new();
		for option in options {
			config.apply(option);
		}
		config
	}

	pub fn apply(&mut self, option: AssertOption<'a>) {
		match option {
			AssertOption::Message(message) => self.message = message,
			AssertOption::Sink(sink) => self.sink = Some(sink),
		}
	}

	pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
		self.apply(with_message(message));
		self
	}

	pub fn with_sink(mut self, sink: &'a mut dyn Write) -> Self {
		self.apply(with_sink(sink));
		self
	}

	/// The configured message, empty if none was set.
	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn has_sink(&self) -> bool {
		self.sink.is_some()
	}

	pub(crate) fn resolve_message(&mut self) {
		if self.message.is_empty() {
			self.message = Cow::Borrowed(DEFAULT_MESSAGE);
		}
	}

	pub(crate) fn into_message(self) -> Cow<'a, str> {
		self.message
	}
}

impl fmt::Debug for AssertionConfig<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AssertionConfig")
			.field("message", &self.message)
			.field("sink", &self.sink.as_ref().map(|_| ".."))
			.finish()
	}
}

/// A single mutation of an [`AssertionConfig`].
pub enum AssertOption<'a> {
	Message(Cow<'a, str>),
	Sink(&'a mut dyn Write),
}

impl fmt::Debug for AssertOption<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
			Self::Sink(_) => f.debug_tuple("Sink").field(&"..").finish(),
		}
	}
}

/// Sets the panic message of a failing check.
///
/// Default message is [`DEFAULT_MESSAGE`].
pub fn with_message<'a>(message: impl Into<Cow<'a, str>>) -> AssertOption<'a> {
	AssertOption::Message(message.into())
}

/// Sets a writer that receives the failure message and the code location of the failing check
/// before the panic. Useful to log a failed check before crashing.
pub fn with_sink(sink: &mut dyn Write) -> AssertOption<'_> {
	AssertOption::Sink(sink)
}
