// Copyright 2025 Irreducible Inc.

use crate::{call_site::CallSite, config::AssertionConfig};

/// Reports a failed check before the panic.
///
/// Fills in the default message, writes one diagnostic line to the configured sink and emits an
/// `ERROR` event. Sink errors are ignored: reporting must never replace the original failure.
pub fn report(config: &mut AssertionConfig<'_>, call_site: &CallSite) {
	config.resolve_message();

	if let Some(sink) = config.sink.as_mut() {
		let line = format_failure(call_site, &config.message);
		// A single `write_all`. Sinks that accept short writes see it split into several `write`
		// calls rather than a truncated line.
		let _ = sink.write_all(line.as_bytes());
	}

	tracing::error!(
		function = call_site.function(),
		file = call_site.file(),
		line = call_site.line(),
		"{}",
		config.message
	);
}

/// Formats the line written to the sink: `panic! <function>[<file>:<line>]: <message>\n`.
pub fn format_failure(call_site: &CallSite, message: &str) -> String {
	format!("panic! {call_site}: {message}\n")
}
