// Copyright 2025 Irreducible Inc.

use std::{borrow::Cow, fmt, panic::Location};

/// Function name reported when the enclosing function of a call site can't be resolved.
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// The code location that invoked a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
	function: Cow<'static, str>,
	file: &'static str,
	line: u32,
}

impl CallSite {
	pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
		Self {
			function: Cow::Borrowed(function),
			file,
			line,
		}
	}

	/// Resolves the call site of the outermost `#[track_caller]` function on the current stack.
	///
	/// File and line always come from [`Location::caller`]. The enclosing function is looked up
	/// in the debug info of the running binary and falls back to [`UNKNOWN_FUNCTION`].
	#[track_caller]
	pub fn caller() -> Self {
		Self::from_location(Location::caller())
	}

	pub fn from_location(location: &'static Location<'static>) -> Self {
		let function = resolve_function(location).map_or(Cow::Borrowed(UNKNOWN_FUNCTION), Cow::Owned);

		Self {
			function,
			file: location.file(),
			line: location.line(),
		}
	}

	pub fn function(&self) -> &str {
		&self.function
	}

	pub fn file(&self) -> &'static str {
		self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}
}

impl fmt::Display for CallSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}[{}:{}]", self.function, self.file, self.line)
	}
}

/// Turns the type name of an item nested in a function into the path of that function.
///
/// Closure segments are dropped, so a check inside a closure reports the function that defines
/// the closure.
#[doc(hidden)]
pub fn enclosing_function_path(item_path: &str) -> &str {
	match item_path.rsplit_once("::") {
		Some((parent, _)) => trim_closures(parent),
		None => item_path,
	}
}

/// Drops trailing closure segments, both `{{closure}}` and the `{closure#N}` form of v0 symbols.
fn trim_closures(mut path: &str) -> &str {
	while let Some((parent, segment)) = path.rsplit_once("::") {
		if segment != "{{closure}}" && !segment.starts_with("{closure#") {
			break;
		}
		path = parent;
	}
	path
}

/// Expands to the path of the enclosing function, e.g. `my_crate::module::function`.
#[macro_export]
macro_rules! function_name {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			::core::any::type_name::<T>()
		}
		$crate::call_site::enclosing_function_path(type_name_of(f))
	}};
}

cfg_if::cfg_if! {
	if #[cfg(feature = "symbolize")] {
		fn resolve_function(location: &Location<'_>) -> Option<String> {
			use std::path::Path;

			let file = Path::new(location.file());
			let mut function = None;

			backtrace::trace(|frame| {
				backtrace::resolve_frame(frame, |symbol| {
					if function.is_some() || symbol.lineno() != Some(location.line()) {
						return;
					}
					if symbol.filename().is_some_and(|path| path.ends_with(file)) {
						// `{:#}` drops the trailing symbol hash
						function = symbol
							.name()
							.map(|name| trim_closures(&format!("{name:#}")).to_owned());
					}
				});
				function.is_none()
			});

			function
		}
	} else {
		fn resolve_function(_location: &Location<'_>) -> Option<String> {
			None
		}
	}
}
