use std::borrow::Cow;

/// Presentation thresholds and the texts the decorator writes into the page.
///
/// ```
/// use lending_autocomplete::Config;
///
/// let config = Config::default().with_popup_limit(8);
/// assert_eq!(config.dropdown_threshold, 10);
/// assert_eq!(config.popup_limit, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Candidate sets with at least one and fewer than this many entries become a native `<select>`.
	pub dropdown_threshold: usize,
	/// Maximum number of suggestions shown in the popup at once.
	pub popup_limit: usize,
	/// Placeholder of a field locked for lack of data.
	pub locked_placeholder: Cow<'static, str>,
	/// Text of the pre-selected, hidden first choice of a dropdown.
	pub dropdown_placeholder: Cow<'static, str>,
}

impl Default for Config {
	fn default() -> Self {
		Self { dropdown_threshold: 10, popup_limit: 5, locked_placeholder: Cow::Borrowed("locked - no data"), dropdown_placeholder: Cow::Borrowed("Choose here") }
	}
}

impl Config {
	#[must_use]
	pub fn with_dropdown_threshold(mut self, dropdown_threshold: usize) -> Self {
		self.dropdown_threshold = dropdown_threshold;
		self
	}

	#[must_use]
	pub fn with_popup_limit(mut self, popup_limit: usize) -> Self {
		self.popup_limit = popup_limit;
		self
	}

	#[must_use]
	pub fn with_locked_placeholder(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		self.locked_placeholder = text.into();
		self
	}

	#[must_use]
	pub fn with_dropdown_placeholder(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		self.dropdown_placeholder = text.into();
		self
	}
}
