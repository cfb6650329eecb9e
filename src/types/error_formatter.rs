//! Failure chain formatting utilities.

use crate::types::failure::{Cause, Failure};
use core::fmt::Display;

/// Trait for customizing failure chain formatting.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain.map(|item| self.format_item(item)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based failure formatter.
///
/// The chain it formats is the failure's path, outermost segment first,
/// followed by the root cause (code and bad value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub segment_prefix: Option<String>,
    pub root_prefix: Option<String>,
    pub indent: String,
    pub show_value: bool,
    pub cascade: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            segment_prefix: None,
            root_prefix: None,
            indent: "  ".into(),
            show_value: true,
            cascade: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            segment_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<_> = chain.collect();
        let Some(last_idx) = items.len().checked_sub(1) else {
            return String::new();
        };

        let mut result = String::with_capacity(items.len() * 16);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
            }

            let prefix = if i == last_idx {
                self.root_prefix.as_ref().or(self.segment_prefix.as_ref())
            } else {
                self.segment_prefix.as_ref()
            };
            if let Some(p) = prefix {
                result.push_str(p);
            }
            result.push_str(&item.to_string());
        }
        result
    }
}

/// Builder for customizing failure display output.
///
/// # Examples
///
/// ```
/// use schema_rail::{Code, Failure};
///
/// let failure = Failure::new(Code::String, 7).within("name").within(0);
///
/// assert_eq!(failure.fmt().compact().to_string(), "[0] | name | string (got 7)");
/// assert_eq!(failure.fmt().show_value(false).to_string(), "[0] -> name -> string");
/// ```
pub struct FailureFormatBuilder<'a> {
    pub(crate) failure: &'a Failure,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> FailureFormatBuilder<'a> {
    pub fn new(failure: &'a Failure) -> Self {
        Self { failure, config: ErrorFormatConfig::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.config.show_value = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.separator == " -> " {
            self.config.separator = "\n".into();
        }
        self
    }
}

impl Display for FailureFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cause = Cause { failure: self.failure, show_value: self.config.show_value };

        let mut items: Vec<&dyn Display> = Vec::with_capacity(self.failure.path().len() + 1);
        for segment in self.failure.path().iter() {
            items.push(segment as &dyn Display);
        }
        items.push(&cause);

        f.write_str(&self.config.format_chain(items.into_iter()))
    }
}
