pub mod float;

/// Formatting options for the numbers that appear in rendered expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// The maximum number of fractional digits to show. The number is rounded to this many digits
    /// and trailing zeros are removed, so `2` is always rendered as `2`, and `1/3` is rendered as
    /// `0.3333` with the default precision of 4.
    ///
    /// This option **does not** affect the precision of any computation, only the number of
    /// digits displayed during formatting.
    pub precision: usize,

    /// Whether to display separators for large numbers.
    pub separators: Separator,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            separators: Separator::default(),
        }
    }
}

/// Whether to display separators for large numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Separator {
    /// Always display separators. For example, the number _one million_ is rendered with commas as
    /// `1,000,000`.
    Always,

    /// Never display separators.
    ///
    /// This is the default option.
    #[default]
    Never,
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of fractional digits to show. See [`FormatOptions::precision`]
    /// for more information.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Sets whether to display separators for large numbers. See [`Separator`] for more
    /// information.
    pub fn separators(mut self, separators: Separator) -> Self {
        self.0.separators = separators;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Formats a number with the given options into a new [`String`].
pub fn format_number(n: f64, options: FormatOptions) -> String {
    let mut s = String::new();
    // writing to a `String` cannot fail
    let _ = float::fmt(&mut s, n, options);
    s
}
