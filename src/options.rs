//! Text rendering options.

/// Narrowest box the text renderer will draw.
pub const MIN_WIDTH: usize = 20;

/// Configuration for [`TextRenderer`](crate::TextRenderer).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokecards::RenderOptions;
///
/// let options = RenderOptions::default()
///     .with_width(48)
///     .with_color(true)
///     .with_image_rows(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Total box width in columns, borders included.
    /// Values below [`MIN_WIDTH`] are raised to it.
    pub width: usize,
    /// Whether to emit 24-bit ANSI colour codes.
    pub color: bool,
    /// Rows reserved for the image placeholder.
    pub image_rows: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 40,
            color: false,
            image_rows: 1,
        }
    }
}

impl RenderOptions {
    /// Sets the box width.
    ///
    /// # Example
    ///
    /// ```
    /// use pokecards::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_width(60);
    /// assert_eq!(options.width, 60);
    /// ```
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether ANSI colour codes are emitted.
    ///
    /// # Example
    ///
    /// ```
    /// use pokecards::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_color(true);
    /// assert_eq!(options.color, true);
    /// ```
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets the number of image placeholder rows.
    ///
    /// # Example
    ///
    /// ```
    /// use pokecards::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_image_rows(4);
    /// assert_eq!(options.image_rows, 4);
    /// ```
    #[must_use]
    pub const fn with_image_rows(mut self, rows: u8) -> Self {
        self.image_rows = rows;
        self
    }

    pub(crate) fn effective_width(&self) -> usize {
        self.width.max(MIN_WIDTH)
    }
}
