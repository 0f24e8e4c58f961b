/// Extends string types for the fixed-width names found in binary records
pub trait StringExt {
    /// Strip the blank and null padding around a fixed-width name
    ///
    /// Simulators pad keywords to 8 characters with spaces, and some writers
    /// use null bytes instead.
    ///
    /// ```rust
    /// # use restools_utils::StringExt;
    /// assert_eq!("SEQNUM  ".trim_padding(), "SEQNUM");
    /// assert_eq!("PORO\0\0\0\0".trim_padding(), "PORO");
    /// ```
    fn trim_padding(&self) -> String;

    /// Pad or truncate a name to exactly `width` characters
    ///
    /// ```rust
    /// # use restools_utils::StringExt;
    /// assert_eq!("SWAT".to_fixed_width(8), "SWAT    ");
    /// assert_eq!("PRESSURES".to_fixed_width(8), "PRESSURE");
    /// ```
    fn to_fixed_width(&self, width: usize) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn trim_padding(&self) -> String {
        self.as_ref()
            .trim_matches(|c: char| c == ' ' || c == '\0')
            .to_string()
    }

    fn to_fixed_width(&self, width: usize) -> String {
        let truncated: String = self.as_ref().chars().take(width).collect();
        format!("{truncated:<width$}")
    }
}
