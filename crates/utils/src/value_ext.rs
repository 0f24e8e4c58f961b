use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// Coordinates in UTM metres and sample values near zero should line up
    /// in the same report, which the default `{:e}` does not do.
    ///
    /// ```rust
    /// # use restools_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(460500.0_f64.sci(3, 2), "4.605e+05".to_string());
    /// assert_eq!(0.0025_f64.sci(2, 3), "2.50e-003".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", &self, precision = precision);
        // `{:e}` always emits an 'e', the fallback only guards the split
        let (mantissa, exponent) = formatted
            .split_once('e')
            .unwrap_or((formatted.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
