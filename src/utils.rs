/// Formats `value` in scientific notation with `precision` decimals, the way
/// printf's `%.<precision>e` does: the exponent always carries a sign and at
/// least two digits (`1.000e+18`, `2.50e-03`).
pub fn format_sci(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Wraps a workbench parameter name in the `@name@` placeholder syntax.
pub fn workbench_placeholder(name: &str) -> String {
    format!("@{}@", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_printf_exponent_style() {
        assert_eq!(format_sci(1e18, 3), "1.000e+18");
        assert_eq!(format_sci(0.0, 3), "0.000e+00");
        assert_eq!(format_sci(0.5, 5), "5.00000e-01");
        assert_eq!(format_sci(0.0025, 2), "2.50e-03");
        assert_eq!(format_sci(-1.7, 3), "-1.700e+00");
        assert_eq!(format_sci(1.5e-120, 3), "1.500e-120");
        assert_eq!(format_sci(123456.0, 3), "1.235e+05");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_sci(f64::NAN, 3), "nan");
        assert_eq!(format_sci(f64::INFINITY, 3), "inf");
        assert_eq!(format_sci(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn placeholder() {
        assert_eq!(workbench_placeholder("is_T_spoke"), "@is_T_spoke@");
    }
}
