//! South African rand formatting: `R 12 345,67`.
//!
//! Space as the thousands separator and comma as the decimal separator, as
//! in the `en-ZA` locale.

/// Format an amount in rand with two decimal places.
pub fn format_zar(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("R {amount}");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let is_zero = whole.chars().chain(fraction.chars()).all(|c| c == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}R {grouped},{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_zar(0.0), "R 0,00");
        assert_eq!(format_zar(999.0), "R 999,00");
        assert_eq!(format_zar(1000.0), "R 1 000,00");
        assert_eq!(format_zar(1_234_567.891), "R 1 234 567,89");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_zar(1672.676), "R 1 672,68");
        assert_eq!(format_zar(1672.674), "R 1 672,67");
        assert_eq!(format_zar(0.004), "R 0,00");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(format_zar(-2500.5), "-R 2 500,50");
        assert_eq!(format_zar(-0.001), "R 0,00");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(format_zar(1e20), "R 100 000 000 000 000 000 000,00");
        assert_eq!(format_zar(-2e18), "-R 2 000 000 000 000 000 000,00");
    }
}
