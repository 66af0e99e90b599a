//! Number formatting for the result panel and the amount input

use crate::calculator::CalculationResult;

/// Rendered in front of every amount; formatted numbers never include it.
pub const CURRENCY_SYMBOL: &str = "£";

/// Inserts `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Two decimals with thousands grouping, e.g. `1,753.77`.
///
/// Rounds half away from zero on the two-decimal value.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let fraction = cents - whole * 100.0;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };

    format!(
        "{sign}{}.{:02}",
        group_thousands(&format!("{whole:.0}")),
        fraction as u64
    )
}

/// Groups the integer part of an amount while it is being typed.
/// Existing separators are dropped first; the decimal part is left alone.
pub fn group_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    match digits.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&digits),
    }
}

/// What the result panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Placeholder,
    Results { monthly: String, total: String },
}

impl ResultView {
    pub const PLACEHOLDER_TITLE: &'static str = "Results shown here";
    pub const PLACEHOLDER_TEXT: &'static str = "Complete the form and click \"calculate repayments\" to see what your monthly repayments would be.";
    pub const RESULTS_TITLE: &'static str = "Your results";
    pub const RESULTS_TEXT: &'static str = "Your results are shown below based on the information you provided. To adjust the results, edit the form and click \"calculate repayments\" again.";
    pub const MONTHLY_LABEL: &'static str = "Your monthly repayments";
    pub const TOTAL_LABEL: &'static str = "Total you'll repay over the term";
}

impl From<Option<&CalculationResult>> for ResultView {
    fn from(result: Option<&CalculationResult>) -> Self {
        match result {
            None => ResultView::Placeholder,
            Some(result) => ResultView::Results {
                monthly: format!("{CURRENCY_SYMBOL}{}", format_amount(result.monthly_payment)),
                total: format!("{CURRENCY_SYMBOL}{}", format_amount(result.total_payment)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounds_to_two_decimals_with_grouping() {
        assert_eq!(format_amount(1753.7654), "1,753.77");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(525_000.0), "525,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_amount(f64::NAN), "—");
        assert_eq!(format_amount(f64::INFINITY), "—");
    }

    #[test]
    fn typed_amount_is_grouped() {
        assert_eq!(group_input("300000"), "300,000");
        assert_eq!(group_input("3000"), "3,000");
        assert_eq!(group_input("300"), "300");
        assert_eq!(group_input("30,00"), "3,000");
        assert_eq!(group_input("1234567.5"), "1,234,567.5");
        assert_eq!(group_input(""), "");
    }

    #[test]
    fn result_view_placeholder_without_result() {
        assert_eq!(ResultView::from(None), ResultView::Placeholder);
    }

    #[test]
    fn result_view_prefixes_currency_symbol() {
        let result = CalculationResult {
            monthly_payment: 1753.7654,
            total_payment: 526_129.62,
        };
        assert_eq!(
            ResultView::from(Some(&result)),
            ResultView::Results {
                monthly: "£1,753.77".to_string(),
                total: "£526,129.62".to_string(),
            }
        );
    }
}
