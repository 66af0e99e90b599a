use mortgage_calc::{compute, format_amount, validate, Field, FormInput, MortgageType};
use pretty_assertions::assert_eq;

fn form(amount: &str, term: &str, rate: &str, kind: Option<MortgageType>) -> FormInput {
    FormInput {
        amount: amount.to_string(),
        term: term.to_string(),
        interest_rate: rate.to_string(),
        mortgage_type: kind,
    }
}

#[test]
fn submit_formats_both_figures() {
    let input = form("300,000", "25", "5", Some(MortgageType::Repayment));
    assert!(validate(&input).is_empty());

    let result = compute(
        &input.amount,
        &input.term,
        &input.interest_rate,
        MortgageType::Repayment,
    )
    .unwrap();
    assert_eq!(format_amount(result.monthly_payment), "1,753.77");
    assert_eq!(format_amount(result.total_payment), "526,131.04");
}

#[test]
fn interest_only_figures() {
    let result = compute("300,000", "25", "5", MortgageType::InterestOnly).unwrap();
    assert_eq!(format_amount(result.monthly_payment), "1,250.00");
    assert_eq!(format_amount(result.total_payment), "375,000.00");
}

#[test]
fn incomplete_form_reports_missing_fields() {
    let input = form("", "25", "", None);
    let errors = validate(&input);
    assert_eq!(
        errors.keys().copied().collect::<Vec<_>>(),
        vec![Field::Amount, Field::InterestRate, Field::MortgageType]
    );
}
