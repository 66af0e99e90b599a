//! Monthly and total repayment for repayment and interest-only mortgages

use thiserror::Error;

use crate::form::{Field, FormInput, MortgageType, ValidationErrors};

/// Errors raised while turning form text into loan terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{field:?} is not a valid number")]
    InvalidNumber { field: Field },

    #[error("{field:?} must not be negative")]
    Negative { field: Field },

    #[error("mortgage term gives no monthly payments")]
    ZeroTerm,

    #[error("no mortgage type selected")]
    MissingType,

    #[error("repayment is too large to represent")]
    OutOfRange,
}

impl CalcError {
    /// The form field the error belongs to
    pub fn field(&self) -> Field {
        match self {
            CalcError::InvalidNumber { field } | CalcError::Negative { field } => *field,
            CalcError::ZeroTerm => Field::Term,
            CalcError::MissingType => Field::MortgageType,
            CalcError::OutOfRange => Field::Amount,
        }
    }

    /// Inline message shown under the field
    pub fn message(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => "Please enter a valid number",
            CalcError::Negative { .. } => "Must be a positive number",
            CalcError::ZeroTerm => "Term must be greater than zero",
            CalcError::MissingType => "This field is required",
            CalcError::OutOfRange => "Too large to calculate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
}

/// Parsed loan parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub years: f64,
    /// Annual rate in percent, e.g. `5.0` for 5%
    pub rate_percent: f64,
    pub kind: MortgageType,
}

fn record<T>(errors: &mut ValidationErrors, result: Result<T, CalcError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.insert(e.field(), e.message());
            None
        }
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, CalcError> {
    let cleaned = raw.trim().replace(',', "");
    let value: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::InvalidNumber { field })?;
    if !value.is_finite() {
        return Err(CalcError::InvalidNumber { field });
    }
    if value < 0.0 {
        return Err(CalcError::Negative { field });
    }
    Ok(value)
}

impl LoanTerms {
    /// Parse the three numeric strings. Thousands separators are stripped
    /// from every field, not only the amount.
    pub fn from_strings(
        amount: &str,
        years: &str,
        rate_percent: &str,
        kind: MortgageType,
    ) -> Result<Self, CalcError> {
        let terms = Self {
            principal: parse_number(Field::Amount, amount)?,
            years: parse_number(Field::Term, years)?,
            rate_percent: parse_number(Field::InterestRate, rate_percent)?,
            kind,
        };
        if terms.payments() <= 0.0 {
            return Err(CalcError::ZeroTerm);
        }
        Ok(terms)
    }

    /// Parse the whole form, collecting an error for every field that
    /// does not parse instead of stopping at the first one
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let principal = record(&mut errors, parse_number(Field::Amount, &input.amount));
        let years = record(&mut errors, parse_number(Field::Term, &input.term));
        let rate_percent = record(
            &mut errors,
            parse_number(Field::InterestRate, &input.interest_rate),
        );
        let kind = record(&mut errors, input.mortgage_type.ok_or(CalcError::MissingType));

        if let Some(years) = years {
            if years * 12.0 <= 0.0 {
                errors.insert(Field::Term, CalcError::ZeroTerm.message());
            }
        }

        match (principal, years, rate_percent, kind) {
            (Some(principal), Some(years), Some(rate_percent), Some(kind)) if errors.is_empty() => {
                Ok(Self {
                    principal,
                    years,
                    rate_percent,
                    kind,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.rate_percent / 100.0 / 12.0
    }

    pub fn payments(&self) -> f64 {
        self.years * 12.0
    }

    /// Unrounded monthly and total repayment
    pub fn calculate(&self) -> CalculationResult {
        let rate = self.monthly_rate();
        let payments = self.payments();

        let monthly_payment = match self.kind {
            MortgageType::InterestOnly => self.principal * rate,
            MortgageType::Repayment => {
                // P*r / (1 - (1+r)^-n), written so that tiny rates and very
                // long terms neither cancel to zero nor overflow
                let discount = -(-payments * rate.ln_1p()).exp_m1();
                if discount == 0.0 {
                    self.principal / payments
                } else {
                    self.principal * rate / discount
                }
            }
        };

        CalculationResult {
            monthly_payment,
            total_payment: monthly_payment * payments,
        }
    }

    /// [`calculate`](Self::calculate), rejecting results that overflow
    pub fn checked_calculate(&self) -> Result<CalculationResult, CalcError> {
        let result = self.calculate();
        if result.monthly_payment.is_finite() && result.total_payment.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::OutOfRange)
        }
    }
}

/// Parse and calculate in one step
pub fn compute(
    amount: &str,
    years: &str,
    rate_percent: &str,
    kind: MortgageType,
) -> Result<CalculationResult, CalcError> {
    LoanTerms::from_strings(amount, years, rate_percent, kind)?.checked_calculate()
}
