//! Form input model for the calculator

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four inputs of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Term,
    InterestRate,
    MortgageType,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Amount,
        Field::Term,
        Field::InterestRate,
        Field::MortgageType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Amount => "Mortgage Amount",
            Field::Term => "Mortgage Term",
            Field::InterestRate => "Interest Rate",
            Field::MortgageType => "Mortgage Type",
        }
    }
}

/// Per-field error messages. A missing key means the field is fine.
pub type ValidationErrors = BTreeMap<Field, &'static str>;

/// How the loan is paid back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MortgageType {
    /// Amortizing: every payment covers interest and part of the principal
    Repayment,
    /// Payments cover the interest only
    InterestOnly,
}

impl MortgageType {
    pub const ALL: [MortgageType; 2] = [MortgageType::Repayment, MortgageType::InterestOnly];

    pub fn label(self) -> &'static str {
        match self {
            MortgageType::Repayment => "Repayment",
            MortgageType::InterestOnly => "Interest Only",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MortgageType::Repayment => "repayment",
            MortgageType::InterestOnly => "interest-only",
        }
    }

    /// The other option of the radio pair
    pub fn toggled(self) -> Self {
        match self {
            MortgageType::Repayment => MortgageType::InterestOnly,
            MortgageType::InterestOnly => MortgageType::Repayment,
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mortgage type '{0}'")]
pub struct UnknownMortgageType(String);

impl FromStr for MortgageType {
    type Err = UnknownMortgageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "repayment" => Ok(MortgageType::Repayment),
            "interest-only" => Ok(MortgageType::InterestOnly),
            other => Err(UnknownMortgageType(other.to_string())),
        }
    }
}

/// Raw form contents, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub amount: String,
    pub term: String,
    pub interest_rate: String,
    pub mortgage_type: Option<MortgageType>,
}

impl FormInput {
    /// Text of a text field; `None` for the radio field
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Amount => Some(&self.amount),
            Field::Term => Some(&self.term),
            Field::InterestRate => Some(&self.interest_rate),
            Field::MortgageType => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Amount => Some(&mut self.amount),
            Field::Term => Some(&mut self.term),
            Field::InterestRate => Some(&mut self.interest_rate),
            Field::MortgageType => None,
        }
    }

    pub fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::MortgageType => self.mortgage_type.is_none(),
            _ => self.text(field).map_or(true, |s| s.trim().is_empty()),
        }
    }

    /// Whether a typed character is allowed in the given field
    pub fn accepts(field: Field, c: char) -> bool {
        match field {
            Field::Amount => c.is_ascii_digit() || c == '.' || c == ',',
            Field::Term | Field::InterestRate => c.is_ascii_digit() || c == '.',
            Field::MortgageType => false,
        }
    }
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Calculate,
    ClearAll,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Input(Field::Amount)
    }
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Input(Field::Amount),
        Focus::Input(Field::Term),
        Focus::Input(Field::InterestRate),
        Focus::Input(Field::MortgageType),
        Focus::Calculate,
        Focus::ClearAll,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[pos - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mortgage_type_parses_canonical_keys() {
        assert_eq!(
            "repayment".parse::<MortgageType>(),
            Ok(MortgageType::Repayment)
        );
        assert_eq!(
            "interest-only".parse::<MortgageType>(),
            Ok(MortgageType::InterestOnly)
        );
        assert!("fixed".parse::<MortgageType>().is_err());
    }

    #[test]
    fn mortgage_type_display_matches_key() {
        for kind in MortgageType::ALL {
            assert_eq!(kind.to_string().parse::<MortgageType>(), Ok(kind));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let input = FormInput {
            amount: "   ".to_string(),
            ..Default::default()
        };
        assert!(input.is_empty(Field::Amount));
    }

    #[test]
    fn amount_accepts_separators_but_term_does_not() {
        assert!(FormInput::accepts(Field::Amount, ','));
        assert!(!FormInput::accepts(Field::Term, ','));
        assert!(FormInput::accepts(Field::InterestRate, '.'));
        assert!(!FormInput::accepts(Field::InterestRate, '-'));
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let start = Focus::default();
        assert_eq!(start.next(), Focus::Input(Field::Term));
        assert_eq!(start.prev(), Focus::ClearAll);
        assert_eq!(Focus::ClearAll.next(), start);

        let mut focus = start;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, start);
    }
}
