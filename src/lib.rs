//! Mortgage repayment calculator: a terminal form that works out the
//! monthly and total repayment for repayment and interest-only mortgages.

pub mod app;
pub mod calculator;
pub mod config;
pub mod form;
pub mod format;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod validation;

pub use calculator::{compute, CalcError, CalculationResult, LoanTerms};
pub use form::{Field, FormInput, MortgageType, ValidationErrors};
pub use format::format_amount;
pub use validation::validate;
