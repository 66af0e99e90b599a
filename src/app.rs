//! Calculator state and the actions that change it

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calculator::{CalculationResult, LoanTerms};
use crate::form::{Field, Focus, FormInput, MortgageType, ValidationErrors};
use crate::theme::Palette;
use crate::validation::validate;

pub struct App {
    pub inputs: FormInput,
    pub errors: ValidationErrors,
    pub results: Option<CalculationResult>,
    pub focus: Focus,
    pub palette: Palette,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl App {
    pub fn new(palette: Palette) -> Self {
        Self {
            inputs: FormInput::default(),
            errors: ValidationErrors::new(),
            results: None,
            focus: Focus::default(),
            palette,
        }
    }

    fn clear_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Append a character to a text field, ignoring characters the field
    /// does not accept
    pub fn type_char(&mut self, field: Field, c: char) {
        if !FormInput::accepts(field, c) {
            return;
        }
        if let Some(text) = self.inputs.text_mut(field) {
            text.push(c);
            self.clear_error(field);
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if let Some(text) = self.inputs.text_mut(field) {
            text.pop();
            self.clear_error(field);
        }
    }

    pub fn select_type(&mut self, kind: MortgageType) {
        self.inputs.mortgage_type = Some(kind);
        self.clear_error(Field::MortgageType);
    }

    /// Validate and, when everything parses, replace the results
    pub fn calculate(&mut self) {
        let errors = validate(&self.inputs);
        if !errors.is_empty() {
            tracing::debug!(missing = errors.len(), "form incomplete");
            self.errors = errors;
            return;
        }

        let terms = match LoanTerms::parse(&self.inputs) {
            Ok(terms) => terms,
            Err(errors) => {
                tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "rejected input");
                self.errors = errors;
                return;
            }
        };

        match terms.checked_calculate() {
            Ok(result) => {
                tracing::info!(
                    kind = %terms.kind,
                    monthly = result.monthly_payment,
                    total = result.total_payment,
                    "calculated repayments"
                );
                self.errors.clear();
                self.results = Some(result);
            }
            Err(e) => {
                tracing::warn!("rejected result: {}", e);
                self.errors.clear();
                self.errors.insert(e.field(), e.message());
            }
        }
    }

    pub fn clear_all(&mut self) {
        tracing::info!("clearing form");
        self.inputs = FormInput::default();
        self.errors.clear();
        self.results = None;
        self.focus = Focus::default();
    }

    /// Returns `Ok(true)` when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Char('c') if ctrl => return Ok(true),
            KeyCode::Char('l') if ctrl => self.clear_all(),
            // Unbound chords never reach the inputs
            KeyCode::Char(_) if ctrl || alt => {}
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::ClearAll => self.clear_all(),
                _ => self.calculate(),
            },
            _ => self.handle_focused_key(key.code),
        }
        Ok(false)
    }

    fn handle_focused_key(&mut self, code: KeyCode) {
        match (self.focus, code) {
            (Focus::Input(Field::MortgageType), KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                let kind = self
                    .inputs
                    .mortgage_type
                    .map_or(MortgageType::Repayment, MortgageType::toggled);
                self.select_type(kind);
            }
            (Focus::Input(Field::MortgageType), KeyCode::Char('1')) => {
                self.select_type(MortgageType::Repayment)
            }
            (Focus::Input(Field::MortgageType), KeyCode::Char('2')) => {
                self.select_type(MortgageType::InterestOnly)
            }
            (Focus::Input(field), KeyCode::Char(c)) => self.type_char(field, c),
            (Focus::Input(field), KeyCode::Backspace) => self.backspace(field),
            (Focus::Calculate | Focus::ClearAll, KeyCode::Char(' ')) => {
                if self.focus == Focus::ClearAll {
                    self.clear_all();
                } else {
                    self.calculate();
                }
            }
            _ => {}
        }
    }
}
