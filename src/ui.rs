//! Rendering of the form and result panels

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::form::{Field, Focus, MortgageType};
use crate::format::{group_input, ResultView, CURRENCY_SYMBOL};

pub fn ui(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(f.size());

    render_form(f, app, columns[0]);
    render_results(f, app, columns[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    let clear_style = if app.focus == Focus::ClearAll {
        app.palette.accent().add_modifier(Modifier::UNDERLINED)
    } else {
        app.palette.muted().add_modifier(Modifier::UNDERLINED)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Mortgage Calculator", app.palette.title()),
        Span::raw("   "),
        Span::styled("Clear All", clear_style),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    let amount = group_input(&app.inputs.amount);
    render_text_input(f, app, chunks[1], Field::Amount, CURRENCY_SYMBOL, &amount, "");

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[2]);
    render_text_input(f, app, row[0], Field::Term, "", &app.inputs.term, "years");
    render_text_input(
        f,
        app,
        row[1],
        Field::InterestRate,
        "",
        &app.inputs.interest_rate,
        "%",
    );

    render_type_choice(f, app, chunks[3]);
    render_calculate_button(f, app, chunks[4]);

    let help = Paragraph::new(help_text(app.focus))
        .style(app.palette.muted())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[5]);
}

/// Footer key help; Enter does different things depending on focus
fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::ClearAll => {
            "Tab/↓: next | Shift+Tab/↑: previous | Enter: clear all | Ctrl+L: clear all | Esc: exit"
        }
        Focus::Input(Field::MortgageType) => {
            "Tab/↓: next | Shift+Tab/↑: previous | ←/→/Space: choose type | Enter: calculate | Ctrl+L: clear all | Esc: exit"
        }
        Focus::Input(_) | Focus::Calculate => {
            "Tab/↓: next | Shift+Tab/↑: previous | Enter: calculate | Ctrl+L: clear all | Esc: exit"
        }
    }
}

/// Bordered input with an optional prefix/suffix and the inline error below
fn render_text_input(
    f: &mut Frame,
    app: &App,
    area: Rect,
    field: Field,
    prefix: &str,
    value: &str,
    suffix: &str,
) {
    let focused = app.focus == Focus::Input(field);
    let error = app.errors.get(&field).copied();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(area);

    let affix_style = if error.is_some() {
        app.palette.error_text()
    } else {
        app.palette.label(false)
    };
    let mut spans = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::styled(format!("{prefix} "), affix_style));
    }
    spans.push(Span::styled(
        value.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if focused {
        spans.push(Span::styled("▏", app.palette.accent()));
    }
    if !suffix.is_empty() {
        spans.push(Span::styled(format!(" {suffix}"), affix_style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app.palette.border(focused, error.is_some()))
        .title(Span::styled(field.label(), app.palette.label(error.is_some())));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(message) = error {
        f.render_widget(
            Paragraph::new(message).style(app.palette.error_text()),
            chunks[1],
        );
    }
}

fn render_type_choice(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input(Field::MortgageType);
    let error = app.errors.get(&Field::MortgageType).copied();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)].as_ref())
        .split(area);

    let options: Vec<Line> = MortgageType::ALL
        .into_iter()
        .map(|kind| {
            let selected = app.inputs.mortgage_type == Some(kind);
            if selected {
                Line::from(format!("◉ {}", kind.label())).style(app.palette.accent())
            } else {
                Line::from(format!("○ {}", kind.label())).style(app.palette.label(false))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(app.palette.border(focused, error.is_some()))
        .title(Span::styled(
            Field::MortgageType.label(),
            app.palette.label(error.is_some()),
        ));
    f.render_widget(Paragraph::new(options).block(block), chunks[0]);

    if let Some(message) = error {
        f.render_widget(
            Paragraph::new(message).style(app.palette.error_text()),
            chunks[1],
        );
    }
}

fn render_calculate_button(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Calculate;
    let style = if focused {
        Style::default()
            .fg(app.palette.slate_900)
            .bg(app.palette.lime)
            .add_modifier(Modifier::BOLD)
    } else {
        app.palette.accent()
    };
    let button = Paragraph::new("Calculate Repayments")
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(app.palette.border(focused, false)),
        );
    f.render_widget(button, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.palette.slate_700))
        .style(Style::default().bg(app.palette.slate_900));

    let text = match ResultView::from(app.results.as_ref()) {
        ResultView::Placeholder => vec![
            Line::from(""),
            Line::from(ResultView::PLACEHOLDER_TITLE).style(app.palette.title()),
            Line::from(""),
            Line::from(ResultView::PLACEHOLDER_TEXT).style(app.palette.muted()),
        ],
        ResultView::Results { monthly, total } => vec![
            Line::from(ResultView::RESULTS_TITLE).style(app.palette.title()),
            Line::from(""),
            Line::from(ResultView::RESULTS_TEXT).style(app.palette.muted()),
            Line::from(""),
            Line::from(ResultView::MONTHLY_LABEL).style(app.palette.muted()),
            Line::from(monthly).style(app.palette.accent()),
            Line::from(""),
            Line::from(ResultView::TOTAL_LABEL).style(app.palette.muted()),
            Line::from(total).style(app.palette.title()),
        ],
    };

    let alignment = if app.results.is_some() {
        Alignment::Left
    } else {
        Alignment::Center
    };
    let results = Paragraph::new(text)
        .block(panel)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    f.render_widget(results, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_describes_what_enter_does_on_the_focused_control() {
        assert!(help_text(Focus::ClearAll).contains("Enter: clear all"));
        assert!(!help_text(Focus::ClearAll).contains("Enter: calculate"));
        assert!(help_text(Focus::Calculate).contains("Enter: calculate"));
        assert!(help_text(Focus::Input(Field::Amount)).contains("Enter: calculate"));
    }

    #[test]
    fn type_choice_help_mentions_arrow_keys() {
        assert!(help_text(Focus::Input(Field::MortgageType)).contains("choose type"));
        assert!(!help_text(Focus::Input(Field::Term)).contains("choose type"));
    }
}
