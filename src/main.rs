use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use mortgage_calc::{app::App, config::CalculatorConfig, logging, theme::Palette, ui};

fn main() -> Result<()> {
    let config = CalculatorConfig::load()?;
    logging::init(
        CalculatorConfig::log_path().as_deref(),
        config.log_filter.as_deref(),
    )?;
    tracing::info!("starting mortgage calculator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(Palette::with_overrides(&config.colors));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{:?}", err);
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases as well as presses
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key)? {
                tracing::info!("exiting");
                return Ok(());
            }
        }
    }
}
