mod app;
mod config;
mod todo;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Focus};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "ticklist")]
#[command(about = "Single-screen TUI to-do list")]
#[command(version)]
struct Cli {
    /// Config file path (defaults to ~/.config/ticklist/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Theme preset override (slate, paper, nord, gruvbox)
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticklist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut config = Config::load(&config_path)?;
    if let Some(theme) = cli.theme {
        config.theme.preset = theme;
    }
    let theme = config.resolve_theme();
    tracing::info!("Using theme preset {:?}", config.theme.preset);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, theme);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn default_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ticklist")
        .join("config.toml")
        .to_string_lossy()
        .into_owned()
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Bindings that work regardless of focus
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // Same add operation as Enter in the entry bar
                        app.submit_draft();
                        continue;
                    }
                    _ => {}
                }

                match app.focus() {
                    Focus::Entry => match key.code {
                        KeyCode::Enter => {
                            app.submit_draft();
                        }
                        KeyCode::Backspace => {
                            app.pop_draft_char();
                        }
                        KeyCode::Tab | KeyCode::Esc => {
                            app.focus_list();
                        }
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.push_draft_char(c);
                        }
                        _ => {}
                    },
                    Focus::List => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
                        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => {
                            app.focus_entry();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}
