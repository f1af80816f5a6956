mod api;
mod config;
mod format;
mod log;
mod panel;
mod ui;

use anyhow::Result;
use api::AgentClient;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use panel::{QueryPanel, UiState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load config, falling back to defaults if the file is unreadable
    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::log_error(&format!("Failed to load config, using defaults: {}", e));
            config::Config::default()
        }
    };

    let client = AgentClient::new(cfg.base_url);
    let mut panel = QueryPanel::new();

    // One-shot reachability probe, informational only
    match client.health().await {
        Ok(status) => {
            panel.set_status(Some(format!("Agent {} at {}", status, client.base_url())));
        }
        Err(e) => {
            log::log_error(&format!("Health probe failed: {}", e));
            panel.set_status(Some(format!("Agent unreachable at {}", client.base_url())));
        }
    }

    let result = run_app(&mut terminal, &mut panel, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    panel: &mut QueryPanel,
    client: &AgentClient,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, panel))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    panel.clear_response();
                }
                KeyCode::F(n @ 1..=3) => {
                    panel.fill_example(n as usize - 1);
                }
                KeyCode::Up => {
                    panel.scroll_up();
                }
                KeyCode::Down => {
                    panel.scroll_down();
                }
                KeyCode::Char(c) if matches!(panel.state, UiState::Idle) => {
                    panel.push_char(c);
                }
                KeyCode::Backspace if matches!(panel.state, UiState::Idle) => {
                    panel.pop_char();
                }
                KeyCode::Enter if matches!(panel.state, UiState::Idle) => {
                    if let Some(query) = panel.begin_submit() {
                        let drawn = terminal.draw(|f| ui::render(f, panel));

                        match client.query(&query).await {
                            Ok(response) => panel.set_response(response),
                            Err(e) => panel.set_error(e.to_string()),
                        }

                        // Always back to idle so the user can retry
                        panel.finish_submit();
                        drawn?;
                    }
                }
                KeyCode::Esc if matches!(panel.state, UiState::Idle) => {
                    if panel.input.is_empty() {
                        return Ok(());
                    }
                    panel.clear_input();
                }
                _ => {}
            }
        }
    }
}
