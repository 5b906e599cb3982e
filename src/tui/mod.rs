pub mod app;
pub mod colors;
pub mod search;
pub mod selection;
pub mod ui;

use crate::{logging, AppConfig};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Entry point: build the catalog and run the terminal UI until quit
pub fn run(config: AppConfig) -> crate::Result<()> {
    let catalog = config.build_catalog();
    logging::info("TUI", &format!("Catalog ready: {} emoji", catalog.len()));
    let mut app = app::App::new(catalog, config.grid());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app.run(&mut terminal);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
