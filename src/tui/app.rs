use crate::tui::search::SearchState;
use crate::tui::selection::SelectionState;
use crate::tui::ui;
use crate::{filter_indices, logging, Catalog, CatalogEntry, GridLayout};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

pub struct App {
    // Data
    pub catalog: Catalog,
    pub grid: GridLayout,
    /// Indices into the catalog matching the current query
    pub results: Vec<usize>,

    // Sub-states
    pub search: SearchState,
    pub selection: SelectionState,

    pub status_message: String,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, grid: GridLayout) -> Self {
        let mut app = Self {
            catalog,
            grid,
            results: Vec::new(),
            search: SearchState::default(),
            selection: SelectionState::default(),
            status_message: String::new(),
            should_quit: false,
        };
        app.perform_search();
        app
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.search.needs_search {
                self.perform_search();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    pub fn perform_search(&mut self) {
        self.results = filter_indices(&self.catalog, &self.search.query);
        self.search.needs_search = false;
        self.selection.reset(self.results.len());
        self.status_message = format!("{} emoji", self.results.len());
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        let idx = *self.results.get(self.selection.selected?)?;
        self.catalog.get(idx)
    }

    fn copy_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let (c, name) = (entry.character, entry.name.clone());
        self.status_message = match crate::copy_to_clipboard(&c.to_string()) {
            Ok(()) => format!("Copied {} {}", c, name),
            Err(e) => {
                logging::warn("TUI", &e.to_string());
                e.to_string()
            }
        };
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_grid_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.home(),
            KeyCode::End => self.search.end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let total = self.results.len();
        let grid = self.grid;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selection.select_left(&grid),
            KeyCode::Right | KeyCode::Char('l') => self.selection.select_right(&grid, total),
            KeyCode::Up | KeyCode::Char('k') => {
                // Up from the top row goes back to the search box
                match self.selection.selected {
                    Some(i) if i < grid.columns() => self.search.focused = true,
                    _ => self.selection.select_up(&grid),
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.selection.select_down(&grid, total),
            KeyCode::PageUp => self.selection.page_up(&grid),
            KeyCode::PageDown => self.selection.page_down(&grid, total),
            KeyCode::Home => self.selection.select_first(&grid),
            KeyCode::End => self.selection.select_last(&grid, total),

            KeyCode::Enter | KeyCode::Char(' ') => self.copy_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.end();
                self.search.insert(c);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeRange;
    use std::collections::HashMap;

    fn app() -> App {
        let names: HashMap<u32, String> = (0x1F600..0x1F614)
            .map(|cp| {
                let name = if cp == 0x1F602 {
                    "FACE WITH TEARS OF JOY".to_string()
                } else {
                    format!("SMILEY {:X} FACE", cp)
                };
                (cp, name)
            })
            .collect();
        let catalog = Catalog::build_with(&[CodeRange::span(0x1F600, 0x1F613)], &names);
        App::new(catalog, GridLayout::new(8))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        if app.search.needs_search {
            app.perform_search();
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_with_full_catalog_and_search_focused() {
        let app = app();
        assert_eq!(app.results.len(), 20);
        assert!(app.search.focused);
        assert_eq!(app.selection.selected, Some(0));
    }

    #[test]
    fn typing_filters_results() {
        let mut app = app();
        type_str(&mut app, "JOY");
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.selected_entry().map(|e| e.character), Some('\u{1F602}'));
        assert_eq!(app.status_message, "1 emoji");
    }

    #[test]
    fn escape_clears_then_unfocuses_then_quits() {
        let mut app = app();
        type_str(&mut app, "zzz");
        assert!(app.results.is_empty());
        assert_eq!(app.selection.selected, None);

        press(&mut app, KeyCode::Esc);
        assert!(app.search.query.is_empty());
        assert_eq!(app.results.len(), 20);
        assert!(app.search.focused);

        press(&mut app, KeyCode::Esc);
        assert!(!app.search.focused);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn grid_navigation_with_vim_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert!(!app.search.focused);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selection.selected, Some(8));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selection.selected, Some(9));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selection.selected, Some(17));
        // 20 results: rows of 8, 8, 4; already on the last row
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selection.selected, Some(17));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selection.selected, Some(9));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.selection.selected, Some(8));
        press(&mut app, KeyCode::End);
        assert_eq!(app.selection.selected, Some(19));
    }

    #[test]
    fn up_from_top_row_returns_to_search() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert!(!app.search.focused);
        press(&mut app, KeyCode::Up);
        assert!(app.search.focused);
    }

    #[test]
    fn printable_key_in_grid_starts_a_search() {
        let mut app = app();
        type_str(&mut app, "jo");
        press(&mut app, KeyCode::Enter);
        assert!(!app.search.focused);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.search.focused);
        assert_eq!(app.search.query, "joy");
        assert_eq!(app.results.len(), 1);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
