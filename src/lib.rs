//! emojiplus - searchable emoji grid
//!
//! Builds a catalog of emoji from the Unicode character name database and
//! filters it by name as you type.
//!
//! # Features
//!
//! - **Catalog**: every named code point in the emoji blocks, `face` entries first
//! - **Search**: case-insensitive substring match on the Unicode name, or paste an emoji
//! - **GUI**: 8-column tile grid with click-to-copy and drag-to-search
//! - **TUI**: the same grid in the terminal
//!
//! # Example
//!
//! ```no_run
//! use emojiplus::{filter, Catalog, EMOJI_BLOCKS};
//!
//! let catalog = Catalog::build(&EMOJI_BLOCKS);
//! for entry in filter(&catalog, "tears of joy") {
//!     println!("{} {}", entry.character, entry.name);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod grid;
pub mod gui;
pub mod logging;
pub mod query;
pub mod tui;

// Re-export main types
pub use catalog::{
    BuildStats, Catalog, CatalogEntry, CodeRange, NameSource, UnicodeNames, EMOJI_BLOCKS,
    MARKER_TERM,
};
pub use error::{EmojiError, Result};
pub use grid::{GridLayout, DEFAULT_COLUMNS};
pub use query::{filter, filter_indices, Query};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Code-point ranges scanned when building the catalog
    pub ranges: Vec<CodeRange>,
    /// Grid columns
    pub columns: usize,
    /// Tile edge length in points (GUI)
    pub tile_size: f32,
    /// Emoji glyph size in points (GUI)
    pub glyph_size: f32,
    /// Gap between tiles in points (GUI)
    pub spacing: f32,
    /// Initial window size (GUI)
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ranges: EMOJI_BLOCKS.to_vec(),
            columns: DEFAULT_COLUMNS,
            tile_size: 56.0,
            glyph_size: 32.0,
            spacing: 8.0,
            window_size: [480.0, 600.0],
        }
    }
}

impl AppConfig {
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn grid(&self) -> GridLayout {
        GridLayout::new(self.columns)
    }

    /// Build the catalog for the configured ranges
    pub fn build_catalog(&self) -> Catalog {
        Catalog::build(&self.ranges)
    }
}

/// Put text on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    logging::debug("CLIPBOARD", &format!("Copied '{}'", text));
    Ok(())
}
