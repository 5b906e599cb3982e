//! Search state management

/// Search state
#[derive(Default)]
pub struct SearchState {
    /// Current search query
    pub query: String,
    /// Whether a search is needed
    pub needs_search: bool,
    /// First frame flag (for auto-focus)
    pub first_frame: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            needs_search: true,
            first_frame: true,
        }
    }

    /// Replace the query with a dropped emoji so it finds its own tile
    pub fn set_character(&mut self, c: char) {
        self.query.clear();
        self.query.push(c);
        self.needs_search = true;
    }
}
