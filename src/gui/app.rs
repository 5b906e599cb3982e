//! Main emojiplus window

use crate::gui::colors;
use crate::gui::search::SearchState;
use crate::{filter_indices, logging, AppConfig, Catalog, CatalogEntry, GridLayout};
use eframe::egui;

/// Drag-and-drop payload carried by a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiPayload(pub char);

/// Main application state
pub struct EmojiApp {
    config: AppConfig,
    /// Built once at start-up
    catalog: Catalog,
    grid: GridLayout,
    search: SearchState,
    /// Indices into the catalog matching the current query
    results: Vec<usize>,
    status_message: String,
}

impl EmojiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, catalog: Catalog) -> Self {
        cc.egui_ctx.set_visuals(colors::visuals());

        let grid = config.grid();
        let status_message = format!("{} emoji", catalog.len());

        Self {
            config,
            catalog,
            grid,
            search: SearchState::new(),
            results: Vec::new(),
            status_message,
        }
    }

    fn perform_search(&mut self) {
        self.results = filter_indices(&self.catalog, &self.search.query);
        self.status_message = format!("{} emoji", self.results.len());
    }

    fn copy(&mut self, c: char) {
        let label = self
            .catalog
            .find(c)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        match crate::copy_to_clipboard(&c.to_string()) {
            Ok(()) => self.status_message = format!("Copied {} {}", c, label),
            Err(e) => {
                logging::warn("GUI", &e.to_string());
                self.status_message = e.to_string();
            }
        }
    }

    /// Render search bar; also the drop target for dragged tiles
    fn render_search_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(self.config.spacing);
            let dragging = egui::DragAndDrop::has_payload_of_type::<EmojiPayload>(ctx);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search.query)
                    .desired_width(ui.available_width())
                    .hint_text("Search\u{1F50E}"),
            );

            if dragging && response.contains_pointer() {
                ui.painter().rect_stroke(
                    response.rect,
                    colors::CORNER_RADIUS,
                    egui::Stroke::new(2.0, colors::DROP_TARGET),
                    egui::StrokeKind::Inside,
                );
            }

            if let Some(payload) = response.dnd_release_payload::<EmojiPayload>() {
                self.search.set_character(payload.0);
            }

            if self.search.first_frame {
                response.request_focus();
                self.search.first_frame = false;
            }

            if response.changed() {
                self.search.needs_search = true;
            }
            ui.add_space(self.config.spacing);
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_DIM, &self.status_message);
            });
        });
    }

    /// Virtualized grid: only visible rows are laid out
    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let spacing = self.config.spacing;
        let tile = self.config.tile_size;
        let total = self.results.len();
        let rows = self.grid.rows(total);
        let mut clicked = None;

        ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, tile, rows, |ui, row_range| {
                for row in row_range {
                    ui.horizontal(|ui| {
                        for idx in self.grid.row_span(row, total) {
                            let Some(entry) = self.catalog.get(self.results[idx]) else {
                                continue;
                            };
                            if render_tile(ui, entry, &self.config).clicked() {
                                clicked = Some(entry.character);
                            }
                        }
                    });
                }
            });

        if let Some(c) = clicked {
            self.copy(c);
        }
    }

    /// Glyph following the pointer while a tile is dragged
    fn render_drag_preview(&self, ctx: &egui::Context) {
        let Some(payload) = egui::DragAndDrop::payload::<EmojiPayload>(ctx) else {
            return;
        };
        let Some(pos) = ctx.pointer_latest_pos() else {
            return;
        };
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("emoji_drag_preview"),
        ));
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            payload.0,
            egui::FontId::proportional(self.config.glyph_size),
            colors::TEXT,
        );
    }
}

/// One fixed-size tile. Click copies, drag carries the character.
fn render_tile(ui: &mut egui::Ui, entry: &CatalogEntry, config: &AppConfig) -> egui::Response {
    let size = egui::vec2(config.tile_size, config.tile_size);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    let fill = if response.hovered() {
        colors::SURFACE_HOVER
    } else {
        colors::SURFACE
    };
    let painter = ui.painter();
    painter.rect_filled(rect, colors::CORNER_RADIUS, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        entry.character,
        egui::FontId::proportional(config.glyph_size),
        colors::TEXT,
    );

    response.dnd_set_drag_payload(EmojiPayload(entry.character));

    response.on_hover_text(format!("{}  {}", entry.name, entry.code_label()))
}

impl eframe::App for EmojiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_search_bar(ctx);

        if self.search.needs_search {
            self.perform_search();
            self.search.needs_search = false;
        }

        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_grid(ui);
        });

        self.render_drag_preview(ctx);
    }
}
