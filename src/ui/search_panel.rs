//! Member search overlay.

use crate::state::SearchState;
use egui::RichText;
use unilink::{OverlayCollaborator, UserDirectory};

/// Maximum number of results listed at once.
const MAX_RESULTS: usize = 8;

pub enum SearchInteraction {
    MemberSelected(String),
}

/// Search window shown while the navbar's search flag is set.
pub struct SearchPanel<'a> {
    state: &'a mut SearchState,
    directory: &'a UserDirectory,
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a mut SearchState, directory: &'a UserDirectory) -> Self {
        Self { state, directory }
    }
}

impl OverlayCollaborator for SearchPanel<'_> {
    type Output = SearchInteraction;

    fn show(
        &mut self,
        ctx: &egui::Context,
        is_open: bool,
        request_close: &mut dyn FnMut(),
    ) -> Option<SearchInteraction> {
        if !is_open {
            return None;
        }

        let mut window_open = true;
        let mut escape = false;
        let mut selected = None;
        let state = &mut *self.state;
        let directory = self.directory;

        egui::Window::new("Search members")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 56.0])
            .show(ctx, |ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(state.query_mut())
                        .hint_text("Search by name")
                        .desired_width(f32::INFINITY),
                );
                if !input.has_focus() && state.query().is_empty() {
                    input.request_focus();
                }
                escape = ui.input(|i| i.key_pressed(egui::Key::Escape));

                let results = directory.search(state.query());
                if results.is_empty() && !state.query().trim().is_empty() {
                    ui.label(RichText::new("No members found").weak());
                }
                for member in results.into_iter().take(MAX_RESULTS) {
                    let text = format!("{}  ·  {}", member.full_name(), member.year_label());
                    if ui.add(egui::Button::new(text).frame(false)).clicked() {
                        selected = Some(member.id.clone());
                    }
                }
            });

        if selected.is_some() || escape || !window_open {
            self.state.reset();
            request_close();
        }

        selected.map(SearchInteraction::MemberSelected)
    }
}
