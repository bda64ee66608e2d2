//! Messaging overlay.

use crate::state::ChatState;
use egui::RichText;
use unilink::{OverlayCollaborator, Session, ThemeColors};

/// Chat window shown while the navbar's chat flag is set.
pub struct ChatPanel<'a> {
    state: &'a mut ChatState,
    me: Option<&'a Session>,
    colors: &'a ThemeColors,
}

impl<'a> ChatPanel<'a> {
    pub fn new(state: &'a mut ChatState, me: Option<&'a Session>, colors: &'a ThemeColors) -> Self {
        Self { state, me, colors }
    }
}

impl OverlayCollaborator for ChatPanel<'_> {
    type Output = ();

    fn show(
        &mut self,
        ctx: &egui::Context,
        is_open: bool,
        request_close: &mut dyn FnMut(),
    ) -> Option<()> {
        if !is_open {
            return None;
        }

        let mut window_open = true;
        let state = &mut *self.state;
        let colors = self.colors;
        let my_id = self.me.map(|m| m.id.clone()).unwrap_or_default();

        egui::Window::new("Messaging")
            .open(&mut window_open)
            .collapsible(false)
            .default_size([560.0, 380.0])
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    // Thread list
                    let mut pick = None;
                    for conversation in state.book().conversations() {
                        let unread = conversation.unread_count();
                        let label = if unread > 0 {
                            format!("{} ({})", conversation.peer_name, unread)
                        } else {
                            conversation.peer_name.clone()
                        };
                        let selected = state.active_peer() == Some(conversation.peer_id.as_str());
                        if columns[0].add(egui::Button::new(label).selected(selected)).clicked() {
                            pick = Some((
                                conversation.peer_id.clone(),
                                conversation.peer_name.clone(),
                            ));
                        }
                    }
                    if let Some((peer_id, peer_name)) = pick {
                        state.select_peer(&peer_id, &peer_name);
                    }

                    // Active thread
                    let ui = &mut columns[1];
                    let Some(peer) = state.active_peer().map(str::to_string) else {
                        ui.label(RichText::new("Select a conversation").color(colors.text_dim));
                        return;
                    };

                    egui::ScrollArea::vertical()
                        .max_height(260.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            if let Some(conversation) = state.book().conversation(&peer) {
                                for message in &conversation.messages {
                                    let mine = message.sender_id == my_id;
                                    let color = if mine { colors.primary } else { colors.text };
                                    ui.label(RichText::new(&message.content).color(color));
                                }
                            }
                        });

                    ui.separator();
                    let mut send = false;
                    ui.horizontal(|ui| {
                        let input = ui.add(
                            egui::TextEdit::singleline(state.draft_mut())
                                .hint_text("Write a message"),
                        );
                        send |= input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        send |= ui.button("Send").clicked();
                    });
                    if send {
                        state.send_draft(&my_id);
                    }
                });
            });

        if !window_open {
            request_close();
        }
        None
    }
}
