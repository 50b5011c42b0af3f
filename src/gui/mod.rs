use crate::api::HttpActivitiesApi;
use crate::config::ClientConfig;
use crate::gui::roster::{
    ListArea, ParticipantRow, ParticipantsSection, LOADING, LOAD_FAILED, NO_PARTICIPANTS,
    SELECT_PLACEHOLDER,
};
use crate::gui::state::AppState;
use crate::models::message::MessageKind;
use egui::{Color32, RichText};
use log::error;
use std::sync::Arc;

pub mod roster;
pub mod state;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const ERROR_COLOR: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

pub struct ActivitiesApp {
    state: AppState,
}

impl ActivitiesApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ClientConfig,
    ) -> Result<Self, anyhow::Error> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let api = HttpActivitiesApi::new(&config.base_url)?;
        let mut state = AppState::new(config, Arc::new(api))?;
        state.start(Some(&cc.egui_ctx));

        Ok(Self { state })
    }

    fn reload(&mut self) {
        match HttpActivitiesApi::new(&self.state.server_address) {
            Ok(api) => {
                self.state.replace_api(Arc::new(api));
                self.state.load_activities();
            }
            Err(e) => {
                error!("Cannot use server {:?}: {:#}", self.state.server_address, e);
                let text = format!("Cannot use server {:?}", self.state.server_address);
                self.state.show_error(text);
            }
        }
    }
}

impl eframe::App for ActivitiesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_events();

        let mut reload = false;
        let mut unregister: Option<(String, String)> = None;
        let mut submit = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::Frame::default()
                .outer_margin(egui::vec2(0.0, 4.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                            ui.heading("Extracurricular Activities");
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Reload").clicked() {
                                reload = true;
                            }
                            ui.text_edit_singleline(&mut self.state.server_address);
                            ui.label("Server:");
                        });
                    });
                });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.push_id("message", |ui| match &self.state.message {
                    Some(message) => {
                        let color = match message.kind {
                            MessageKind::Success => SUCCESS_COLOR,
                            MessageKind::Error => ERROR_COLOR,
                        };
                        ui.colored_label(color, &message.text);
                    }
                    None => {
                        ui.label("");
                    }
                });
            });
        });

        egui::SidePanel::right("signup-form")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Sign Up for an Activity");
                ui.add_space(8.0);
                egui::Grid::new("signup_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Student Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.email)
                            .id_salt("email")
                            .hint_text("your-email@mergington.edu"),
                    );
                    ui.end_row();

                    ui.label("Activity:");
                    let selected_text = self.state.select.selected_text().to_owned();
                    egui::ComboBox::from_id_salt("activity")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            let selected = &mut self.state.select.selected;
                            ui.selectable_value(selected, None, SELECT_PLACEHOLDER);
                            for name in &self.state.select.options {
                                ui.selectable_value(selected, Some(name.clone()), name);
                            }
                        });
                    ui.end_row();
                });

                ui.add_space(12.0);
                if ui
                    .add_enabled(self.state.can_submit(), egui::Button::new("Sign Up"))
                    .clicked()
                {
                    submit = true;
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Available Activities");
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_salt("activities-list")
                .auto_shrink([false, false])
                .show(ui, |ui| match &self.state.list {
                    ListArea::Loading => {
                        ui.label(LOADING);
                    }
                    ListArea::Failed => {
                        ui.label(LOAD_FAILED);
                    }
                    ListArea::Cards(cards) => {
                        for card in cards {
                            egui::Frame::group(ui.style()).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.strong(&card.name);
                                ui.label(&card.description);
                                ui.horizontal(|ui| {
                                    ui.strong("Schedule:");
                                    ui.label(&card.schedule);
                                });
                                ui.horizontal(|ui| {
                                    ui.strong("Availability:");
                                    ui.label(card.availability_text());
                                });

                                ui.add_space(4.0);
                                ui.label(RichText::new("Participants").strong().small());
                                match &card.participants {
                                    ParticipantsSection::Empty => {
                                        ui.weak(NO_PARTICIPANTS);
                                    }
                                    ParticipantsSection::Rows(rows) => {
                                        for row in rows {
                                            if participant_row(ui, row) {
                                                let target = (card.name.clone(), row.email.clone());
                                                unregister = Some(target);
                                            }
                                        }
                                    }
                                }
                            });
                            ui.add_space(6.0);
                        }
                    }
                });
        });

        if reload {
            self.reload();
        }
        if submit {
            self.state.submit_signup();
        }
        if let Some((activity, email)) = unregister {
            self.state.unregister_participant(&activity, &email);
        }
    }
}

/// Draws one roster line; true when its unregister button was clicked.
fn participant_row(ui: &mut egui::Ui, row: &ParticipantRow) -> bool {
    ui.horizontal(|ui| {
        ui.label(format!("• {}", row.email));
        ui.small_button("×")
            .on_hover_text(&row.unregister_label)
            .clicked()
    })
    .inner
}
