use crate::actions::Action;
use crate::config::Config;
use crate::models::auth::Role;
use crate::router::{Load, Section};
use egui::{Color32, RichText};
use state::{AppState, Notice, NoticeKind, PollMode, Screen};

mod sections;
pub mod state;

/// Something the user asked for while the frame was being drawn.
pub(crate) enum Intent {
    Act(Action),
    Enter(Section),
    Show(Screen),
    Reload(Load),
    PollMode(PollMode),
    Login(Role),
    Register,
    SubmitComplaint,
    AddUser,
    Logout,
    Confirm,
    Decline,
    DismissDialog,
}

pub struct SocietyApp {
    state: AppState,
}

impl SocietyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config, runtime: tokio::runtime::Handle) -> Self {
        catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::LATTE);
        Self {
            state: AppState::new(config, runtime, cc.egui_ctx.clone()),
        }
    }
}

impl eframe::App for SocietyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_events();
        ui_main(ctx, &mut self.state);
    }
}

pub fn ui_main(ctx: &egui::Context, state: &mut AppState) {
    let mut intents = Vec::new();

    header(ctx, state, &mut intents);
    footer(ctx, state);

    match state.screen {
        Screen::Home => home(ctx, state, &mut intents),
        Screen::Login => login(ctx, state, Role::Resident, &mut intents),
        Screen::AdminLogin => login(ctx, state, Role::Admin, &mut intents),
        Screen::Register => register(ctx, state, &mut intents),
        Screen::Dashboard => sections::dashboard(ctx, state, &mut intents),
    }

    dialogs(ctx, state, &mut intents);

    for intent in intents {
        handle(state, intent);
    }
}

fn handle(state: &mut AppState, intent: Intent) {
    match intent {
        Intent::Act(action) => state.request(action),
        Intent::Enter(section) => state.enter(section),
        Intent::Show(screen) => state.show(screen),
        Intent::Reload(load) => state.issue(load),
        Intent::PollMode(mode) => state.set_poll_mode(mode),
        Intent::Login(role) => state.login(role),
        Intent::Register => state.register(),
        Intent::SubmitComplaint => state.submit_complaint_form(),
        Intent::AddUser => state.add_user_form(),
        Intent::Logout => state.logout(),
        Intent::Confirm => state.confirm(),
        Intent::Decline => state.decline(),
        Intent::DismissDialog => state.dialog = None,
    }
}

pub(crate) fn notice(ui: &mut egui::Ui, notice: Option<&Notice>) {
    if let Some(notice) = notice {
        let color = match notice.kind {
            NoticeKind::Info => Color32::from_rgb(30, 102, 245),
            NoticeKind::Success => Color32::from_rgb(64, 160, 43),
            NoticeKind::Error => Color32::from_rgb(210, 15, 57),
        };
        ui.colored_label(color, &notice.text);
    }
}

fn header(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        ui.heading("SocietyVoice");
                        if let (Screen::Dashboard, Some(user)) = (state.screen, state.session.current()) {
                            ui.separator();
                            ui.label(RichText::new(&user.name).strong());
                            if user.role == Role::Resident {
                                if let Some(house) = user.house() {
                                    ui.label(format!("House: {}", house));
                                }
                            }
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if state.session.current().is_some() {
                            if ui.button("Logout").clicked() {
                                intents.push(Intent::Logout);
                            }
                            if state.screen == Screen::Dashboard {
                                if ui.button("Home").clicked() {
                                    intents.push(Intent::Show(Screen::Home));
                                }
                            } else if ui.button("Dashboard").clicked() {
                                intents.push(Intent::Show(Screen::Dashboard));
                            }
                        }
                    });
                });
            });
    });
}

fn footer(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(match state.session.current() {
                Some(user) => format!("Signed in as {} ({})", user.name, user.role),
                None => "Not signed in".to_owned(),
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&state.base_url).small());
            });
        });
    });
}

fn home(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            match state.session.current() {
                Some(user) => {
                    ui.heading(format!("Welcome back, {}", user.name));
                    ui.label(user.role.as_str().to_uppercase());
                    ui.add_space(12.0);
                    if ui.button("Go to Dashboard").clicked() {
                        intents.push(Intent::Show(Screen::Dashboard));
                    }
                }
                None => {
                    ui.heading("Welcome to SocietyVoice");
                    ui.label("Raise complaints, vote on society decisions and stay informed.");
                    ui.add_space(12.0);
                    if ui.button("Resident Login").clicked() {
                        intents.push(Intent::Show(Screen::Login));
                    }
                    if ui.button("Admin / Worker Login").clicked() {
                        intents.push(Intent::Show(Screen::AdminLogin));
                    }
                    if ui.button("Register").clicked() {
                        intents.push(Intent::Show(Screen::Register));
                    }
                }
            }
        });
    });
}

fn login(ctx: &egui::Context, state: &mut AppState, kind: Role, intents: &mut Vec<Intent>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(if kind == Role::Resident {
                "Resident Login"
            } else {
                "Admin / Worker Login"
            });
            ui.add_space(12.0);

            let forms = &mut state.forms;
            let credentials = if kind == Role::Resident {
                &mut forms.login
            } else {
                &mut forms.admin_login
            };

            egui::Grid::new("login_grid").num_columns(2).show(ui, |ui| {
                ui.label("Email:");
                ui.text_edit_singleline(&mut credentials.email);
                ui.end_row();

                ui.label("Password:");
                ui.add(egui::TextEdit::singleline(&mut credentials.password).password(true));
                ui.end_row();

                if kind != Role::Resident {
                    ui.label("Role:");
                    egui::ComboBox::from_id_salt("admin_login_role")
                        .selected_text(forms.admin_role.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut forms.admin_role, Role::Admin, "admin");
                            ui.selectable_value(&mut forms.admin_role, Role::Worker, "worker");
                        });
                    ui.end_row();
                }
            });

            ui.add_space(12.0);
            if ui.button("Login").clicked() {
                let role = if kind == Role::Resident {
                    Role::Resident
                } else {
                    state.forms.admin_role
                };
                intents.push(Intent::Login(role));
            }
            if ui.button("Back").clicked() {
                intents.push(Intent::Show(Screen::Home));
            }
            notice(ui, state.login_notice.as_ref());
        });
    });
}

fn register(ctx: &egui::Context, state: &mut AppState, intents: &mut Vec<Intent>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Register");
            ui.label("Your request will be reviewed by the society admin.");
            ui.add_space(12.0);

            let form = &mut state.forms.register;
            egui::Grid::new("register_grid").num_columns(2).show(ui, |ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Email:");
                ui.text_edit_singleline(&mut form.email);
                ui.end_row();

                ui.label("Password:");
                ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
                ui.end_row();

                ui.label("House Number:");
                ui.text_edit_singleline(&mut form.house_number);
                ui.end_row();
            });

            ui.add_space(12.0);
            if ui.button("Submit Request").clicked() {
                intents.push(Intent::Register);
            }
            if ui.button("Back").clicked() {
                intents.push(Intent::Show(Screen::Home));
            }
            notice(ui, state.register_notice.as_ref());
        });
    });
}

fn dialogs(ctx: &egui::Context, state: &AppState, intents: &mut Vec<Intent>) {
    if let Some((_, prompt)) = &state.pending_confirmation {
        egui::Window::new("Please confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        intents.push(Intent::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        intents.push(Intent::Decline);
                    }
                });
            });
    } else if let Some(message) = &state.dialog {
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    intents.push(Intent::DismissDialog);
                }
            });
    }
}
