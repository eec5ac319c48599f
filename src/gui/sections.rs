use super::state::{AppState, Panel, PollMode};
use super::{notice, Intent};
use crate::actions::{Action, Form};
use crate::models::auth::Role;
use crate::models::complaint::{ComplaintStatus, ComplaintView};
use crate::models::Decision;
use crate::router::{Load, Section};
use crate::view::admin::AlertCard;
use crate::view::complaints::{CardControl, ComplaintCard, POLL_INDICATOR};
use crate::view::filter::{ComplaintFilter, CATEGORIES};
use crate::view::polls::{PollBody, PollCard};
use crate::view::Listing;
use egui::{Color32, RichText, Ui};

const ERROR_COLOR: Color32 = Color32::from_rgb(210, 15, 57);

pub(super) fn dashboard(ctx: &egui::Context, state: &mut AppState, intents: &mut Vec<Intent>) {
    let Some(role) = state.session.current().map(|s| s.role) else {
        return;
    };

    egui::SidePanel::left("navigation")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            for section in Section::navigation(role) {
                let selected = state.section == Some(*section);
                if ui.selectable_label(selected, section.title(role)).clicked() {
                    intents.push(Intent::Enter(*section));
                }
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        if role == Role::Resident && !state.panels.resident_alerts.is_empty() {
            resident_alerts(ui, &state.panels.resident_alerts);
            ui.separator();
        }

        let Some(section) = state.section else {
            return;
        };
        ui.heading(section.title(role));
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match section {
                Section::SubmitComplaint => submit_complaint(ui, state, intents),
                Section::MyComplaints => complaints(ui, &state.panels.my_complaints, intents),
                Section::AllComplaints => {
                    filter_bar(ui, "all", &mut state.all_filter, Load::Complaints(ComplaintView::All), intents);
                    complaints(ui, &state.panels.all_complaints, intents);
                }
                Section::SocietyPolls => polls(ui, &state.panels.resident_polls, intents),
                Section::ChangeHouseNumber => change_house_number(ui, state, intents),
                Section::ChangePassword => change_password(ui, state, intents),
                Section::AdminComplaints => {
                    let load = Load::Complaints(ComplaintView::triage_for(role));
                    filter_bar(ui, "admin", &mut state.admin_filter, load, intents);
                    complaints(ui, &state.panels.admin_complaints, intents);
                }
                Section::AdminPolls => admin_polls(ui, state, intents),
                Section::ManageAlerts => manage_alerts(ui, state, intents),
                Section::UserManagement => user_management(ui, state, intents),
                Section::RegistrationRequests => registration_requests(ui, state, intents),
                Section::HouseChangeRequests => house_change_requests(ui, state, intents),
            });
    });
}

fn listing<T>(ui: &mut Ui, panel: &Panel<T>, mut row: impl FnMut(&mut Ui, &T)) {
    match panel {
        Panel::Idle => {}
        Panel::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        Panel::Failed(message) => {
            ui.colored_label(ERROR_COLOR, message);
        }
        Panel::Ready(Listing::Empty(message)) => {
            ui.label(*message);
        }
        Panel::Ready(Listing::Items(items)) => {
            for item in items {
                row(ui, item);
                ui.add_space(6.0);
            }
        }
    }
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        add_contents(ui);
    });
}

fn resident_alerts(ui: &mut Ui, alerts: &[AlertCard]) {
    ui.label(RichText::new("Society Alerts").strong());
    for alert in alerts {
        card(ui, |ui| {
            ui.label(&alert.message);
            ui.label(RichText::new(&alert.posted).small());
        });
    }
}

fn filter_bar(ui: &mut Ui, salt: &str, filter: &mut ComplaintFilter, load: Load, intents: &mut Vec<Intent>) {
    ui.horizontal_wrapped(|ui| {
        egui::ComboBox::from_id_salt(format!("{salt}_category"))
            .selected_text(filter.category.as_deref().unwrap_or("All categories"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.category, None, "All categories");
                for category in CATEGORIES {
                    ui.selectable_value(&mut filter.category, Some(category.to_owned()), category);
                }
            });

        egui::ComboBox::from_id_salt(format!("{salt}_status"))
            .selected_text(filter.status.as_ref().map_or("All statuses", |s| s.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.status, None, "All statuses");
                for status in ComplaintStatus::SELECTABLE {
                    let label = status.label().to_owned();
                    ui.selectable_value(&mut filter.status, Some(status), label);
                }
            });

        ui.add(
            egui::TextEdit::singleline(&mut filter.date_prefix)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut filter.house)
                .hint_text("House number")
                .desired_width(100.0),
        );

        if ui.button("Apply").clicked() {
            intents.push(Intent::Reload(load));
        }
        if ui.add_enabled(!filter.is_empty(), egui::Button::new("Clear")).clicked() {
            *filter = ComplaintFilter::default();
            intents.push(Intent::Reload(load));
        }
    });
    ui.add_space(8.0);
}

fn complaints(ui: &mut Ui, panel: &Panel<ComplaintCard>, intents: &mut Vec<Intent>) {
    if let Panel::Ready(cards) = panel {
        let count = cards.items().len();
        if count > 0 {
            ui.label(RichText::new(format!("Showing {count} complaint(s)")).small());
        }
    }
    listing(ui, panel, |ui, complaint| complaint_card(ui, complaint, intents));
}

fn complaint_card(ui: &mut Ui, complaint: &ComplaintCard, intents: &mut Vec<Intent>) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("#{} {}", complaint.id, complaint.title)).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(complaint.status.label());
            });
        });
        if complaint.poll_indicator {
            ui.label(RichText::new(POLL_INDICATOR).italics());
        }
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("Filed by: {}", complaint.filed_by)).small());
            ui.label(RichText::new(format!("Category: {}", complaint.category)).small());
            ui.label(RichText::new(format!("Filed on: {}", complaint.filed_on)).small());
        });
        ui.label(&complaint.description);
        if let Some(url) = &complaint.image_url {
            ui.hyperlink_to("View attached image", url);
        }

        ui.horizontal(|ui| {
            if ui
                .selectable_label(complaint.liked, format!("👍 {}", complaint.like_count))
                .clicked()
            {
                intents.push(Intent::Act(Action::Like {
                    complaint_id: complaint.id.clone(),
                }));
            }

            for control in &complaint.controls {
                match control {
                    CardControl::StatusSelect(current) => {
                        let mut selected = current.clone();
                        egui::ComboBox::from_id_salt(format!("status_{}", complaint.id))
                            .selected_text(selected.label().to_owned())
                            .show_ui(ui, |ui| {
                                for status in ComplaintStatus::SELECTABLE {
                                    let label = status.label().to_owned();
                                    ui.selectable_value(&mut selected, status, label);
                                }
                            });
                        if selected != *current {
                            intents.push(Intent::Act(Action::ChangeStatus {
                                complaint_id: complaint.id.clone(),
                                status: selected,
                            }));
                        }
                    }
                    CardControl::CreatePoll => {
                        if ui.button("Create Poll").clicked() {
                            intents.push(Intent::Act(Action::CreatePollFromComplaint {
                                title: complaint.title.clone(),
                            }));
                        }
                    }
                    CardControl::Delete => {
                        if ui.button("Delete").clicked() {
                            intents.push(Intent::Act(Action::DeleteComplaint {
                                complaint_id: complaint.id.clone(),
                            }));
                        }
                    }
                    CardControl::Reopen => {
                        if ui.button("Reopen").clicked() {
                            intents.push(Intent::Act(Action::Reopen {
                                complaint_id: complaint.id.clone(),
                            }));
                        }
                    }
                }
            }
        });
    });
}

fn polls(ui: &mut Ui, panel: &Panel<PollCard>, intents: &mut Vec<Intent>) {
    listing(ui, panel, |ui, poll| poll_card(ui, poll, intents));
}

fn poll_card(ui: &mut Ui, poll: &PollCard, intents: &mut Vec<Intent>) {
    card(ui, |ui| {
        ui.label(RichText::new(&poll.question).strong());
        if let Some(description) = &poll.description {
            ui.label(description);
        }

        match &poll.body {
            PollBody::Vote(options) => {
                ui.horizontal(|ui| {
                    for option in options {
                        if ui.button(option).clicked() {
                            intents.push(Intent::Act(Action::Vote {
                                poll_id: poll.id.clone(),
                                option: option.clone(),
                            }));
                        }
                    }
                });
            }
            PollBody::Results(results) => {
                for result in results {
                    let text = if result.is_user_vote {
                        RichText::new(&result.label).strong()
                    } else {
                        RichText::new(&result.label)
                    };
                    ui.label(text);
                    ui.add(egui::ProgressBar::new((result.percentage / 100.0) as f32));
                }
            }
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new(&poll.total_label).small());
            ui.label(RichText::new(&poll.posted_by).small());
            if poll.can_delete && ui.button("Delete Poll").clicked() {
                intents.push(Intent::Act(Action::DeletePoll {
                    poll_id: poll.id.clone(),
                }));
            }
        });
    });
}

fn submit_complaint(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    let form = &mut state.forms.complaint;
    egui::Grid::new("complaint_form").num_columns(2).show(ui, |ui| {
        ui.label("Title:");
        ui.text_edit_singleline(&mut form.title);
        ui.end_row();

        ui.label("Category:");
        let selected = if form.category.is_empty() {
            "Select category"
        } else {
            form.category.as_str()
        };
        egui::ComboBox::from_id_salt("complaint_category")
            .selected_text(selected.to_owned())
            .show_ui(ui, |ui| {
                for category in CATEGORIES {
                    ui.selectable_value(&mut form.category, category.to_owned(), category);
                }
            });
        ui.end_row();

        ui.label("Description:");
        ui.text_edit_multiline(&mut form.description);
        ui.end_row();

        ui.label("Image (optional):");
        ui.add(egui::TextEdit::singleline(&mut form.image_path).hint_text("/path/to/photo.jpg"));
        ui.end_row();
    });

    ui.add_space(8.0);
    if ui.button("Submit Complaint").clicked() {
        intents.push(Intent::SubmitComplaint);
    }
    notice(ui, state.notices.get(&Form::SubmitComplaint));
}

fn change_password(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    let forms = &mut state.forms;
    egui::Grid::new("password_form").num_columns(2).show(ui, |ui| {
        ui.label("Current Password:");
        ui.add(egui::TextEdit::singleline(&mut forms.current_password).password(true));
        ui.end_row();

        ui.label("New Password:");
        ui.add(egui::TextEdit::singleline(&mut forms.new_password).password(true));
        ui.end_row();
    });

    ui.add_space(8.0);
    let ready = !forms.current_password.is_empty() && !forms.new_password.is_empty();
    if ui.add_enabled(ready, egui::Button::new("Change Password")).clicked() {
        intents.push(Intent::Act(Action::ChangePassword {
            current: forms.current_password.clone(),
            new: forms.new_password.clone(),
        }));
    }
    notice(ui, state.notices.get(&Form::ChangePassword));
}

fn change_house_number(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    let current = state
        .session
        .current()
        .and_then(|s| s.house())
        .unwrap_or("Not set")
        .to_owned();
    ui.label(format!("Current house number: {}", current));
    ui.add_space(4.0);

    let forms = &mut state.forms;
    ui.horizontal(|ui| {
        ui.label("New house number:");
        ui.text_edit_singleline(&mut forms.new_house_number);
    });

    ui.add_space(8.0);
    let requested = forms.new_house_number.trim();
    if ui
        .add_enabled(!requested.is_empty(), egui::Button::new("Request Change"))
        .clicked()
    {
        intents.push(Intent::Act(Action::RequestHouseChange {
            new_house_number: requested.to_owned(),
        }));
    }
    notice(ui, state.notices.get(&Form::HouseChange));
}

fn admin_polls(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    match state.poll_mode {
        PollMode::List => {
            if ui.button("Create New Poll").clicked() {
                intents.push(Intent::PollMode(PollMode::Create));
            }
            ui.add_space(8.0);
            notice(ui, state.notices.get(&Form::CreatePoll));
            polls(ui, &state.panels.admin_polls, intents);
        }
        PollMode::Create => {
            let forms = &mut state.forms;
            egui::Grid::new("poll_form").num_columns(2).show(ui, |ui| {
                ui.label("Question:");
                ui.text_edit_singleline(&mut forms.poll_question);
                ui.end_row();

                ui.label("Description:");
                ui.text_edit_multiline(&mut forms.poll_description);
                ui.end_row();
            });
            ui.label(RichText::new("Residents vote Yes or No.").small());

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let question = forms.poll_question.trim();
                if ui
                    .add_enabled(!question.is_empty(), egui::Button::new("Create Poll"))
                    .clicked()
                {
                    intents.push(Intent::Act(Action::CreatePoll {
                        question: question.to_owned(),
                        description: forms.poll_description.trim().to_owned(),
                    }));
                }
                if ui.button("Back to Polls").clicked() {
                    intents.push(Intent::PollMode(PollMode::List));
                }
            });
            notice(ui, state.notices.get(&Form::CreatePoll));
        }
    }
}

fn manage_alerts(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    ui.label("New alert:");
    ui.text_edit_multiline(&mut state.forms.alert_message);
    let message = state.forms.alert_message.trim();
    if ui
        .add_enabled(!message.is_empty(), egui::Button::new("Post Alert"))
        .clicked()
    {
        intents.push(Intent::Act(Action::CreateAlert {
            message: message.to_owned(),
        }));
    }
    notice(ui, state.notices.get(&Form::CreateAlert));

    ui.separator();
    listing(ui, &state.panels.admin_alerts, |ui, alert| {
        card(ui, |ui| {
            ui.label(&alert.message);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&alert.posted).small());
                if ui.button("Delete").clicked() {
                    intents.push(Intent::Act(Action::DeleteAlert {
                        alert_id: alert.id.clone(),
                    }));
                }
            });
        });
    });
}

fn user_management(ui: &mut Ui, state: &mut AppState, intents: &mut Vec<Intent>) {
    ui.label(RichText::new("Add User").strong());
    let form = &mut state.forms.new_user;
    egui::Grid::new("new_user_form").num_columns(2).show(ui, |ui| {
        ui.label("Name:");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();

        ui.label("Email:");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password:");
        ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        ui.end_row();

        ui.label("Role:");
        egui::ComboBox::from_id_salt("new_user_role")
            .selected_text(form.role.as_str())
            .show_ui(ui, |ui| {
                for role in [Role::Resident, Role::Worker, Role::Admin] {
                    ui.selectable_value(&mut form.role, role, role.as_str());
                }
            });
        ui.end_row();

        ui.label("House Number:");
        ui.text_edit_singleline(&mut form.house_number);
        ui.end_row();
    });
    if ui.button("Add User").clicked() {
        intents.push(Intent::AddUser);
    }
    notice(ui, state.notices.get(&Form::AddUser));

    ui.separator();
    match &state.panels.users {
        Panel::Ready(Listing::Items(users)) => {
            egui::Grid::new("users_table")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    for header in ["Name", "Email", "Role", "House", ""] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for user in users {
                        ui.label(&user.name);
                        ui.label(&user.email);
                        ui.label(user.role.as_str());
                        ui.label(&user.house);
                        if ui.button("Delete").clicked() {
                            intents.push(Intent::Act(Action::DeleteUser {
                                user_id: user.id.clone(),
                                name: user.name.clone(),
                            }));
                        }
                        ui.end_row();
                    }
                });
        }
        other => listing(ui, other, |_, _| {}),
    }
}

fn decision_buttons(ui: &mut Ui, mut act: impl FnMut(Decision)) {
    ui.horizontal(|ui| {
        if ui.button("Approve").clicked() {
            act(Decision::Approve);
        }
        if ui.button("Reject").clicked() {
            act(Decision::Reject);
        }
    });
}

fn registration_requests(ui: &mut Ui, state: &AppState, intents: &mut Vec<Intent>) {
    listing(ui, &state.panels.registrations, |ui, request| {
        card(ui, |ui| {
            ui.label(RichText::new(&request.heading).strong());
            ui.label(&request.email);
            ui.label(RichText::new(&request.requested_on).small());
            decision_buttons(ui, |decision| {
                intents.push(Intent::Act(Action::ProcessRegistration {
                    request_id: request.id.clone(),
                    decision,
                }));
            });
        });
    });
}

fn house_change_requests(ui: &mut Ui, state: &AppState, intents: &mut Vec<Intent>) {
    listing(ui, &state.panels.house_changes, |ui, request| {
        card(ui, |ui| {
            ui.label(RichText::new(&request.heading).strong());
            ui.label(format!("Current: {}", request.current_house));
            ui.label(format!("Requested: {}", request.requested_house));
            ui.label(RichText::new(&request.requested_on).small());
            decision_buttons(ui, |decision| {
                intents.push(Intent::Act(Action::ProcessHouseChange {
                    request_id: request.id.clone(),
                    decision,
                }));
            });
        });
    });
}
