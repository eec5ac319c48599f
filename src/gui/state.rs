use crate::actions::{dispatch, Action, Form, Outcome};
use crate::api::auth::{login, register};
use crate::config::Config;
use crate::engine::{run_load, LoadResult};
use crate::error::ApiError;
use crate::models::admin::AddUserRequest;
use crate::models::auth::{RegisterRequest, Role};
use crate::models::complaint::{ComplaintView, NewComplaint};
use crate::models::events::Event;
use crate::models::poll::PollView;
use crate::router::{dashboard_loads, Load, Section};
use crate::sequencer::{Container, RequestSequencer, Ticket};
use crate::session::SessionStore;
use crate::view::admin::{AlertCard, HouseChangeCard, RegistrationCard, UserRow};
use crate::view::complaints::ComplaintCard;
use crate::view::filter::ComplaintFilter;
use crate::view::polls::PollCard;
use crate::view::Listing;
use log::{debug, error, info};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    AdminLogin,
    Register,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    List,
    Create,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub enum Panel<T> {
    Idle,
    Loading,
    Ready(Listing<T>),
    Failed(String),
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Panel::Idle
    }
}

#[derive(Default)]
pub struct Panels {
    pub my_complaints: Panel<ComplaintCard>,
    pub all_complaints: Panel<ComplaintCard>,
    pub admin_complaints: Panel<ComplaintCard>,
    pub resident_polls: Panel<PollCard>,
    pub admin_polls: Panel<PollCard>,
    pub users: Panel<UserRow>,
    pub registrations: Panel<RegistrationCard>,
    pub house_changes: Panel<HouseChangeCard>,
    pub admin_alerts: Panel<AlertCard>,
    pub resident_alerts: Vec<AlertCard>,
}

impl Panels {
    fn complaints_mut(&mut self, container: Container) -> Option<&mut Panel<ComplaintCard>> {
        match container {
            Container::MyComplaints => Some(&mut self.my_complaints),
            Container::AllComplaints => Some(&mut self.all_complaints),
            Container::AdminComplaints => Some(&mut self.admin_complaints),
            _ => None,
        }
    }

    fn polls_mut(&mut self, container: Container) -> Option<&mut Panel<PollCard>> {
        match container {
            Container::ResidentPolls => Some(&mut self.resident_polls),
            Container::AdminPolls => Some(&mut self.admin_polls),
            _ => None,
        }
    }

    fn mark(&mut self, container: Container, loading: bool, failure: Option<String>) {
        macro_rules! set {
            ($panel:expr) => {
                *$panel = match failure {
                    Some(message) => Panel::Failed(message),
                    None if loading => Panel::Loading,
                    None => Panel::Idle,
                }
            };
        }
        match container {
            Container::MyComplaints => set!(&mut self.my_complaints),
            Container::AllComplaints => set!(&mut self.all_complaints),
            Container::AdminComplaints => set!(&mut self.admin_complaints),
            Container::ResidentPolls => set!(&mut self.resident_polls),
            Container::AdminPolls => set!(&mut self.admin_polls),
            Container::Users => set!(&mut self.users),
            Container::RegistrationRequests => set!(&mut self.registrations),
            Container::HouseChangeRequests => set!(&mut self.house_changes),
            Container::AdminAlerts => set!(&mut self.admin_alerts),
            Container::ResidentAlerts => {
                if failure.is_some() {
                    self.resident_alerts.clear();
                }
            }
        }
    }

    fn store(&mut self, container: Container, result: LoadResult) {
        match result {
            LoadResult::Complaints(listing) => {
                if let Some(panel) = self.complaints_mut(container) {
                    *panel = Panel::Ready(listing);
                }
            }
            LoadResult::Polls(listing) => {
                if let Some(panel) = self.polls_mut(container) {
                    *panel = Panel::Ready(listing);
                }
            }
            LoadResult::Users(listing) => self.users = Panel::Ready(listing),
            LoadResult::RegistrationRequests(listing) => self.registrations = Panel::Ready(listing),
            LoadResult::HouseChangeRequests(listing) => self.house_changes = Panel::Ready(listing),
            LoadResult::AdminAlerts(listing) => self.admin_alerts = Panel::Ready(listing),
            LoadResult::ResidentAlerts(alerts) => self.resident_alerts = alerts,
        }
    }
}

#[derive(Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub house_number: String,
}

#[derive(Default)]
pub struct ComplaintForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_path: String,
}

pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub house_number: String,
}

impl Default for NewUserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Resident,
            house_number: String::new(),
        }
    }
}

pub struct Forms {
    pub login: Credentials,
    pub admin_login: Credentials,
    pub admin_role: Role,
    pub register: RegisterForm,
    pub complaint: ComplaintForm,
    pub current_password: String,
    pub new_password: String,
    pub new_house_number: String,
    pub poll_question: String,
    pub poll_description: String,
    pub alert_message: String,
    pub new_user: NewUserForm,
}

impl Default for Forms {
    fn default() -> Self {
        Self {
            login: Credentials::default(),
            admin_login: Credentials::default(),
            admin_role: Role::Admin,
            register: RegisterForm::default(),
            complaint: ComplaintForm::default(),
            current_password: String::new(),
            new_password: String::new(),
            new_house_number: String::new(),
            poll_question: String::new(),
            poll_description: String::new(),
            alert_message: String::new(),
            new_user: NewUserForm::default(),
        }
    }
}

impl Forms {
    fn reset(&mut self, form: Form) {
        match form {
            Form::SubmitComplaint => self.complaint = ComplaintForm::default(),
            Form::ChangePassword => {
                self.current_password.clear();
                self.new_password.clear();
            }
            Form::HouseChange => self.new_house_number.clear(),
            Form::CreatePoll => {
                self.poll_question.clear();
                self.poll_description.clear();
            }
            Form::CreateAlert => self.alert_message.clear(),
            Form::AddUser => self.new_user = NewUserForm::default(),
        }
    }
}

pub struct AppState {
    client: reqwest::Client,
    pub base_url: String,
    runtime: tokio::runtime::Handle,
    repaint: egui::Context,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    sequencer: RequestSequencer,
    epoch: u64,
    pub session: SessionStore,
    pub screen: Screen,
    pub section: Option<Section>,
    pub poll_mode: PollMode,
    pub panels: Panels,
    pub all_filter: ComplaintFilter,
    pub admin_filter: ComplaintFilter,
    pub forms: Forms,
    pub notices: HashMap<Form, Notice>,
    pub login_notice: Option<Notice>,
    pub register_notice: Option<Notice>,
    pub pending_confirmation: Option<(Action, String)>,
    pub dialog: Option<String>,
}

impl AppState {
    pub fn new(config: &Config, runtime: tokio::runtime::Handle, repaint: egui::Context) -> Self {
        let (sender, receiver) = channel();
        let mut state = Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            runtime,
            repaint,
            sender,
            receiver,
            sequencer: RequestSequencer::default(),
            epoch: 0,
            session: SessionStore::open(&config.state_file),
            screen: Screen::Home,
            section: None,
            poll_mode: PollMode::List,
            panels: Panels::default(),
            all_filter: ComplaintFilter::default(),
            admin_filter: ComplaintFilter::default(),
            forms: Forms::default(),
            notices: HashMap::new(),
            login_notice: None,
            register_notice: None,
            pending_confirmation: None,
            dialog: None,
        };

        if let Some(user) = state.session.current() {
            info!("Restoring session for {} ({})", user.name, user.role);
            state.show(Screen::Dashboard);
        }
        state
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Event> + Send + 'static,
    {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let event = task.await;
            if let Err(e) = sender.send(event) {
                error!("Failed to deliver result to the UI: {}", e);
            }
            repaint.request_repaint();
        });
    }

    pub fn show(&mut self, screen: Screen) {
        self.login_notice = None;
        self.register_notice = None;
        if screen == Screen::Dashboard {
            if self.session.current().is_none() {
                debug!("No current user, redirecting to home");
                self.screen = Screen::Home;
                return;
            }
            self.screen = Screen::Dashboard;
            self.open_dashboard();
        } else {
            self.screen = screen;
        }
    }

    fn open_dashboard(&mut self) {
        let Some(role) = self.session.current().map(|s| s.role) else {
            return;
        };
        self.panels.resident_alerts.clear();
        for load in dashboard_loads(role) {
            self.issue(load);
        }
        if let Some(section) = self.session.landing_section() {
            self.enter(section);
        }
    }

    pub fn enter(&mut self, section: Section) {
        self.section = Some(section);
        match section {
            Section::AdminPolls => self.poll_mode = PollMode::List,
            Section::ChangeHouseNumber => {
                self.notices.remove(&Form::HouseChange);
            }
            _ => {}
        }
        for load in self.session.enter(section) {
            self.issue(load);
        }
    }

    pub fn set_poll_mode(&mut self, mode: PollMode) {
        self.poll_mode = mode;
        match mode {
            PollMode::List => self.issue(Load::Polls(PollView::Admin)),
            PollMode::Create => {
                self.forms.reset(Form::CreatePoll);
                self.notices.remove(&Form::CreatePoll);
            }
        }
    }

    /// Starts a fetch for one container; any earlier fetch for it is superseded.
    pub fn issue(&mut self, load: Load) {
        let container = load.container();
        let ticket = self.sequencer.issue(container);
        self.panels.mark(container, true, None);

        let filter = match load {
            Load::Complaints(ComplaintView::All) => self.all_filter.clone(),
            Load::Complaints(ComplaintView::Admin | ComplaintView::Worker) => self.admin_filter.clone(),
            _ => ComplaintFilter::default(),
        };
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let session = self.session.current().cloned();

        self.spawn(async move {
            let result = run_load(&client, &base_url, session.as_ref(), load, &filter).await;
            Event::Loaded { ticket, result }
        });
    }

    pub fn login(&mut self, role: Role) {
        let credentials = if role == Role::Resident {
            &self.forms.login
        } else {
            &self.forms.admin_login
        };
        let email = credentials.email.trim().to_owned();
        let password = credentials.password.clone();
        if email.is_empty() || password.is_empty() {
            self.login_notice = Some(Notice::new(NoticeKind::Error, "Email and password are required"));
            return;
        }
        self.login_notice = None;

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        self.spawn(async move { Event::LoggedIn(login(&client, &base_url, &email, &password, role).await) });
    }

    pub fn register(&mut self) {
        let form = &self.forms.register;
        let request = RegisterRequest {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
            house_number: form.house_number.trim().to_owned(),
        };
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() || request.house_number.is_empty() {
            self.register_notice = Some(Notice::new(NoticeKind::Error, "All fields are required"));
            return;
        }
        self.register_notice = None;

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        self.spawn(async move { Event::Registered(register(&client, &base_url, &request).await) });
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.sequencer.reset();
        self.epoch += 1;
        self.panels = Panels::default();
        self.forms = Forms::default();
        self.notices.clear();
        self.pending_confirmation = None;
        self.section = None;
        self.show(Screen::Home);
    }

    pub fn submit_complaint_form(&mut self) {
        let form = &self.forms.complaint;
        if form.title.trim().is_empty() || form.description.trim().is_empty() || form.category.is_empty() {
            self.require_fields(Form::SubmitComplaint);
            return;
        }
        let image = form.image_path.trim();
        let action = Action::SubmitComplaint(NewComplaint {
            title: form.title.trim().to_owned(),
            description: form.description.trim().to_owned(),
            category: form.category.clone(),
            image: (!image.is_empty()).then(|| PathBuf::from(image)),
        });
        self.request(action);
    }

    pub fn add_user_form(&mut self) {
        let form = &self.forms.new_user;
        if form.name.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
            self.require_fields(Form::AddUser);
            return;
        }
        let action = Action::AddUser(AddUserRequest {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
            role: form.role,
            house_number: form.house_number.trim().to_owned(),
        });
        self.request(action);
    }

    fn require_fields(&mut self, form: Form) {
        self.notices
            .insert(form, Notice::new(NoticeKind::Error, "Please fill in all required fields."));
    }

    /// Entry point for every mutation: role check, then confirmation, then dispatch.
    pub fn request(&mut self, action: Action) {
        if let Err(e) = action.authorize(self.session.current()) {
            self.report_failure(&action, e);
            return;
        }
        match action.confirmation() {
            Some(prompt) => self.pending_confirmation = Some((action, prompt)),
            None => self.send(action),
        }
    }

    pub fn confirm(&mut self) {
        if let Some((action, _)) = self.pending_confirmation.take() {
            self.send(action);
        }
    }

    pub fn decline(&mut self) {
        if let Some((action, _)) = self.pending_confirmation.take() {
            debug!("User declined {}", action.kind());
        }
    }

    fn send(&mut self, action: Action) {
        if let Some(form) = action.form() {
            let text = if form == Form::SubmitComplaint {
                "Submitting complaint..."
            } else {
                "Working..."
            };
            self.notices.insert(form, Notice::new(NoticeKind::Info, text));
        }

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let session = self.session.current().cloned();
        let epoch = self.epoch;
        self.spawn(async move {
            let result = dispatch(&client, &base_url, session.as_ref(), &action).await;
            Event::Dispatched { epoch, action, result }
        });
    }

    pub fn poll_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Loaded { ticket, result } => self.apply_load(ticket, result),
            Event::LoggedIn(Ok(session)) => {
                info!("Logged in as {} ({})", session.name, session.role);
                self.epoch += 1;
                self.session.login(session);
                self.forms.login = Credentials::default();
                self.forms.admin_login = Credentials::default();
                self.show(Screen::Dashboard);
            }
            Event::LoggedIn(Err(e)) => {
                self.login_notice = Some(Notice::new(NoticeKind::Error, e.to_string()));
            }
            Event::Registered(Ok(reply)) => {
                self.forms.register = RegisterForm::default();
                self.register_notice = Some(Notice::new(
                    NoticeKind::Success,
                    reply.message.unwrap_or_else(|| "Registration request submitted.".to_owned()),
                ));
            }
            Event::Registered(Err(e)) => {
                self.register_notice = Some(Notice::new(NoticeKind::Error, e.to_string()));
            }
            Event::Dispatched { epoch, action, .. } if epoch != self.epoch => {
                debug!("Dropping {} result from an earlier session", action.kind());
            }
            Event::Dispatched { action, result, .. } => match result {
                Ok(outcome) => self.apply_outcome(&action, outcome),
                Err(e) => self.report_failure(&action, e),
            },
        }
    }

    fn apply_load(&mut self, ticket: Ticket, result: Result<LoadResult, ApiError>) {
        if !self.sequencer.is_current(&ticket) {
            debug!("Dropping stale response for {:?}", ticket.container);
            return;
        }
        match result {
            Ok(result) => self.panels.store(ticket.container, result),
            Err(e) => self.panels.mark(ticket.container, false, Some(e.to_string())),
        }
    }

    fn apply_outcome(&mut self, action: &Action, outcome: Outcome) {
        if let Some(patch) = &outcome.like {
            for container in [Container::MyComplaints, Container::AllComplaints, Container::AdminComplaints] {
                if let Some(Panel::Ready(listing)) = self.panels.complaints_mut(container) {
                    listing
                        .items_mut()
                        .iter_mut()
                        .filter(|card| card.id == patch.complaint_id)
                        .for_each(|card| card.apply_like(&patch.reply));
                }
            }
        }

        match (action.form(), outcome.message) {
            (Some(form), message) => {
                self.forms.reset(form);
                let text = message.unwrap_or_else(|| "Done.".to_owned());
                self.notices.insert(form, Notice::new(NoticeKind::Success, text));
                if form == Form::CreatePoll {
                    self.poll_mode = PollMode::List;
                }
            }
            (None, Some(message)) => self.dialog = Some(message),
            (None, None) => {}
        }

        for load in outcome.refresh {
            self.issue(load);
        }
        if let Some(section) = outcome.then_enter {
            self.enter(section);
        }
    }

    fn report_failure(&mut self, action: &Action, e: ApiError) {
        let text = match e {
            ApiError::Unauthorized(message) => message,
            other => format!("{}: {}", action.failure_context(), other),
        };
        match action.form() {
            Some(form) => {
                self.notices.insert(form, Notice::new(NoticeKind::Error, text));
            }
            None => self.dialog = Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::LikePatch;
    use crate::models::auth::Session;
    use crate::models::complaint::{ComplaintStatus, LikeAction, LikeResponse};
    use crate::models::RecordId;

    fn app(dir: &tempfile::TempDir) -> AppState {
        let config = Config {
            api_base_url: "http://127.0.0.1:9".to_owned(),
            state_file: dir.path().join("state.json"),
            window_title: "SocietyVoice".to_owned(),
        };
        AppState::new(&config, tokio::runtime::Handle::current(), egui::Context::default())
    }

    fn user(id: i64, role: Role) -> Session {
        Session {
            id: RecordId::Number(id),
            name: format!("User {id}"),
            role,
            email: None,
            house_number: Some("B-12".to_owned()),
        }
    }

    fn card(id: i64, like_count: u64) -> ComplaintCard {
        ComplaintCard {
            id: RecordId::Number(id),
            title: "Leak".to_owned(),
            poll_indicator: false,
            filed_by: "Asha (House: B-12)".to_owned(),
            category: "plumbing".to_owned(),
            status: ComplaintStatus::Open,
            description: "Water under the sink".to_owned(),
            image_url: None,
            filed_on: "05 Mar 2024".to_owned(),
            like_count,
            liked: false,
            controls: Vec::new(),
        }
    }

    fn ready(cards: Vec<ComplaintCard>) -> Panel<ComplaintCard> {
        Panel::Ready(Listing::Items(cards))
    }

    fn delete_outcome() -> Result<Outcome, ApiError> {
        Ok(Outcome {
            message: Some("Complaint #5 deleted successfully.".to_owned()),
            refresh: vec![Load::Complaints(ComplaintView::Admin)],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_superseded_load_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app(&dir);
        state.session.login(user(1, Role::Resident));

        let first = state.sequencer.issue(Container::AllComplaints);
        let second = state.sequencer.issue(Container::AllComplaints);

        state.apply(Event::Loaded {
            ticket: second,
            result: Ok(LoadResult::Complaints(Listing::Items(vec![card(2, 0)]))),
        });
        state.apply(Event::Loaded {
            ticket: first,
            result: Ok(LoadResult::Complaints(Listing::Items(vec![card(1, 0)]))),
        });
        state.apply(Event::Loaded {
            ticket: first,
            result: Err(ApiError::unauthorized("late failure")),
        });

        match &state.panels.all_complaints {
            Panel::Ready(listing) => {
                assert_eq!(listing.items().len(), 1);
                assert_eq!(listing.items()[0].id, RecordId::Number(2));
            }
            _ => panic!("all-complaints panel should hold the newest result"),
        }
    }

    #[tokio::test]
    async fn test_like_patches_every_complaint_panel() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app(&dir);
        state.session.login(user(1, Role::Admin));
        state.panels.my_complaints = ready(vec![card(5, 3), card(6, 1)]);
        state.panels.all_complaints = ready(vec![card(5, 3)]);
        state.panels.admin_complaints = ready(vec![card(6, 1), card(5, 3)]);

        let epoch = state.epoch;
        state.apply(Event::Dispatched {
            epoch,
            action: Action::Like {
                complaint_id: RecordId::Number(5),
            },
            result: Ok(Outcome {
                like: Some(LikePatch {
                    complaint_id: RecordId::Number(5),
                    reply: LikeResponse {
                        action: LikeAction::Liked,
                        new_like_count: Some(4),
                    },
                }),
                ..Default::default()
            }),
        });

        for panel in [
            &state.panels.my_complaints,
            &state.panels.all_complaints,
            &state.panels.admin_complaints,
        ] {
            let Panel::Ready(listing) = panel else {
                panic!("a like must not reload the listing");
            };
            for card in listing.items() {
                if card.id == RecordId::Number(5) {
                    assert!(card.liked);
                    assert_eq!(card.like_count, 4);
                } else {
                    assert!(!card.liked);
                    assert_eq!(card.like_count, 1);
                }
            }
        }
        assert!(state.dialog.is_none());
    }

    #[tokio::test]
    async fn test_mutation_reissues_its_refresh() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app(&dir);
        state.session.login(user(1, Role::Admin));
        state.panels.admin_complaints = ready(vec![card(5, 0)]);

        let epoch = state.epoch;
        state.apply(Event::Dispatched {
            epoch,
            action: Action::DeleteComplaint {
                complaint_id: RecordId::Number(5),
            },
            result: delete_outcome(),
        });

        assert_eq!(state.dialog.as_deref(), Some("Complaint #5 deleted successfully."));
        assert!(matches!(state.panels.admin_complaints, Panel::Loading));
    }

    #[tokio::test]
    async fn test_form_failure_stays_inline() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app(&dir);
        state.session.login(user(1, Role::Admin));

        let epoch = state.epoch;
        state.apply(Event::Dispatched {
            epoch,
            action: Action::CreateAlert {
                message: "Water off tomorrow".to_owned(),
            },
            result: Err(ApiError::Server {
                status: 500,
                message: "Database not connected".to_owned(),
            }),
        });

        let notice = state.notices.get(&Form::CreateAlert).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to create alert: Database not connected");
        assert!(state.dialog.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_state() {
        let dir = tempfile::tempdir().unwrap();
        let state_file = dir.path().join("state.json");
        let mut state = app(&dir);
        state.session.login(user(1, Role::Admin));
        state.screen = Screen::Dashboard;
        state.section = Some(Section::AdminComplaints);
        state.panels.admin_complaints = ready(vec![card(5, 0)]);
        state.forms.alert_message = "Water off tomorrow".to_owned();
        state
            .notices
            .insert(Form::CreateAlert, Notice::new(NoticeKind::Info, "Working..."));
        let ticket = state.sequencer.issue(Container::AdminComplaints);
        assert!(state_file.exists());

        state.logout();

        assert_eq!(state.screen, Screen::Home);
        assert!(state.section.is_none());
        assert!(state.session.current().is_none());
        assert!(matches!(state.panels.admin_complaints, Panel::Idle));
        assert!(state.forms.alert_message.is_empty());
        assert!(state.notices.is_empty());
        assert!(state.pending_confirmation.is_none());
        assert!(!state.sequencer.is_current(&ticket));
        assert!(!state_file.exists());
    }

    #[tokio::test]
    async fn test_results_from_before_logout_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app(&dir);
        state.session.login(user(1, Role::Admin));
        let stale = state.epoch;

        state.logout();
        state.apply(Event::Dispatched {
            epoch: stale,
            action: Action::DeleteComplaint {
                complaint_id: RecordId::Number(5),
            },
            result: delete_outcome(),
        });
        assert!(state.dialog.is_none());
        assert!(matches!(state.panels.admin_complaints, Panel::Idle));

        state.apply(Event::LoggedIn(Ok(user(2, Role::Resident))));
        assert_eq!(state.screen, Screen::Dashboard);
        state.apply(Event::Dispatched {
            epoch: stale,
            action: Action::DeleteComplaint {
                complaint_id: RecordId::Number(5),
            },
            result: delete_outcome(),
        });
        assert!(state.dialog.is_none());
        assert!(matches!(state.panels.admin_complaints, Panel::Idle));
    }
}
