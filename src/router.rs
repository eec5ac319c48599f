use crate::models::auth::Role;
use crate::models::complaint::ComplaintView;
use crate::models::poll::PollView;
use crate::sequencer::Container;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SubmitComplaint,
    MyComplaints,
    AllComplaints,
    SocietyPolls,
    ChangeHouseNumber,
    ChangePassword,
    AdminComplaints,
    AdminPolls,
    ManageAlerts,
    UserManagement,
    RegistrationRequests,
    HouseChangeRequests,
}

/// A fetch that refreshes one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Load {
    Complaints(ComplaintView),
    Polls(PollView),
    Users,
    RegistrationRequests,
    HouseChangeRequests,
    AdminAlerts,
    ResidentAlerts,
}

impl Load {
    pub fn container(&self) -> Container {
        match self {
            Load::Complaints(ComplaintView::My) => Container::MyComplaints,
            Load::Complaints(ComplaintView::All) => Container::AllComplaints,
            Load::Complaints(ComplaintView::Admin | ComplaintView::Worker) => Container::AdminComplaints,
            Load::Polls(PollView::Resident) => Container::ResidentPolls,
            Load::Polls(PollView::Admin) => Container::AdminPolls,
            Load::Users => Container::Users,
            Load::RegistrationRequests => Container::RegistrationRequests,
            Load::HouseChangeRequests => Container::HouseChangeRequests,
            Load::AdminAlerts => Container::AdminAlerts,
            Load::ResidentAlerts => Container::ResidentAlerts,
        }
    }
}

const RESIDENT_NAV: [Section; 6] = [
    Section::SubmitComplaint,
    Section::MyComplaints,
    Section::AllComplaints,
    Section::SocietyPolls,
    Section::ChangeHouseNumber,
    Section::ChangePassword,
];

const WORKER_NAV: [Section; 2] = [Section::AdminComplaints, Section::ChangePassword];

const ADMIN_NAV: [Section; 7] = [
    Section::AdminComplaints,
    Section::AdminPolls,
    Section::ManageAlerts,
    Section::UserManagement,
    Section::RegistrationRequests,
    Section::HouseChangeRequests,
    Section::ChangePassword,
];

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::SubmitComplaint => "submit-complaint",
            Section::MyComplaints => "my-complaints",
            Section::AllComplaints => "all-complaints",
            Section::SocietyPolls => "society-polls",
            Section::ChangeHouseNumber => "change-house-number",
            Section::ChangePassword => "change-password",
            Section::AdminComplaints => "admin-complaints",
            Section::AdminPolls => "admin-polls",
            Section::ManageAlerts => "manage-alerts",
            Section::UserManagement => "user-management",
            Section::RegistrationRequests => "registration-requests",
            Section::HouseChangeRequests => "house-change-requests",
        }
    }

    pub fn title(&self, role: Role) -> &'static str {
        match self {
            Section::SubmitComplaint => "Submit Complaint",
            Section::MyComplaints => "My Complaints",
            Section::AllComplaints => "All Complaints",
            Section::SocietyPolls => "Society Polls",
            Section::ChangeHouseNumber => "Change House Number",
            Section::ChangePassword => "Change Password",
            Section::AdminComplaints if role == Role::Admin => "My Society Complaints",
            Section::AdminComplaints => "Society Complaints",
            Section::AdminPolls => "Manage Polls",
            Section::ManageAlerts => "Manage Alerts",
            Section::UserManagement => "User Management",
            Section::RegistrationRequests => "Registration Requests",
            Section::HouseChangeRequests => "House Change Requests",
        }
    }

    pub fn navigation(role: Role) -> &'static [Section] {
        match role {
            Role::Resident => &RESIDENT_NAV,
            Role::Worker => &WORKER_NAV,
            Role::Admin => &ADMIN_NAV,
        }
    }

    pub fn default_for(role: Role) -> Section {
        match role {
            Role::Resident => Section::SubmitComplaint,
            Role::Worker | Role::Admin => Section::AdminComplaints,
        }
    }

    pub fn visible_to(&self, role: Role) -> bool {
        Section::navigation(role).contains(self)
    }

    /// Fetches to issue every time this section becomes active.
    pub fn loads(&self, role: Role) -> Vec<Load> {
        match self {
            Section::MyComplaints => vec![Load::Complaints(ComplaintView::My)],
            Section::AllComplaints => vec![Load::Complaints(ComplaintView::All)],
            Section::SocietyPolls => vec![Load::Polls(PollView::Resident)],
            Section::AdminComplaints => vec![Load::Complaints(ComplaintView::triage_for(role))],
            Section::AdminPolls => vec![Load::Polls(PollView::Admin)],
            Section::ManageAlerts => vec![Load::AdminAlerts],
            Section::UserManagement => vec![Load::Users],
            Section::RegistrationRequests => vec![Load::RegistrationRequests],
            Section::HouseChangeRequests => vec![Load::HouseChangeRequests],
            Section::SubmitComplaint | Section::ChangeHouseNumber | Section::ChangePassword => Vec::new(),
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SECTIONS
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

const ALL_SECTIONS: [Section; 12] = [
    Section::SubmitComplaint,
    Section::MyComplaints,
    Section::AllComplaints,
    Section::SocietyPolls,
    Section::ChangeHouseNumber,
    Section::ChangePassword,
    Section::AdminComplaints,
    Section::AdminPolls,
    Section::ManageAlerts,
    Section::UserManagement,
    Section::RegistrationRequests,
    Section::HouseChangeRequests,
];

/// Fetches issued once when the dashboard opens, on top of the landing section's own.
pub fn dashboard_loads(role: Role) -> Vec<Load> {
    match role {
        Role::Resident => vec![Load::ResidentAlerts],
        Role::Worker => Vec::new(),
        Role::Admin => vec![Load::Users, Load::RegistrationRequests],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in ALL_SECTIONS {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
        assert!("ai-mode".parse::<Section>().is_err());
    }

    #[test]
    fn test_default_sections() {
        assert_eq!(Section::default_for(Role::Resident), Section::SubmitComplaint);
        assert_eq!(Section::default_for(Role::Worker), Section::AdminComplaints);
        assert_eq!(Section::default_for(Role::Admin), Section::AdminComplaints);
    }

    #[test]
    fn test_defaults_are_visible() {
        for role in [Role::Resident, Role::Worker, Role::Admin] {
            assert!(Section::default_for(role).visible_to(role));
        }
        assert!(!Section::UserManagement.visible_to(Role::Worker));
        assert!(!Section::AdminComplaints.visible_to(Role::Resident));
    }

    #[test]
    fn test_admin_complaints_view_follows_role() {
        assert_eq!(
            Section::AdminComplaints.loads(Role::Admin),
            vec![Load::Complaints(ComplaintView::Admin)]
        );
        assert_eq!(
            Section::AdminComplaints.loads(Role::Worker),
            vec![Load::Complaints(ComplaintView::Worker)]
        );
        assert_eq!(Section::AdminComplaints.title(Role::Worker), "Society Complaints");
    }

    #[test]
    fn test_every_data_section_issues_a_load() {
        for section in ALL_SECTIONS {
            let form_only = matches!(
                section,
                Section::SubmitComplaint | Section::ChangeHouseNumber | Section::ChangePassword
            );
            assert_eq!(section.loads(Role::Admin).is_empty(), form_only, "{section:?}");
        }
    }

    #[test]
    fn test_staff_views_share_a_container() {
        assert_eq!(
            Load::Complaints(ComplaintView::Admin).container(),
            Load::Complaints(ComplaintView::Worker).container()
        );
        assert_ne!(
            Load::Polls(PollView::Resident).container(),
            Load::Polls(PollView::Admin).container()
        );
    }

    #[test]
    fn test_dashboard_loads() {
        assert_eq!(dashboard_loads(Role::Resident), vec![Load::ResidentAlerts]);
        assert_eq!(dashboard_loads(Role::Admin), vec![Load::Users, Load::RegistrationRequests]);
        assert!(dashboard_loads(Role::Worker).is_empty());
    }
}
