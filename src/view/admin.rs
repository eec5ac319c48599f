use super::{format_date, format_date_time, Listing};
use crate::models::admin::{Alert, HouseChangeRequest, RegistrationRequest, UserRecord};
use crate::models::auth::Role;
use crate::models::RecordId;

pub const NO_USERS: &str = "No users found.";
pub const NO_REGISTRATIONS: &str = "No pending requests.";
pub const NO_HOUSE_CHANGES: &str = "No pending house number change requests.";
pub const NO_ALERTS: &str = "No active alerts found.";

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub house: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationCard {
    pub id: RecordId,
    pub heading: String,
    pub email: String,
    pub requested_on: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HouseChangeCard {
    pub id: RecordId,
    pub heading: String,
    pub current_house: String,
    pub requested_house: String,
    pub requested_on: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertCard {
    pub id: RecordId,
    pub message: String,
    pub posted: String,
}

fn house_or_na(house: Option<&str>) -> String {
    house
        .filter(|h| !h.trim().is_empty())
        .unwrap_or("N/A")
        .to_owned()
}

/// The signed-in admin is left out of their own user table.
pub fn build_user_table(users: Vec<UserRecord>, me: &RecordId) -> Listing<UserRow> {
    let rows = users
        .into_iter()
        .filter(|u| &u.id != me)
        .map(|u| UserRow {
            house: house_or_na(u.house_number.as_deref()),
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        })
        .collect();
    Listing::from_items(rows, NO_USERS)
}

pub fn build_registration_list(requests: Vec<RegistrationRequest>) -> Listing<RegistrationCard> {
    let cards = requests
        .into_iter()
        .map(|r| RegistrationCard {
            heading: format!("{} (House: {})", r.name, house_or_na(r.house_number.as_deref())),
            requested_on: format!("Requested on: {}", format_date(&r.created_at)),
            id: r.id,
            email: r.email,
        })
        .collect();
    Listing::from_items(cards, NO_REGISTRATIONS)
}

pub fn build_house_change_list(requests: Vec<HouseChangeRequest>) -> Listing<HouseChangeCard> {
    let cards = requests
        .into_iter()
        .map(|r| HouseChangeCard {
            heading: format!("{} ({})", r.name, r.email),
            current_house: house_or_na(r.current_house_number.as_deref()),
            requested_on: format!("Requested on: {}", format_date_time(&r.created_at)),
            id: r.id,
            requested_house: r.requested_house_number,
        })
        .collect();
    Listing::from_items(cards, NO_HOUSE_CHANGES)
}

pub fn build_admin_alerts(alerts: Vec<Alert>) -> Listing<AlertCard> {
    let cards = alerts
        .into_iter()
        .map(|a| AlertCard {
            posted: format!(
                "Posted by {} on {}",
                a.created_by_name.as_deref().unwrap_or("Admin"),
                format_date_time(&a.created_at)
            ),
            id: a.id,
            message: a.message,
        })
        .collect();
    Listing::from_items(cards, NO_ALERTS)
}

/// Residents see a banner per alert, or nothing at all.
pub fn build_resident_alerts(alerts: Vec<Alert>) -> Vec<AlertCard> {
    alerts
        .into_iter()
        .map(|a| AlertCard {
            posted: format!("Posted on: {}", format_date(&a.created_at)),
            id: a.id,
            message: a.message,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role, house: Option<&str>) -> UserRecord {
        UserRecord {
            id: RecordId::Number(id),
            name: format!("user{id}"),
            email: format!("user{id}@society.in"),
            role,
            house_number: house.map(str::to_owned),
        }
    }

    #[test]
    fn test_user_table_skips_self() {
        let users = vec![user(1, Role::Admin, None), user(2, Role::Resident, Some("C-3"))];
        let table = build_user_table(users, &RecordId::Number(1));
        let rows = table.items();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RecordId::Number(2));
        assert_eq!(rows[0].house, "C-3");
    }

    #[test]
    fn test_user_table_only_self_is_empty() {
        let table = build_user_table(vec![user(1, Role::Admin, None)], &RecordId::Number(1));
        assert_eq!(table, Listing::Empty(NO_USERS));
    }

    #[test]
    fn test_registration_card_without_house() {
        let requests = vec![RegistrationRequest {
            id: RecordId::Text("r1".to_owned()),
            name: "Kiran".to_owned(),
            email: "kiran@society.in".to_owned(),
            house_number: None,
            created_at: "2024-02-29T12:00:00".to_owned(),
        }];
        let listing = build_registration_list(requests);
        let card = &listing.items()[0];
        assert_eq!(card.heading, "Kiran (House: N/A)");
        assert_eq!(card.requested_on, "Requested on: 29 Feb 2024");
    }

    #[test]
    fn test_house_change_card() {
        let requests = vec![HouseChangeRequest {
            id: RecordId::Number(5),
            name: "Dev".to_owned(),
            email: "dev@society.in".to_owned(),
            current_house_number: Some("A-1".to_owned()),
            requested_house_number: "B-7".to_owned(),
            created_at: "2024-02-29T12:05:00".to_owned(),
        }];
        let listing = build_house_change_list(requests);
        let card = &listing.items()[0];
        assert_eq!(card.heading, "Dev (dev@society.in)");
        assert_eq!(card.current_house, "A-1");
        assert_eq!(card.requested_house, "B-7");
        assert_eq!(card.requested_on, "Requested on: 29 Feb 2024, 12:05");
    }

    #[test]
    fn test_empty_alert_lists() {
        assert_eq!(build_admin_alerts(vec![]), Listing::Empty(NO_ALERTS));
        assert!(build_resident_alerts(vec![]).is_empty());
    }
}
