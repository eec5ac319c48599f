use crate::api;
use crate::error::ApiError;
use crate::models::auth::{Role, Session};
use crate::models::complaint::ComplaintView;
use crate::models::poll::PollView;
use crate::router::Load;
use crate::view::admin::{
    build_admin_alerts, build_house_change_list, build_registration_list, build_resident_alerts,
    build_user_table, AlertCard, HouseChangeCard, RegistrationCard, UserRow,
};
use crate::view::complaints::{build_complaint_list, ComplaintCard};
use crate::view::filter::ComplaintFilter;
use crate::view::polls::{build_poll_list, PollCard};
use crate::view::Listing;
use futures_util::future::join;
use log::{info, warn};
use reqwest::Client;
use std::collections::HashSet;

#[derive(Debug)]
pub enum LoadResult {
    Complaints(Listing<ComplaintCard>),
    Polls(Listing<PollCard>),
    Users(Listing<UserRow>),
    RegistrationRequests(Listing<RegistrationCard>),
    HouseChangeRequests(Listing<HouseChangeCard>),
    AdminAlerts(Listing<AlertCard>),
    ResidentAlerts(Vec<AlertCard>),
}

pub async fn load_complaints(
    client: &Client,
    base_url: &str,
    session: Option<&Session>,
    view: ComplaintView,
    filter: &ComplaintFilter,
) -> Result<Listing<ComplaintCard>, ApiError> {
    let user_id = session.map(|s| &s.id);
    let (polls, complaints) = join(
        api::polls::get_polls(client, base_url, None),
        api::complaints::get_complaints(client, base_url, user_id, view),
    )
    .await;

    let poll_questions: HashSet<String> = match polls {
        Ok(polls) => polls.into_iter().map(|p| p.question).collect(),
        Err(e) => {
            warn!("Could not fetch polls for complaint indicators: {}", e);
            HashSet::new()
        }
    };

    let complaints = complaints?;
    info!("Received {} complaints for the {} view", complaints.len(), view.as_str());
    Ok(build_complaint_list(complaints, &poll_questions, filter, view, base_url))
}

pub async fn load_polls(
    client: &Client,
    base_url: &str,
    session: Option<&Session>,
    view: PollView,
) -> Result<Listing<PollCard>, ApiError> {
    let polls = api::polls::get_polls(client, base_url, session.map(|s| &s.id)).await?;
    let role = session.map_or(Role::Resident, |s| s.role);
    Ok(build_poll_list(polls, view, role))
}

fn require_admin(session: Option<&Session>) -> Result<&Session, ApiError> {
    session
        .filter(|s| s.role == Role::Admin)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized."))
}

/// Runs one container refresh end to end. `filter` only applies to filterable complaint views.
pub async fn run_load(
    client: &Client,
    base_url: &str,
    session: Option<&Session>,
    load: Load,
    filter: &ComplaintFilter,
) -> Result<LoadResult, ApiError> {
    match load {
        Load::Complaints(view) => load_complaints(client, base_url, session, view, filter)
            .await
            .map(LoadResult::Complaints),
        Load::Polls(view) => load_polls(client, base_url, session, view)
            .await
            .map(LoadResult::Polls),
        Load::Users => {
            let me = require_admin(session)?;
            let users = api::admin::get_users(client, base_url).await?;
            Ok(LoadResult::Users(build_user_table(users, &me.id)))
        }
        Load::RegistrationRequests => {
            require_admin(session)?;
            let requests = api::admin::get_registration_requests(client, base_url).await?;
            Ok(LoadResult::RegistrationRequests(build_registration_list(requests)))
        }
        Load::HouseChangeRequests => {
            require_admin(session)?;
            let requests = api::admin::get_house_change_requests(client, base_url).await?;
            Ok(LoadResult::HouseChangeRequests(build_house_change_list(requests)))
        }
        Load::AdminAlerts => {
            let alerts = api::admin::get_alerts(client, base_url).await?;
            Ok(LoadResult::AdminAlerts(build_admin_alerts(alerts)))
        }
        Load::ResidentAlerts => match api::admin::get_alerts(client, base_url).await {
            Ok(alerts) => Ok(LoadResult::ResidentAlerts(build_resident_alerts(alerts))),
            Err(e) => {
                warn!("Error loading resident alerts: {}", e);
                Ok(LoadResult::ResidentAlerts(Vec::new()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn session(role: Role) -> Session {
        Session {
            id: RecordId::Number(1),
            name: "Test".to_owned(),
            role,
            email: None,
            house_number: None,
        }
    }

    #[tokio::test]
    async fn test_admin_listings_refused_before_any_request() {
        // Nothing listens here; reaching the network would yield a Network error instead.
        let client = Client::new();
        let base_url = "http://127.0.0.1:9";
        let filter = ComplaintFilter::default();

        for load in [Load::Users, Load::RegistrationRequests, Load::HouseChangeRequests] {
            let err = run_load(&client, base_url, Some(&session(Role::Worker)), load, &filter)
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized(_)), "{load:?}: {err:?}");

            let err = run_load(&client, base_url, None, load, &filter).await.unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized(_)));
        }
    }

    #[tokio::test]
    async fn test_resident_alert_failure_is_silent() {
        let client = Client::new();
        let result = run_load(
            &client,
            "http://127.0.0.1:9",
            Some(&session(Role::Resident)),
            Load::ResidentAlerts,
            &ComplaintFilter::default(),
        )
        .await
        .unwrap();
        assert!(matches!(result, LoadResult::ResidentAlerts(alerts) if alerts.is_empty()));
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_complaint_load() {
        let client = Client::new();
        let err = load_complaints(
            &client,
            "http://127.0.0.1:9",
            Some(&session(Role::Resident)),
            ComplaintView::My,
            &ComplaintFilter::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
