use super::filter::ComplaintFilter;
use super::{format_date, Listing};
use crate::api::upload_url;
use crate::models::complaint::{Complaint, ComplaintStatus, ComplaintView, LikeAction, LikeResponse};
use crate::models::RecordId;
use std::collections::HashSet;

pub const NO_COMPLAINTS: &str = "No complaints found matching the current filter.";
pub const POLL_INDICATOR: &str = "📢 This issue has been converted to a society poll for voting.";

#[derive(Debug, Clone, PartialEq)]
pub enum CardControl {
    StatusSelect(ComplaintStatus),
    CreatePoll,
    Delete,
    Reopen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintCard {
    pub id: RecordId,
    pub title: String,
    pub poll_indicator: bool,
    pub filed_by: String,
    pub category: String,
    pub status: ComplaintStatus,
    pub description: String,
    pub image_url: Option<String>,
    pub filed_on: String,
    pub like_count: u64,
    pub liked: bool,
    pub controls: Vec<CardControl>,
}

impl ComplaintCard {
    /// Patches the like button from the server's reply instead of reloading the listing.
    pub fn apply_like(&mut self, reply: &LikeResponse) {
        self.liked = reply.action == LikeAction::Liked;
        self.like_count = match (reply.new_like_count, reply.action) {
            (Some(count), _) => count,
            (None, LikeAction::Liked) => self.like_count + 1,
            (None, LikeAction::Unliked) => self.like_count.saturating_sub(1),
        };
    }
}

pub fn controls_for(view: ComplaintView, status: &ComplaintStatus) -> Vec<CardControl> {
    match view {
        ComplaintView::Admin => vec![
            CardControl::StatusSelect(status.clone()),
            CardControl::CreatePoll,
            CardControl::Delete,
        ],
        ComplaintView::Worker => vec![CardControl::StatusSelect(status.clone())],
        ComplaintView::My if *status == ComplaintStatus::Resolved => vec![CardControl::Reopen],
        ComplaintView::My | ComplaintView::All => Vec::new(),
    }
}

/// Builds the cards for one render cycle, keeping server order.
pub fn build_complaint_list(
    complaints: Vec<Complaint>,
    poll_questions: &HashSet<String>,
    filter: &ComplaintFilter,
    view: ComplaintView,
    base_url: &str,
) -> Listing<ComplaintCard> {
    let cards = complaints
        .into_iter()
        .filter(|c| !view.has_filters() || filter.matches(c))
        .map(|c| {
            let house = c.house_number.as_deref().unwrap_or("N/A");
            let user = c.user_name.as_deref().unwrap_or("Unknown");
            ComplaintCard {
                poll_indicator: poll_questions.contains(&c.title),
                filed_by: format!("{} (House: {})", user, house),
                image_url: c
                    .image_path
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .map(|p| upload_url(base_url, p)),
                filed_on: format_date(&c.created_at),
                controls: controls_for(view, &c.status),
                id: c.id,
                title: c.title,
                category: c.category,
                status: c.status,
                description: c.description,
                like_count: c.like_count,
                liked: c.user_has_liked,
            }
        })
        .collect();

    Listing::from_items(cards, NO_COMPLAINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leak() -> Complaint {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Leak",
            "description": "Water dripping in the lobby",
            "category": "plumbing",
            "status": "Open",
            "house_number": "A-4",
            "user_name": "Meera",
            "created_at": "2024-05-01T09:30:00",
            "like_count": 2,
            "user_has_liked": false
        }))
        .unwrap()
    }

    fn with_status(status: &str) -> Complaint {
        Complaint {
            status: ComplaintStatus::from(status.to_owned()),
            ..leak()
        }
    }

    fn category(name: &str) -> ComplaintFilter {
        ComplaintFilter {
            category: Some(name.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_filter_scenario() {
        let polls = HashSet::new();

        let listing = build_complaint_list(vec![leak()], &polls, &category("plumbing"), ComplaintView::All, "");
        let cards = listing.items();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, RecordId::Number(1));
        assert_eq!(cards[0].filed_by, "Meera (House: A-4)");
        assert_eq!(cards[0].filed_on, "01 May 2024");

        let listing = build_complaint_list(vec![leak()], &polls, &category("electrical"), ComplaintView::All, "");
        assert_eq!(listing, Listing::Empty(NO_COMPLAINTS));
    }

    #[test]
    fn test_my_view_ignores_filters() {
        let listing = build_complaint_list(
            vec![leak()],
            &HashSet::new(),
            &category("electrical"),
            ComplaintView::My,
            "",
        );
        assert_eq!(listing.items().len(), 1);
    }

    #[test]
    fn test_server_order_is_kept() {
        let second = Complaint {
            id: RecordId::Number(2),
            title: "Broken lamp".to_owned(),
            ..leak()
        };
        let listing = build_complaint_list(
            vec![second, leak()],
            &HashSet::new(),
            &ComplaintFilter::default(),
            ComplaintView::All,
            "",
        );
        let ids: Vec<_> = listing.items().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Number(2), RecordId::Number(1)]);
    }

    #[test]
    fn test_poll_indicator_requires_exact_title() {
        let polls: HashSet<String> = ["Leak".to_owned(), "Parking".to_owned()].into();
        let lowercase = Complaint {
            title: "leak".to_owned(),
            ..leak()
        };
        let listing = build_complaint_list(
            vec![leak(), lowercase],
            &polls,
            &ComplaintFilter::default(),
            ComplaintView::All,
            "",
        );
        let flags: Vec<_> = listing.items().iter().map(|c| c.poll_indicator).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_reopen_only_for_own_resolved() {
        assert_eq!(
            controls_for(ComplaintView::My, &ComplaintStatus::Resolved),
            vec![CardControl::Reopen]
        );
        assert!(controls_for(ComplaintView::My, &ComplaintStatus::Open).is_empty());
        assert!(controls_for(ComplaintView::All, &ComplaintStatus::Resolved).is_empty());
        assert!(!controls_for(ComplaintView::Admin, &ComplaintStatus::Resolved).contains(&CardControl::Reopen));
    }

    #[test]
    fn test_staff_controls() {
        let status = ComplaintStatus::InProgress;
        assert_eq!(
            controls_for(ComplaintView::Worker, &status),
            vec![CardControl::StatusSelect(status.clone())]
        );
        assert_eq!(
            controls_for(ComplaintView::Admin, &status),
            vec![
                CardControl::StatusSelect(status.clone()),
                CardControl::CreatePoll,
                CardControl::Delete,
            ]
        );
    }

    #[test]
    fn test_card_controls_follow_status() {
        let listing = build_complaint_list(
            vec![with_status("resolved"), with_status("Open")],
            &HashSet::new(),
            &ComplaintFilter::default(),
            ComplaintView::My,
            "",
        );
        let cards = listing.items();
        assert_eq!(cards[0].controls, vec![CardControl::Reopen]);
        assert!(cards[1].controls.is_empty());
    }

    #[test]
    fn test_image_url_built_from_base() {
        let with_image = Complaint {
            image_path: Some("leak.jpg".to_owned()),
            ..leak()
        };
        let listing = build_complaint_list(
            vec![with_image, leak()],
            &HashSet::new(),
            &ComplaintFilter::default(),
            ComplaintView::All,
            "http://localhost:5000",
        );
        let cards = listing.items();
        assert_eq!(cards[0].image_url.as_deref(), Some("http://localhost:5000/uploads/leak.jpg"));
        assert_eq!(cards[1].image_url, None);
    }

    #[test]
    fn test_like_toggle_uses_server_count() {
        let listing = build_complaint_list(
            vec![leak()],
            &HashSet::new(),
            &ComplaintFilter::default(),
            ComplaintView::All,
            "",
        );
        let mut card = listing.items()[0].clone();

        card.apply_like(&LikeResponse {
            action: LikeAction::Liked,
            new_like_count: Some(3),
        });
        assert!(card.liked);
        assert_eq!(card.like_count, 3);

        card.apply_like(&LikeResponse {
            action: LikeAction::Unliked,
            new_like_count: Some(2),
        });
        assert!(!card.liked);
        assert_eq!(card.like_count, 2);
    }

    #[test]
    fn test_like_without_count_moves_by_one() {
        let mut card = build_complaint_list(
            vec![leak()],
            &HashSet::new(),
            &ComplaintFilter::default(),
            ComplaintView::All,
            "",
        )
        .items()[0]
            .clone();

        card.apply_like(&LikeResponse {
            action: LikeAction::Liked,
            new_like_count: None,
        });
        assert_eq!(card.like_count, 3);
        card.apply_like(&LikeResponse {
            action: LikeAction::Unliked,
            new_like_count: None,
        });
        assert_eq!(card.like_count, 2);
    }
}
