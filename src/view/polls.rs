use super::{format_date, Listing};
use crate::models::auth::Role;
use crate::models::poll::{Poll, PollView};
use crate::models::RecordId;

pub const NO_POLLS: &str = "No polls available.";

#[derive(Debug, Clone, PartialEq)]
pub struct OptionResult {
    pub option: String,
    pub votes: u64,
    pub percentage: f64,
    pub is_user_vote: bool,
    pub label: String,
}

/// A poll shows either its vote buttons or its results, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum PollBody {
    Vote(Vec<String>),
    Results(Vec<OptionResult>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollCard {
    pub id: RecordId,
    pub question: String,
    pub description: Option<String>,
    pub body: PollBody,
    pub total_label: String,
    pub posted_by: String,
    pub can_delete: bool,
}

/// Share of the vote, rounded to one decimal place. Zero when nobody has voted.
pub fn percentage(votes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (votes as f64 / total as f64 * 1000.0).round() / 10.0
}

fn percentage_text(votes: u64, total: u64) -> String {
    if total == 0 {
        "0".to_owned()
    } else {
        format!("{:.1}", percentage(votes, total))
    }
}

pub fn results_for(poll: &Poll) -> Vec<OptionResult> {
    poll.options
        .iter()
        .map(|option| {
            let votes = poll.vote_counts.get(option).copied().unwrap_or(0);
            OptionResult {
                option: option.clone(),
                votes,
                percentage: percentage(votes, poll.total_votes),
                is_user_vote: poll.user_vote.as_deref() == Some(option.as_str()),
                label: format!(
                    "{} - {} votes ({}%)",
                    option,
                    votes,
                    percentage_text(votes, poll.total_votes)
                ),
            }
        })
        .collect()
}

pub fn build_poll_list(polls: Vec<Poll>, view: PollView, role: Role) -> Listing<PollCard> {
    let cards = polls
        .into_iter()
        .map(|poll| {
            let body = if view == PollView::Resident && !poll.has_voted {
                PollBody::Vote(poll.options.clone())
            } else {
                PollBody::Results(results_for(&poll))
            };
            PollCard {
                total_label: format!("{} total votes", poll.total_votes),
                posted_by: format!(
                    "Posted by {} on {}",
                    poll.created_by_name.as_deref().unwrap_or("Admin"),
                    format_date(&poll.created_at)
                ),
                can_delete: view == PollView::Admin && role == Role::Admin,
                description: poll.description.filter(|d| !d.trim().is_empty()),
                id: poll.id,
                question: poll.question,
                body,
            }
        })
        .collect();

    Listing::from_items(cards, NO_POLLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(has_voted: bool) -> Poll {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "question": "Install CCTV at the gate?",
            "options": ["Yes", "No"],
            "vote_counts": {"Yes": 3, "No": 1},
            "total_votes": 4,
            "user_vote": (if has_voted { Some("Yes") } else { None }),
            "has_voted": has_voted,
            "created_by_name": "Secretary",
            "created_at": "2024-06-10T08:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(3, 4), 75.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_results_labels() {
        let results = results_for(&poll(true));
        let labels: Vec<_> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Yes - 3 votes (75.0%)", "No - 1 votes (25.0%)"]);
        assert!(results[0].is_user_vote);
        assert!(!results[1].is_user_vote);
    }

    #[test]
    fn test_no_votes_shows_zero() {
        let empty = Poll {
            vote_counts: Default::default(),
            total_votes: 0,
            ..poll(false)
        };
        let results = results_for(&empty);
        assert_eq!(results[0].label, "Yes - 0 votes (0%)");
        assert_eq!(results[0].percentage, 0.0);
    }

    #[test]
    fn test_resident_who_has_not_voted_gets_buttons() {
        let listing = build_poll_list(vec![poll(false)], PollView::Resident, Role::Resident);
        assert_eq!(
            listing.items()[0].body,
            PollBody::Vote(vec!["Yes".to_owned(), "No".to_owned()])
        );
    }

    #[test]
    fn test_results_after_voting_or_for_admin() {
        let voted = build_poll_list(vec![poll(true)], PollView::Resident, Role::Resident);
        assert!(matches!(voted.items()[0].body, PollBody::Results(_)));

        let admin = build_poll_list(vec![poll(false)], PollView::Admin, Role::Admin);
        assert!(matches!(admin.items()[0].body, PollBody::Results(_)));
        assert!(admin.items()[0].can_delete);
        assert!(!voted.items()[0].can_delete);
    }

    #[test]
    fn test_admin_view_delete_needs_admin_role() {
        let listing = build_poll_list(vec![poll(false)], PollView::Admin, Role::Worker);
        assert!(!listing.items()[0].can_delete);
    }

    #[test]
    fn test_card_text() {
        let listing = build_poll_list(vec![poll(true)], PollView::Resident, Role::Resident);
        let card = &listing.items()[0];
        assert_eq!(card.total_label, "4 total votes");
        assert_eq!(card.posted_by, "Posted by Secretary on 10 Jun 2024");
        assert_eq!(card.description, None);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            build_poll_list(vec![], PollView::Resident, Role::Resident),
            Listing::Empty(NO_POLLS)
        );
    }
}
