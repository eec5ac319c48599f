use crate::models::complaint::{Complaint, ComplaintStatus};

pub const CATEGORIES: [&str; 7] = [
    "plumbing",
    "electrical",
    "cleaning",
    "security",
    "parking",
    "maintenance",
    "other",
];

/// Client-side narrowing of a complaint listing. `None` and empty strings mean "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintFilter {
    pub category: Option<String>,
    pub status: Option<ComplaintStatus>,
    pub date_prefix: String,
    pub house: String,
}

impl ComplaintFilter {
    pub fn is_empty(&self) -> bool {
        *self == ComplaintFilter::default()
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        let category = self
            .category
            .as_deref()
            .map_or(true, |c| complaint.category == c);
        let status = self.status.as_ref().map_or(true, |s| &complaint.status == s);

        let prefix = self.date_prefix.trim();
        let date = prefix.is_empty() || complaint.created_at.starts_with(prefix);

        let needle = self.house.trim().to_lowercase();
        let house = needle.is_empty()
            || complaint
                .house_number
                .as_deref()
                .is_some_and(|h| h.to_lowercase().contains(&needle));

        category && status && date && house
    }
}
