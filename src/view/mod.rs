//! Pure view models. Everything here maps fetched records (plus filter and
//! role) to display data; nothing touches the network or egui.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub mod admin;
pub mod complaints;
pub mod filter;
pub mod polls;

/// A rendered listing: either cards, or the message shown when there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty(&'static str),
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>, empty: &'static str) -> Self {
        if items.is_empty() {
            Listing::Empty(empty)
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Empty(_) => &[],
        }
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        match self {
            Listing::Items(items) => items,
            Listing::Empty(_) => &mut [],
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => raw.chars().take(10).collect(),
    }
}

pub fn format_date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        None => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_python_isoformat() {
        assert_eq!(format_date("2024-03-05T14:22:10.123456"), "05 Mar 2024");
        assert_eq!(format_date_time("2024-03-05T14:22:10.123456"), "05 Mar 2024, 14:22");
    }

    #[test]
    fn test_format_rfc3339_and_plain_date() {
        assert_eq!(format_date("2024-12-31T23:00:00+00:00"), "31 Dec 2024");
        assert_eq!(format_date("2024-01-02"), "02 Jan 2024");
    }

    #[test]
    fn test_unparseable_date_falls_back() {
        assert_eq!(format_date("sometime in 2024"), "sometime i");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_listing_empty_message() {
        let listing: Listing<u8> = Listing::from_items(vec![], "Nothing here.");
        assert_eq!(listing, Listing::Empty("Nothing here."));
        assert!(listing.items().is_empty());
    }
}
