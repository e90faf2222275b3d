use std::collections::HashMap;

pub mod models;

use models::{Day, Document};

/// Day records indexed by their identifier
///
/// Built once from a loaded [`Document`] and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Schedule {
    days: HashMap<String, Day>,
}

impl Schedule {
    /// Index a document, a later record with the same identifier replaces the earlier one
    pub fn from_document(document: Document) -> Self {
        let days = document
            .days
            .into_iter()
            .map(|day| (day.day_id.clone(), day))
            .collect();

        Self { days }
    }

    pub fn get(&self, day_id: &str) -> Option<&Day> {
        self.days.get(day_id)
    }

    /// Known identifiers, sorted lexicographically
    pub fn day_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.days.keys().map(String::as_str).collect();
        ids.sort_unstable();

        ids
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<Document> for Schedule {
    fn from(document: Document) -> Self {
        Self::from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::Announcement;

    fn day(id: &str) -> Day {
        Day {
            day_id: id.to_owned(),
            handbook: vec![],
            timetable: vec![],
        }
    }

    #[test]
    fn test_day_ids_are_sorted() {
        let schedule = Schedule::from_document(Document {
            days: vec![day("Day 2"), day("Day 1"), day("Day 3")],
        });

        assert_eq!(schedule.day_ids(), vec!["Day 1", "Day 2", "Day 3"]);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let schedule = Schedule::from_document(Document {
            days: vec![day("Day 2"), day("Day 10")],
        });

        assert_eq!(schedule.day_ids(), vec!["Day 10", "Day 2"]);
    }

    #[test]
    fn test_duplicate_identifier_keeps_last() {
        let mut second = day("Day 1");
        second.handbook.push(Announcement {
            announcement: "Assembly".to_owned(),
        });

        let schedule = Schedule::from_document(Document {
            days: vec![day("Day 1"), second],
        });

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get("Day 1").unwrap().handbook.len(), 1);
    }

    #[test]
    fn test_missing_day() {
        let schedule = Schedule::from_document(Document::default());

        assert!(schedule.is_empty());
        assert!(schedule.get("Day 1").is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let document: Document =
            serde_json::from_str(r#"{ "days": [ { "day_id": "Day 4", "timetable": [ { "subject": "Art" } ] } ] }"#)
                .unwrap();
        let schedule = Schedule::from(document);
        let day = schedule.get("Day 4").unwrap();

        assert!(day.handbook.is_empty());
        assert_eq!(day.timetable[0].subject, "Art");
        assert_eq!(day.timetable[0].location, "");
    }
}
