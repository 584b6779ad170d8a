//! Search query matching.

use crate::domain::Field;
use crate::models::Record;

/// A free-text query ready to be tested against records.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The first field of `record` the query matches, name before phones.
    ///
    /// An empty query matches every record.
    pub fn matched_field(&self, record: &Record) -> Option<Field> {
        if record
            .name()
            .as_str()
            .to_lowercase()
            .contains(&self.lowered)
        {
            return Some(Field::from(record.name().clone()));
        }

        // Phones are digits only, so the raw query is compared as-is
        record
            .phones()
            .iter()
            .find(|phone| phone.as_str().contains(self.raw.as_str()))
            .map(|phone| Field::from(phone.clone()))
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matched_field(record).is_some()
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKind;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let john = record("JohnSmith", &["1234567890"]);
        let field = SearchQuery::new("john").matched_field(&john).unwrap();
        assert_eq!(field.kind(), FieldKind::Name);
        assert_eq!(field.to_string(), "Name: JohnSmith");
        assert!(SearchQuery::new("SMITH").matches(&john));
        assert!(SearchQuery::new("nSm").matches(&john));
    }

    #[test]
    fn test_phone_match_is_substring() {
        let john = record("JohnSmith", &["1234567890", "5550001111"]);
        let field = SearchQuery::new("555").matched_field(&john).unwrap();
        assert_eq!(field.kind(), FieldKind::Phone);
        assert_eq!(field.value(), "5550001111");
        assert!(SearchQuery::new("7890").matches(&john));
        assert!(!SearchQuery::new("999").matches(&john));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let empty = record("Alice", &[]);
        assert!(SearchQuery::new("").matches(&empty));
    }

    #[test]
    fn test_query_spanning_fields_does_not_match() {
        let john = record("John", &["1234567890"]);
        assert!(!SearchQuery::new("John1234").matches(&john));
    }

    #[test]
    fn test_record_without_phones_only_matches_name() {
        let alice = record("Alice", &[]);
        assert!(!SearchQuery::new("1").matches(&alice));
        assert!(SearchQuery::new("LIC").matches(&alice));
    }
}
