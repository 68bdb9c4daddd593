//! Release data structure.

use serde::{Deserialize, Serialize};

/// A single sneaker release extracted from the source page.
///
/// `Release::default()` doubles as the "not found" record returned by the
/// `sneaker(id)` query when no record matches: id 0 and all strings empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    /// Sequential identifier, starting at 1 within each release group
    pub id: i32,

    /// Sneaker title (empty if the selector missed)
    pub title: String,

    /// Price text, trimmed of surrounding whitespace, format not validated
    pub price: String,

    /// Release date composed as "D/M/<year>"
    pub date: String,

    /// Image URL (empty if the selector missed)
    pub image: String,

    /// Label identifying the origin site
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_not_found_record() {
        let release = Release::default();
        assert_eq!(release.id, 0);
        assert!(release.title.is_empty());
        assert!(release.provider.is_empty());
    }

    #[test]
    fn serializes_with_lowercase_field_names() {
        let release = Release {
            id: 1,
            title: "Air Model X".to_string(),
            price: "$120".to_string(),
            date: "12/Jan/2019".to_string(),
            image: "http://img/x.png".to_string(),
            provider: "SOLECOLLECTOR".to_string(),
        };
        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["provider"], "SOLECOLLECTOR");
    }
}
