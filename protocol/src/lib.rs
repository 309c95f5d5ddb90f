//! JSON payloads of the trivia service.
//!
//! Only the fields the board needs are read, everything else in the payload is ignored.

use clueboard_core::{Category, CategoryId, CategorySummary, Clue};
use serde::Deserialize;

/// Entry of `GET /categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryListing {
    pub id: u64,
    pub title: String,
    pub clues_count: u32,
}

/// Body of `GET /category?id=N`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
}

impl From<CategoryListing> for CategorySummary {
    fn from(listing: CategoryListing) -> Self {
        Self {
            id: CategoryId(listing.id),
            title: listing.title,
            clue_count: listing.clues_count,
        }
    }
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        Clue::new(record.question, record.answer)
    }
}

impl From<CategoryDetail> for Category {
    fn from(detail: CategoryDetail) -> Self {
        Self {
            id: CategoryId(detail.id),
            title: detail.title,
            clues: detail.clues.into_iter().map(Clue::from).collect(),
        }
    }
}

pub fn decode_listing(json: &str) -> serde_json::Result<Vec<CategorySummary>> {
    let listing: Vec<CategoryListing> = serde_json::from_str(json)?;
    Ok(listing.into_iter().map(CategorySummary::from).collect())
}

pub fn decode_category(json: &str) -> serde_json::Result<Category> {
    let detail: CategoryDetail = serde_json::from_str(json)?;
    Ok(detail.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_and_ignores_unknown_fields() {
        let json = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"play\" ball", "clues_count": 3, "extra": true}
        ]"#;

        let listing = decode_listing(json).unwrap();

        assert_eq!(
            listing,
            vec![
                CategorySummary::new(11531, "mixed bag", 5),
                CategorySummary::new(11532, "let's \"play\" ball", 3),
            ]
        );
    }

    #[test]
    fn decodes_category_with_clues_in_order() {
        let json = r#"{
            "id": 11531,
            "title": "mixed bag",
            "clues_count": 2,
            "clues": [
                {"id": 1, "answer": "Sputnik", "question": "First artificial satellite", "value": 200,
                 "airdate": "1985-02-08T12:00:00.000Z", "category_id": 11531, "game_id": null, "invalid_count": null},
                {"id": 2, "answer": "Everest", "question": "Highest mountain", "value": null}
            ]
        }"#;

        let category = decode_category(json).unwrap();

        assert_eq!(category.id, CategoryId(11531));
        assert_eq!(category.title, "mixed bag");
        assert_eq!(
            category.clues,
            vec![
                Clue::new("First artificial satellite", "Sputnik"),
                Clue::new("Highest mountain", "Everest"),
            ]
        );
    }

    #[test]
    fn category_without_clues_decodes_empty() {
        let category = decode_category(r#"{"id": 7, "title": "empty"}"#).unwrap();

        assert!(category.clues.is_empty());
    }

    #[test]
    fn listing_missing_required_field_fails() {
        assert!(decode_listing(r#"[{"id": 1, "title": "no count"}]"#).is_err());
    }
}
