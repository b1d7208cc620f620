use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the Open Library search endpoint.
///
/// `key` and `title` are always present; everything else may be missing
/// from a doc. Missing attributes stay `None` rather than collapsing to a
/// zero/empty value, so comparators can tell "unknown" apart from "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub key: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_i: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_average: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u32>,
}

impl Book {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Author names joined for display, capped at two with a "+N more"
    /// suffix the way result cards show them.
    pub fn author_line(&self) -> String {
        match self.author_name.as_deref() {
            None | Some([]) => "Unknown Author".to_string(),
            Some(names) => {
                let mut line = names
                    .iter()
                    .take(2)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if names.len() > 2 {
                    line.push_str(&format!(" +{} more", names.len() - 2));
                }
                line
            }
        }
    }

    pub fn year_display(&self) -> String {
        self.first_publish_year
            .map(|y| y.to_string())
            .unwrap_or_default()
    }

    /// Average rating formatted to one decimal, e.g. "4.2".
    pub fn rating_display(&self) -> Option<String> {
        self.ratings_average.map(|r| format!("{r:.1}"))
    }
}

/// The result envelope for one search: the returned docs plus the total
/// match count, which may exceed `docs.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,

    #[serde(default)]
    pub start: u64,

    #[serde(default)]
    pub docs: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_doc() {
        let doc: Book = serde_json::from_str(
            r#"{"key": "/works/OL45883W", "title": "Dune"}"#,
        )
        .unwrap();
        assert_eq!(doc.key, "/works/OL45883W");
        assert_eq!(doc.title, "Dune");
        assert_eq!(doc.first_publish_year, None);
        assert_eq!(doc.ratings_average, None);
    }

    #[test]
    fn deserializes_full_doc() {
        let doc: Book = serde_json::from_str(
            r#"{
                "key": "/works/OL45883W",
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965,
                "cover_i": 12345,
                "publisher": ["Chilton Books"],
                "language": ["eng"],
                "subject": ["Science fiction"],
                "edition_count": 120,
                "ratings_average": 4.25,
                "ratings_count": 310
            }"#,
        )
        .unwrap();
        assert_eq!(doc.author_name.as_deref(), Some(&["Frank Herbert".to_string()][..]));
        assert_eq!(doc.first_publish_year, Some(1965));
        assert_eq!(doc.cover_i, Some(12345));
        assert_eq!(doc.edition_count, Some(120));
    }

    #[test]
    fn envelope_defaults_docs() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"numFound": 0, "start": 0, "docs": []}"#).unwrap();
        assert_eq!(resp.num_found, 0);
        assert!(resp.docs.is_empty());
    }

    #[test]
    fn author_line_caps_at_two() {
        let mut book = Book::new("/works/OL1W", "Test");
        assert_eq!(book.author_line(), "Unknown Author");

        book.author_name = Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]);
        assert_eq!(book.author_line(), "A, B +2 more");
    }
}
