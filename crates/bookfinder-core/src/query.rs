use serde::{Deserialize, Serialize};

/// Page size sent with every search unless the caller overrides it.
pub const DEFAULT_LIMIT: u32 = 20;

/// A structured search: any subset of criteria plus paging controls.
///
/// Callers are expected to reject an all-empty request before submitting
/// it (`has_criteria`); the builder itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchRequest {
    /// A free-text search with default paging.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Whether at least one criterion is set. A whitespace-only free-text
    /// query does not count.
    pub fn has_criteria(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
            || [
                &self.title,
                &self.author,
                &self.subject,
                &self.isbn,
                &self.publisher,
            ]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// Produce the remote query parameters in canonical order:
    /// `q, title, author, subject, isbn, publisher, limit, offset`.
    ///
    /// Absent criteria contribute no pair. `limit` is always included and
    /// defaults to [`DEFAULT_LIMIT`]; `offset` only appears when non-zero.
    pub fn build(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(q) = self.query.as_deref()
            && !q.trim().is_empty()
        {
            pairs.push(("q", q.to_string()));
        }

        for (key, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("subject", &self.subject),
            ("isbn", &self.isbn),
            ("publisher", &self.publisher),
        ] {
            if let Some(v) = value.as_deref()
                && !v.is_empty()
            {
                pairs.push((key, v.to_string()));
            }
        }

        pairs.push(("limit", self.limit.unwrap_or(DEFAULT_LIMIT).to_string()));

        if let Some(offset) = self.offset
            && offset > 0
        {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_title_only_with_default_limit() {
        let request = SearchRequest {
            title: Some("Dune".into()),
            ..Default::default()
        };
        assert_eq!(
            request.build(),
            vec![("title", "Dune".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn keys_appear_in_canonical_order() {
        let request = SearchRequest {
            query: Some("space opera".into()),
            title: Some("Dune".into()),
            author: Some("Herbert".into()),
            subject: Some("Science fiction".into()),
            isbn: Some("9780441013593".into()),
            publisher: Some("Ace".into()),
            limit: Some(50),
            offset: Some(100),
        };
        let keys: Vec<&str> = request.build().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["q", "title", "author", "subject", "isbn", "publisher", "limit", "offset"]
        );
    }

    #[test]
    fn absent_fields_produce_no_pair() {
        let request = SearchRequest {
            author: Some("Le Guin".into()),
            ..Default::default()
        };
        let keys: Vec<&str> = request.build().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["author", "limit"]);
    }

    #[test]
    fn zero_offset_is_omitted() {
        let request = SearchRequest {
            query: Some("dune".into()),
            offset: Some(0),
            ..Default::default()
        };
        let keys: Vec<&str> = request.build().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q", "limit"]);
    }

    #[test]
    fn nonzero_offset_is_included() {
        let request = SearchRequest {
            query: Some("dune".into()),
            offset: Some(40),
            ..Default::default()
        };
        assert!(request.build().contains(&("offset", "40".to_string())));
    }

    #[test]
    fn whitespace_query_is_absent() {
        let request = SearchRequest {
            query: Some("   ".into()),
            ..Default::default()
        };
        assert!(!request.has_criteria());
        let keys: Vec<&str> = request.build().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["limit"]);
    }

    #[test]
    fn build_is_deterministic() {
        let request = SearchRequest {
            title: Some("Dune".into()),
            publisher: Some("Ace".into()),
            ..Default::default()
        };
        assert_eq!(request.build(), request.build());
    }

    #[test]
    fn has_criteria_on_structured_field() {
        let request = SearchRequest {
            isbn: Some("9780441013593".into()),
            ..Default::default()
        };
        assert!(request.has_criteria());
        assert!(!SearchRequest::default().has_criteria());
    }
}
