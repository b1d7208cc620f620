/// Shown when a record has no cover identifier.
pub const PLACEHOLDER_COVER: &str = "placeholder-book.png";

const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

/// Cover image size token understood by the covers service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CoverSize {
    pub fn token(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Medium => 'M',
            Self::Large => 'L',
        }
    }
}

/// Derive the cover image URL for a record, or the local placeholder
/// reference when the record has no cover. Makes no network call.
pub fn cover_url(cover_id: Option<i64>, size: CoverSize) -> String {
    cover_url_with_base(COVERS_BASE_URL, cover_id, size)
}

/// Same derivation against a configurable covers host.
pub fn cover_url_with_base(base_url: &str, cover_id: Option<i64>, size: CoverSize) -> String {
    match cover_id {
        Some(id) => format!(
            "{}/b/id/{id}-{}.jpg",
            base_url.trim_end_matches('/'),
            size.token()
        ),
        None => PLACEHOLDER_COVER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_id_yields_sized_url() {
        assert_eq!(
            cover_url(Some(12345), CoverSize::Medium),
            "https://covers.openlibrary.org/b/id/12345-M.jpg"
        );
        assert_eq!(
            cover_url(Some(12345), CoverSize::Large),
            "https://covers.openlibrary.org/b/id/12345-L.jpg"
        );
    }

    #[test]
    fn absent_id_yields_placeholder() {
        assert_eq!(cover_url(None, CoverSize::Small), PLACEHOLDER_COVER);
    }

    #[test]
    fn custom_base_is_respected() {
        assert_eq!(
            cover_url_with_base("http://localhost:9999/", Some(7), CoverSize::Small),
            "http://localhost:9999/b/id/7-S.jpg"
        );
    }
}
