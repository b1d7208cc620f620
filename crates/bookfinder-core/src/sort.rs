use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Book;

/// Active ordering for an already-fetched result set.
///
/// Resets to `Relevance` at the start of every new search; changing it
/// afterwards re-orders the fetched set without another fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    Title,
    YearDesc,
    YearAsc,
    RatingDesc,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Title => "Title (A-Z)",
            Self::YearDesc => "Newest First",
            Self::YearAsc => "Oldest First",
            Self::RatingDesc => "Highest Rated",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Relevance => Self::Title,
            Self::Title => Self::YearDesc,
            Self::YearDesc => Self::YearAsc,
            Self::YearAsc => Self::RatingDesc,
            Self::RatingDesc => Self::Relevance,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "title" => Ok(Self::Title),
            "year-desc" => Ok(Self::YearDesc),
            "year-asc" => Ok(Self::YearAsc),
            "rating" => Ok(Self::RatingDesc),
            other => Err(format!(
                "unknown sort '{other}' (expected relevance, title, year-desc, year-asc, rating)"
            )),
        }
    }
}

/// Re-order a fetched result set without mutating it.
///
/// All orderings are stable, so ties keep their remote relative order.
/// Records missing the sort attribute go last under both year directions:
/// an absent year counts as 0 when sorting newest-first and as the
/// maximum year when sorting oldest-first. An absent rating counts as 0.
pub fn sort_books(books: &[Book], key: SortKey) -> Vec<Book> {
    let mut sorted = books.to_vec();
    match key {
        // The remote service's own ranking; nothing to recompute.
        SortKey::Relevance => {}
        SortKey::Title => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::YearDesc => {
            sorted.sort_by_key(|b| Reverse(b.first_publish_year.unwrap_or(0)));
        }
        SortKey::YearAsc => {
            sorted.sort_by_key(|b| b.first_publish_year.unwrap_or(i32::MAX));
        }
        SortKey::RatingDesc => {
            sorted.sort_by(|a, b| {
                let ra = a.ratings_average.unwrap_or(0.0);
                let rb = b.ratings_average.unwrap_or(0.0);
                rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
            });
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, year: Option<i32>) -> Book {
        Book {
            first_publish_year: year,
            ..Book::new(format!("/works/{title}"), title)
        }
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn relevance_preserves_input_order() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None), book("Mid", Some(1990))];
        let sorted = sort_books(&input, SortKey::Relevance);
        assert_eq!(titles(&sorted), titles(&input));
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None)];
        let _ = sort_books(&input, SortKey::Title);
        assert_eq!(titles(&input), vec!["Zed", "Ann"]);
    }

    #[test]
    fn title_sorts_case_insensitively() {
        let input = vec![book("zebra", None), book("Apple", None), book("mango", None)];
        let sorted = sort_books(&input, SortKey::Title);
        assert_eq!(titles(&sorted), vec!["Apple", "mango", "zebra"]);
    }

    #[test]
    fn year_desc_puts_absent_years_last() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None), book("Mid", Some(1990))];
        let sorted = sort_books(&input, SortKey::YearDesc);
        assert_eq!(titles(&sorted), vec!["Zed", "Mid", "Ann"]);
    }

    #[test]
    fn year_asc_also_puts_absent_years_last() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None), book("Mid", Some(1990))];
        let sorted = sort_books(&input, SortKey::YearAsc);
        assert_eq!(titles(&sorted), vec!["Mid", "Zed", "Ann"]);
    }

    #[test]
    fn rating_desc_puts_unrated_last() {
        let mut rated = book("Rated", None);
        rated.ratings_average = Some(4.5);
        let mut low = book("Low", None);
        low.ratings_average = Some(1.2);
        let unrated = book("Unrated", None);

        let sorted = sort_books(&[low, unrated, rated], SortKey::RatingDesc);
        assert_eq!(titles(&sorted), vec!["Rated", "Low", "Unrated"]);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let input = vec![
            book("First", Some(1999)),
            book("Second", Some(1999)),
            book("Third", Some(1999)),
        ];
        let sorted = sort_books(&input, SortKey::YearDesc);
        assert_eq!(titles(&sorted), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None), book("Mid", Some(1990))];
        let once = sort_books(&input, SortKey::YearDesc);
        let twice = sort_books(&once, SortKey::YearDesc);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn example_from_title_sort() {
        let input = vec![book("Zed", Some(2000)), book("Ann", None), book("Mid", Some(1990))];
        let sorted = sort_books(&input, SortKey::Title);
        assert_eq!(titles(&sorted), vec!["Ann", "Mid", "Zed"]);
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!("year-desc".parse::<SortKey>().unwrap(), SortKey::YearDesc);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::RatingDesc);
        assert!("newest".parse::<SortKey>().is_err());
    }
}
