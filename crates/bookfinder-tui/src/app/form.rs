use bookfinder_core::SearchRequest;

/// Fields of the advanced search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Subject,
    Isbn,
    Publisher,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        Self::Title,
        Self::Author,
        Self::Subject,
        Self::Isbn,
        Self::Publisher,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Subject => "Subject",
            Self::Isbn => "ISBN",
            Self::Publisher => "Publisher",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Subject,
            Self::Subject => Self::Isbn,
            Self::Isbn => Self::Publisher,
            Self::Publisher => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Publisher,
            Self::Author => Self::Title,
            Self::Subject => Self::Author,
            Self::Isbn => Self::Subject,
            Self::Publisher => Self::Isbn,
        }
    }
}

/// Advanced search form: one input per structured criterion.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub isbn: String,
    pub publisher: String,
    pub focus: FormField,
}

impl SearchForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Subject => &self.subject,
            FormField::Isbn => &self.isbn,
            FormField::Publisher => &self.publisher,
        }
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Subject => &mut self.subject,
            FormField::Isbn => &mut self.isbn,
            FormField::Publisher => &mut self.publisher,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn clear(&mut self) {
        *self = Self {
            focus: self.focus,
            ..Self::default()
        };
    }

    /// Build a request from the filled fields. Blank fields stay absent.
    pub fn to_request(&self, limit: u32) -> SearchRequest {
        let field = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        SearchRequest {
            title: field(&self.title),
            author: field(&self.author),
            subject: field(&self.subject),
            isbn: field(&self.isbn),
            publisher: field(&self.publisher),
            limit: Some(limit),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = SearchForm::default();
        for expected in FormField::ALL {
            assert_eq!(form.focus, expected);
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn blank_fields_stay_absent_in_request() {
        let form = SearchForm {
            author: "Le Guin".into(),
            isbn: "   ".into(),
            ..Default::default()
        };
        let request = form.to_request(20);
        assert_eq!(request.author.as_deref(), Some("Le Guin"));
        assert_eq!(request.isbn, None);
        assert_eq!(request.title, None);
        assert!(request.has_criteria());
    }
}
