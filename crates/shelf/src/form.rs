//! State of the book creation form.

use shelf_core::error::InvalidInputError;
use shelf_core::{BookRecord, Isbn, Result};

/// Field values typed into the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub isbn: String,
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub inventory: u32,
}

impl FormFields {
    /// Build a record from the fields.
    ///
    /// Every text field is required. Nothing beyond presence is checked and
    /// the values are sent exactly as typed; duplicate or malformed ISBNs
    /// are for the store to reject.
    pub fn to_record(&self) -> Result<BookRecord> {
        let required = [
            ("isbn", &self.isbn),
            ("title", &self.title),
            ("authorFirstName", &self.author_first_name),
            ("authorLastName", &self.author_last_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
            return Err(InvalidInputError::MissingField { field: *field }.into());
        }

        Ok(BookRecord::new(
            Isbn::new(&self.isbn)?,
            self.title.clone(),
            self.author_first_name.clone(),
            self.author_last_name.clone(),
            self.inventory,
        ))
    }
}

/// The creation surface: whether it is shown and what it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    pub fields: FormFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Error;

    fn filled() -> FormFields {
        FormFields {
            isbn: "B2".to_string(),
            title: "Title".to_string(),
            author_first_name: "Ann".to_string(),
            author_last_name: "Lee".to_string(),
            inventory: 0,
        }
    }

    #[test]
    fn complete_fields_make_a_record() {
        let book = filled().to_record().unwrap();
        assert_eq!(book.isbn.as_str(), "B2");
        assert_eq!(book.inventory, 0);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let fields = FormFields {
            title: "   ".to_string(),
            ..filled()
        };
        assert_eq!(fields.to_record().unwrap().title, "   ");
    }

    #[test]
    fn values_are_not_trimmed() {
        let fields = FormFields {
            isbn: " B2 ".to_string(),
            title: " Dune ".to_string(),
            ..filled()
        };
        let book = fields.to_record().unwrap();
        assert_eq!(book.isbn.as_str(), " B2 ");
        assert_eq!(book.title, " Dune ");
    }

    #[test]
    fn empty_title_is_rejected() {
        let fields = FormFields {
            title: String::new(),
            ..filled()
        };
        match fields.to_record() {
            Err(Error::InvalidInput(InvalidInputError::MissingField { field })) => {
                assert_eq!(field, "title")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn default_form_is_closed_and_blank() {
        let form = FormState::default();
        assert!(!form.open);
        assert_eq!(form.fields.inventory, 0);
        assert!(form.fields.to_record().is_err());
    }
}
