use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub const BOOKS_HEADING: &str = "Books in Library:";
pub const SUBSCRIBERS_HEADING: &str = "Library Subscribers:";

pub fn books(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listing(BOOKS_HEADING, catalog.book_lines()))
}

pub fn subscribers(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listing(SUBSCRIBERS_HEADING, catalog.subscriber_lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;

    #[test]
    fn lists_books_in_insertion_order() {
        let mut catalog = Catalog::new(Library::default());
        catalog.add_book("Ulysses", "Joyce", 2).unwrap();
        catalog.add_book("Dune", "Herbert", 1).unwrap();

        let result = books(&catalog).unwrap();
        assert_eq!(result.heading.as_deref(), Some(BOOKS_HEADING));
        assert_eq!(
            result.lines,
            vec![
                "Title: Ulysses, Author: Joyce, Book ID: 2",
                "Title: Dune, Author: Herbert, Book ID: 1",
            ]
        );
        assert!(!result.changed);
    }

    #[test]
    fn lists_subscribers_by_full_name() {
        let mut catalog = Catalog::new(Library::default());
        catalog.add_subscriber("Ada", "Lovelace").unwrap();

        let result = subscribers(&catalog).unwrap();
        assert_eq!(result.lines, vec!["Name: Ada Lovelace"]);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = Catalog::new(Library::default());
        assert!(books(&catalog).unwrap().lines.is_empty());
        assert!(subscribers(&catalog).unwrap().lines.is_empty());
    }
}
