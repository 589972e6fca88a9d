use crate::catalog::Catalog;
use crate::commands::{list, CmdResult};
use crate::error::Result;

pub const GROUP_HEADING: &str = "Subscribers grouped and sorted by number of borrowed books:";

pub fn books(catalog: &mut Catalog) -> Result<CmdResult> {
    catalog.sort_books_by_title();
    Ok(list::books(catalog)?.changed())
}

pub fn subscribers(catalog: &mut Catalog) -> Result<CmdResult> {
    catalog.sort_subscribers_by_name();
    Ok(list::subscribers(catalog)?.changed())
}

pub fn group_by_borrowed(catalog: &mut Catalog) -> Result<CmdResult> {
    let tallies = catalog.group_subscribers_by_borrowed_count();
    let lines: Vec<String> = tallies
        .iter()
        .map(|t| format!("Subscriber Name: {}, Borrowed Books: {}", t.name, t.borrowed))
        .collect();
    Ok(CmdResult::default()
        .with_listing(GROUP_HEADING, lines)
        .with_tallies(tallies)
        .changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;
    use crate::session::ScriptedSession;

    #[test]
    fn sorting_books_lists_the_new_order() {
        let mut catalog = Catalog::new(Library::default());
        catalog.add_book("Ulysses", "Joyce", 2).unwrap();
        catalog.add_book("Dune", "Herbert", 1).unwrap();

        let result = books(&mut catalog).unwrap();
        assert!(result.changed);
        assert!(result.lines[0].starts_with("Title: Dune"));
        assert_eq!(catalog.books()[0].title, "Dune");
    }

    #[test]
    fn sorting_subscribers_lists_the_new_order() {
        let mut catalog = Catalog::new(Library::default());
        catalog.add_subscriber("Alan", "Turing").unwrap();
        catalog.add_subscriber("Ada", "Lovelace").unwrap();

        let result = subscribers(&mut catalog).unwrap();
        assert_eq!(result.lines, vec!["Name: Ada Lovelace", "Name: Alan Turing"]);
    }

    #[test]
    fn grouping_reports_counts() {
        let mut catalog = Catalog::new(Library::default());
        catalog.add_book("Dune", "Herbert", 1).unwrap();
        catalog.add_subscriber("Ada", "Lovelace").unwrap();
        catalog.add_subscriber("Alan", "Turing").unwrap();
        catalog
            .borrow_book(&mut ScriptedSession::new(["2", "1"]))
            .unwrap();

        let result = group_by_borrowed(&mut catalog).unwrap();
        assert_eq!(result.heading.as_deref(), Some(GROUP_HEADING));
        assert_eq!(
            result.lines,
            vec![
                "Subscriber Name: Alan Turing, Borrowed Books: 1",
                "Subscriber Name: Ada Lovelace, Borrowed Books: 0",
            ]
        );
        assert_eq!(result.tallies.len(), 2);
    }
}
