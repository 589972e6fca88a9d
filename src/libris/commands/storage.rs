use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, DataFiles};
use crate::error::Result;
use crate::store::DataStore;

pub fn load<S: DataStore>(
    store: &S,
    catalog: &mut Catalog,
    files: &DataFiles,
) -> Result<CmdResult> {
    // Read both before replacing either so a bad file leaves the catalog intact
    let books = store.load_books(&files.books)?;
    let subscribers = store.load_subscribers(&files.subscribers)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Loaded {} books and {} subscribers.",
        books.len(),
        subscribers.len()
    )));
    catalog.replace_books(books);
    catalog.replace_subscribers(subscribers);
    Ok(result)
}

pub fn save<S: DataStore>(
    store: &mut S,
    catalog: &Catalog,
    files: &DataFiles,
) -> Result<CmdResult> {
    store.save_books(catalog.books(), &files.books)?;
    store.save_subscribers(catalog.subscribers(), &files.subscribers)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} books and {} subscribers.",
        catalog.books().len(),
        catalog.subscribers().len()
    )));
    Ok(result)
}

/// Empties the data files. The in-memory catalog is left alone.
pub fn clear<S: DataStore>(store: &mut S, files: &DataFiles) -> Result<CmdResult> {
    store.clear(&[files.books.as_str(), files.subscribers.as_str()])?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} and {}.",
        files.books, files.subscribers
    )));
    Ok(result)
}
