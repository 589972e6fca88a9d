use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn book(catalog: &mut Catalog, title: &str, author: &str, book_id: i32) -> Result<CmdResult> {
    let added = catalog.add_book(title, author, book_id)?;
    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!(
        "Book added: {} by {}",
        added.title, added.author
    )));
    Ok(result)
}

pub fn subscriber(catalog: &mut Catalog, first_name: &str, last_name: &str) -> Result<CmdResult> {
    let added = catalog.add_subscriber(first_name, last_name)?;
    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!(
        "Subscriber added: {}",
        added.full_name()
    )));
    Ok(result)
}
