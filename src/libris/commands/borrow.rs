use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;

pub fn run<S: Session + ?Sized>(catalog: &mut Catalog, session: &mut S) -> Result<CmdResult> {
    let loan = catalog.borrow_book(session)?;
    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(loan.to_string()));
    Ok(result.with_loan(loan))
}
