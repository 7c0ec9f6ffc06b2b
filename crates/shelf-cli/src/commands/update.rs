//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use shelf_core::Isbn;

use super::Controller;
use crate::output::{self, Columns};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// ISBN of the book
    pub isbn: String,

    /// New inventory count
    pub inventory: u32,
}

pub async fn run(controller: &Controller, args: UpdateArgs) -> Result<()> {
    let isbn = Isbn::new(&args.isbn).context("Invalid ISBN")?;

    controller.load().await.context("Failed to fetch books")?;

    if !controller.edit_local_inventory(&isbn, args.inventory) {
        bail!("No book with ISBN {}", isbn);
    }

    controller
        .commit_update(&isbn)
        .await
        .context("Failed to update inventory")?;

    let books = controller.books();
    if let Some(book) = books.iter().find(|b| b.isbn == isbn) {
        output::book_table(std::slice::from_ref(book), Columns::Admin);
    }

    Ok(())
}
