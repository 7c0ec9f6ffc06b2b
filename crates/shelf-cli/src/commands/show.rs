//! Show command implementation.

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::Isbn;

use super::Controller;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// ISBN of the book
    pub isbn: String,

    /// Print the book as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(controller: &Controller, args: ShowArgs) -> Result<()> {
    let isbn = Isbn::new(&args.isbn).context("Invalid ISBN")?;

    let book = controller
        .fetch_record(&isbn)
        .await
        .with_context(|| format!("Failed to fetch book {}", isbn))?;

    if args.json {
        return output::json_pretty(&book);
    }

    output::field("ISBN", book.isbn.as_str());
    output::field("Title", &book.title);
    output::field("Author", &book.author());

    Ok(())
}
