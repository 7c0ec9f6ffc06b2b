//! Admin list command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::Controller;
use crate::output::{self, Columns};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the books as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(controller: &Controller, args: ListArgs) -> Result<()> {
    controller.load().await.context("Failed to fetch books")?;
    let books = controller.books();

    if args.json {
        return output::json_pretty(&books);
    }

    if books.is_empty() {
        eprintln!("{}", "No books found.".dimmed());
        return Ok(());
    }

    output::book_table(&books, Columns::Admin);
    Ok(())
}
