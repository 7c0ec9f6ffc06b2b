//! Read-only view command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::Controller;
use crate::output::{self, Columns};

#[derive(Args, Debug)]
pub struct ViewArgs {}

pub async fn run(controller: &Controller, _args: ViewArgs) -> Result<()> {
    controller.load().await.context("Failed to fetch books")?;
    let books = controller.books();

    if books.is_empty() {
        eprintln!("{}", "No books found.".dimmed());
        return Ok(());
    }

    output::book_table(&books, Columns::ReadOnly);
    Ok(())
}
