//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::Controller;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// ISBN of the new book
    #[arg(long)]
    pub isbn: String,

    /// Title
    #[arg(long)]
    pub title: String,

    /// Author first name
    #[arg(long)]
    pub author_first: String,

    /// Author last name
    #[arg(long)]
    pub author_last: String,

    /// Copies on hand
    #[arg(long, default_value_t = 0)]
    pub inventory: u32,
}

pub async fn run(controller: &Controller, args: AddArgs) -> Result<()> {
    controller.open_form();
    controller.update_form(|fields| {
        fields.isbn = args.isbn;
        fields.title = args.title;
        fields.author_first_name = args.author_first;
        fields.author_last_name = args.author_last;
        fields.inventory = args.inventory;
    });

    controller
        .submit_form()
        .await
        .context("Failed to add book")?;

    Ok(())
}
