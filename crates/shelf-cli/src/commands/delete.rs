//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::Isbn;

use super::Controller;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ISBN of the book
    pub isbn: String,
}

pub async fn run(controller: &Controller, args: DeleteArgs) -> Result<()> {
    let isbn = Isbn::new(&args.isbn).context("Invalid ISBN")?;

    controller
        .delete_record(&isbn)
        .await
        .with_context(|| format!("Failed to delete book {}", isbn))?;

    Ok(())
}
