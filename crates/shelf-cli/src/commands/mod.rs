//! Subcommand implementations.

mod add;
mod delete;
mod list;
mod show;
mod update;
mod view;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::debug;

use shelf::{BookStore, InventorySyncController};
use shelf_http::HttpBookStore;

use crate::cli::StoreArgs;
use crate::notifier::ConsoleNotifier;

/// The controller every command drives.
pub type Controller = InventorySyncController<HttpBookStore, ConsoleNotifier>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List books with authors (admin view)
    List(list::ListArgs),

    /// List books read-only: ISBN, title and inventory
    View(view::ViewArgs),

    /// Fetch a single book
    Show(show::ShowArgs),

    /// Add a new book
    Add(add::AddArgs),

    /// Set the inventory count of a book
    Update(update::UpdateArgs),

    /// Delete a book
    Delete(delete::DeleteArgs),
}

pub async fn handle(store: StoreArgs, cmd: Command) -> Result<()> {
    let controller = connect(&store)?;

    match cmd {
        Command::List(args) => list::run(&controller, args).await,
        Command::View(args) => view::run(&controller, args).await,
        Command::Show(args) => show::run(&controller, args).await,
        Command::Add(args) => add::run(&controller, args).await,
        Command::Update(args) => update::run(&controller, args).await,
        Command::Delete(args) => delete::run(&controller, args).await,
    }
}

fn connect(store: &StoreArgs) -> Result<Controller> {
    let config = store
        .config()
        .context("Book store address not configured (use --host/--port or SHELF_API_HOST/SHELF_API_PORT)")?;
    let http = HttpBookStore::from_config(&config).context("Invalid book store address")?;
    debug!(store = %http.url(), "Using book store");
    Ok(InventorySyncController::new(http, ConsoleNotifier))
}
