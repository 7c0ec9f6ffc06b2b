//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use shelf_core::{BookRecord, Error};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print the error a command ended with.
///
/// Store failures already produced a ✗ notice, so only the cause chain is
/// added underneath as detail.
pub fn failure(err: &anyhow::Error) {
    let detail = format!("{:#}", err);
    if was_notified(err) {
        eprintln!("  {}", detail.dimmed());
    } else {
        error(&detail);
    }
}

fn was_notified(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<Error>(),
            Some(Error::Transport(_) | Error::Protocol(_) | Error::Decode { .. })
        )
    })
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Which columns a book table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    /// ISBN, title, author and inventory.
    Admin,
    /// ISBN, title and inventory only.
    ReadOnly,
}

/// Print books as an aligned table.
pub fn book_table(books: &[BookRecord], columns: Columns) {
    for line in table_lines(books, columns) {
        println!("{}", line);
    }
}

fn table_lines(books: &[BookRecord], columns: Columns) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(books.len() + 1);
    rows.push(match columns {
        Columns::Admin => vec!["ISBN", "Title", "Author", "Inventory"],
        Columns::ReadOnly => vec!["ISBN", "Title", "Inventory"],
    }
    .into_iter()
    .map(String::from)
    .collect());

    for book in books {
        let mut row = vec![book.isbn.to_string(), book.title.clone()];
        if columns == Columns::Admin {
            row.push(book.author());
        }
        row.push(book.inventory.to_string());
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
