//! Inventory synchronization controller.
//!
//! The controller keeps a local mirror of the store's book list and funnels
//! every write through the same sequence: remote call, settling delay, full
//! refetch, notice. Local state is never patched from a write response.
//!
//! Operations may overlap freely. There is no de-duplication and no
//! ordering between operations; whichever refetch completes last wins.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use shelf_core::{BookRecord, BookStore, Error, Isbn, Notice, Notifier, Result};

use crate::form::{FormFields, FormState};

/// Pause between a successful write and the refetch that follows it.
///
/// The store does not promise that a write is visible to the next read.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

const FETCH_LIST_FAILED: &str = "Error fetching book list. Check console for details.";
const FETCH_BOOK_FAILED: &str = "Error fetching book. Check console for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn success_message(self) -> &'static str {
        match self {
            Mutation::Create => "Book added successfully!",
            Mutation::Update => "Inventory updated successfully!",
            Mutation::Delete => "Book deleted successfully!",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Mutation::Create => "Error adding book. Check console for details.",
            Mutation::Update => "Error updating inventory. Check console for details.",
            Mutation::Delete => "Error deleting book. Check console for details.",
        }
    }
}

/// Everything a view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryState {
    /// Books in the order the store returned them.
    pub books: Vec<BookRecord>,
    /// The creation form.
    pub form: FormState,
}

impl InventoryState {
    /// Find a book by ISBN.
    pub fn find(&self, isbn: &Isbn) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.isbn == isbn)
    }
}

/// Owns the local book list and mediates every call to the book store.
///
/// Cheap to clone; clones share state. Every state change is published on
/// a watch channel, see [`subscribe`](Self::subscribe).
pub struct InventorySyncController<S, N> {
    inner: Arc<Inner<S, N>>,
}

struct Inner<S, N> {
    store: S,
    notifier: N,
    state: watch::Sender<InventoryState>,
    settle_delay: Duration,
}

impl<S, N> Clone for InventorySyncController<S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: BookStore, N: Notifier> InventorySyncController<S, N> {
    /// Create a controller with an empty book list and the default settling delay.
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_settle_delay(store, notifier, DEFAULT_SETTLE_DELAY)
    }

    /// Create a controller with a custom settling delay.
    pub fn with_settle_delay(store: S, notifier: N, settle_delay: Duration) -> Self {
        let (state, _) = watch::channel(InventoryState::default());
        Self {
            inner: Arc::new(Inner {
                store,
                notifier,
                state,
                settle_delay,
            }),
        }
    }

    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Snapshot of the current book list.
    pub fn books(&self) -> Vec<BookRecord> {
        self.inner.state.borrow().books.clone()
    }

    /// Snapshot of the creation form.
    pub fn form(&self) -> FormState {
        self.inner.state.borrow().form.clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<InventoryState> {
        self.inner.state.subscribe()
    }

    /// Initial fetch when a view is first shown.
    pub async fn load(&self) -> Result<()> {
        self.refresh().await
    }

    /// Replace the local book list with the store's current list.
    ///
    /// On failure the previous list is kept and a failure notice is sent.
    /// Success is silent.
    pub async fn refresh(&self) -> Result<()> {
        self.refresh_with(&CancellationToken::new()).await
    }

    #[instrument(skip_all)]
    pub async fn refresh_with(&self, cancel: &CancellationToken) -> Result<()> {
        match cancellable(cancel, self.inner.store.list_books()).await {
            Ok(books) => {
                debug!(count = books.len(), "Replacing local book list");
                self.inner.state.send_modify(|state| state.books = books);
                Ok(())
            }
            Err(e) => Err(self.report_failure(e, FETCH_LIST_FAILED)),
        }
    }

    /// Fetch a single book without touching local state.
    #[instrument(skip(self, isbn), fields(isbn = %isbn))]
    pub async fn fetch_record(&self, isbn: &Isbn) -> Result<BookRecord> {
        self.inner
            .store
            .get_book(isbn)
            .await
            .map_err(|e| self.report_failure(e, FETCH_BOOK_FAILED))
    }

    /// Stage a new inventory count locally.
    ///
    /// Only the matching record's `inventory` changes. Nothing is sent to
    /// the store until [`commit_update`](Self::commit_update). Returns
    /// false, leaving state untouched, if no local record has this ISBN.
    pub fn edit_local_inventory(&self, isbn: &Isbn, inventory: u32) -> bool {
        self.inner.state.send_if_modified(|state| {
            match state.books.iter_mut().find(|book| &book.isbn == isbn) {
                Some(book) => {
                    book.inventory = inventory;
                    true
                }
                None => false,
            }
        })
    }

    /// Persist the locally staged inventory count of a book.
    ///
    /// Returns `Ok(false)` without any request if the ISBN is not in the
    /// local list. On failure the staged value stays in place.
    pub async fn commit_update(&self, isbn: &Isbn) -> Result<bool> {
        self.commit_update_with(isbn, &CancellationToken::new()).await
    }

    #[instrument(skip(self, isbn, cancel), fields(isbn = %isbn))]
    pub async fn commit_update_with(
        &self,
        isbn: &Isbn,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        let staged = self.inner.state.borrow().find(isbn).map(|book| book.inventory);
        let Some(inventory) = staged else {
            debug!("No local record, skipping update");
            return Ok(false);
        };

        let request = self.inner.store.update_inventory(isbn, inventory);
        self.mutate(Mutation::Update, cancel, request, || {}).await?;
        Ok(true)
    }

    /// Delete a book. The local list only changes through the refetch.
    pub async fn delete_record(&self, isbn: &Isbn) -> Result<()> {
        self.delete_record_with(isbn, &CancellationToken::new()).await
    }

    #[instrument(skip(self, isbn, cancel), fields(isbn = %isbn))]
    pub async fn delete_record_with(
        &self,
        isbn: &Isbn,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let request = self.inner.store.delete_book(isbn);
        self.mutate(Mutation::Delete, cancel, request, || {}).await
    }

    /// Create a book.
    ///
    /// On success the form is cleared and closed. On failure it is left
    /// exactly as it was so the user can correct and retry.
    pub async fn create_record(&self, book: BookRecord) -> Result<()> {
        self.create_record_with(book, &CancellationToken::new()).await
    }

    #[instrument(skip(self, book, cancel), fields(isbn = %book.isbn))]
    pub async fn create_record_with(
        &self,
        book: BookRecord,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let request = self.inner.store.create_book(&book);
        self.mutate(Mutation::Create, cancel, request, || {
            self.inner
                .state
                .send_modify(|state| state.form = FormState::default());
        })
        .await
    }

    /// Show the creation form with every field reset.
    pub fn open_form(&self) {
        self.inner.state.send_modify(|state| {
            state.form = FormState {
                open: true,
                fields: FormFields::default(),
            }
        });
    }

    /// Hide the creation form, keeping what was typed.
    pub fn close_form(&self) {
        self.inner.state.send_modify(|state| state.form.open = false);
    }

    /// Edit the form fields in place.
    pub fn update_form(&self, edit: impl FnOnce(&mut FormFields)) {
        self.inner
            .state
            .send_modify(|state| edit(&mut state.form.fields));
    }

    /// Submit the creation form.
    ///
    /// A missing field is rejected before any request is made and without
    /// a notice, like a browser refusing to submit a `required` input.
    pub async fn submit_form(&self) -> Result<()> {
        self.submit_form_with(&CancellationToken::new()).await
    }

    pub async fn submit_form_with(&self, cancel: &CancellationToken) -> Result<()> {
        let book = self.inner.state.borrow().form.fields.to_record()?;
        self.create_record_with(book, cancel).await
    }

    /// Shared tail of every write: request, settle, refetch, notice.
    async fn mutate<F>(
        &self,
        mutation: Mutation,
        cancel: &CancellationToken,
        request: F,
        on_success: impl FnOnce(),
    ) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        if let Err(e) = cancellable(cancel, request).await {
            return Err(self.report_failure(e, mutation.failure_message()));
        }

        let settle = async {
            tokio::time::sleep(self.inner.settle_delay).await;
            Ok::<(), Error>(())
        };
        if let Err(e) = cancellable(cancel, settle).await {
            debug!(?mutation, "Cancelled while settling");
            return Err(e);
        }

        // A failed refetch reports itself; the write still went through.
        if let Err(Error::Cancelled) = self.refresh_with(cancel).await {
            return Err(Error::Cancelled);
        }

        on_success();
        info!(?mutation, "Mutation applied");
        self.inner
            .notifier
            .notify(Notice::success(mutation.success_message()));
        Ok(())
    }

    fn report_failure(&self, err: Error, message: &str) -> Error {
        if err.is_cancelled() {
            debug!("Operation cancelled");
            return err;
        }
        error!(error = %err, "{}", message);
        self.inner.notifier.notify(Notice::failure(message));
        err
    }
}

async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}
