//! Console notices.

use shelf_core::{Notice, NoticeLevel, Notifier};

use crate::output;

/// Prints each notice as a ✓ or ✗ line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => output::success(&notice.message),
            NoticeLevel::Failure => output::error(&notice.message),
        }
    }
}
