//! Stock notifiers.

use tokio::sync::mpsc;
use tracing::{info, warn};

use shelf_core::{Notice, NoticeLevel, Notifier};

/// Writes notices to the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(target: "shelf::notice", "{}", notice.message),
            NoticeLevel::Failure => warn!(target: "shelf::notice", "{}", notice.message),
        }
    }
}

/// Forwards notices over a channel, for UIs that render them elsewhere.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // Nobody listening is not an error for the operation.
        let _ = self.tx.send(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_notifier_forwards_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notice::failure("first"));
        notifier.notify(Notice::success("second"));

        assert_eq!(rx.try_recv().unwrap(), Notice::failure("first"));
        assert!(rx.try_recv().unwrap().is_success());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notice::success("ignored"));
    }
}
