//! In-process change feed: every mutating service publishes the table it
//! touched, consumers drop whatever they cached and re-query. The pure
//! recompute lives in `reports`, this is only the invalidation channel.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Members,
    Deposits,
    Fines,
    Expenses,
    Settings,
}

#[derive(Clone)]
pub struct ChangePort(broadcast::Sender<Change>);

impl ChangePort {
    pub(crate) fn channel() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self(tx)
    }

    pub fn publish(&self, change: Change) {
        // Nobody listening is fine, writes do not depend on readers.
        let _ = self.0.send(change);
    }

    pub fn subscribe(&self) -> ChangeStream {
        ChangeStream(self.0.subscribe())
    }
}

pub struct ChangeStream(broadcast::Receiver<Change>);

impl ChangeStream {
    /// Next change, skipping over lag: a slow consumer that missed
    /// notifications only needs to know *something* changed.
    pub async fn recv(&mut self) -> Option<Change> {
        loop {
            match self.0.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_published_changes() {
        let port = ChangePort::channel();
        let mut stream = port.subscribe();

        port.publish(Change::Deposits);
        port.publish(Change::Fines);

        assert_eq!(stream.recv().await, Some(Change::Deposits));
        assert_eq!(stream.recv().await, Some(Change::Fines));
    }
}
