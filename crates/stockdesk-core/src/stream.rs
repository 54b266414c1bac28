// ── Reactive state streams ──
//
// Subscription types for consuming store state changes in UI layers.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::StoreState;

/// A subscription to one store's state.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via [`changed`](Self::changed), or conversion to a
/// `Stream` for combinator pipelines.
pub struct StateStream<T: Clone + Send + Sync + 'static> {
    current: StoreState<T>,
    receiver: watch::Receiver<StoreState<T>>,
}

impl<T: Clone + Send + Sync + 'static> StateStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<StoreState<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time (or the last `changed()`).
    pub fn current(&self) -> &StoreState<T> {
        &self.current
    }

    /// The latest snapshot (may be newer than `current`).
    pub fn latest(&self) -> StoreState<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the owning store has been dropped.
    pub async fn changed(&mut self) -> Option<StoreState<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> StateWatchStream<T> {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields a fresh [`StoreState`] snapshot each time the owning store
/// is mutated.
pub struct StateWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<StoreState<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for StateWatchStream<T> {
    type Item = StoreState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin because StoreState is Unpin.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
