// ── Reactive slice cells ──
//
// A slice holds one sub-resource array of the composite property record
// (rooms, gallery items, menu, ...). Refresh semantics are wholesale:
// `replace_all` swaps the entire array; there is no incremental patching.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive holder for one list-valued slice.
///
/// Backed by a `watch` channel: every `replace_all` bumps a version
/// counter and publishes a fresh snapshot to subscribers. A version of
/// zero means the slice has never been loaded.
pub struct SliceCell<T: Clone + Send + Sync + 'static> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
    version: watch::Sender<u64>,
}

impl<T: Clone + Send + Sync + 'static> SliceCell<T> {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (version, _) = watch::channel(0u64);
        Self { snapshot, version }
    }

    /// Replace the entire slice content.
    pub fn replace_all(&self, items: Vec<T>) {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(items));
        self.version.send_modify(|v| *v += 1);
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// True if `replace_all` has ever been called.
    pub fn is_loaded(&self) -> bool {
        *self.version.borrow() > 0
    }

    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> SliceStream<T> {
        SliceStream::new(self.snapshot.subscribe())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for SliceCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reactive holder for one single-valued slice (overview, policies).
pub struct ValueCell<T: Clone + Send + Sync + 'static> {
    value: watch::Sender<Option<Arc<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ValueCell<T> {
    pub fn new() -> Self {
        let (value, _) = watch::channel(None);
        Self { value }
    }

    pub fn replace(&self, value: T) {
        self.value.send_modify(|v| *v = Some(Arc::new(value)));
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.value.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.value.subscribe()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ValueCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscription to a slice.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via `changed()` or by converting to a `Stream`.
pub struct SliceStream<T: Clone + Send + Sync + 'static> {
    current: Arc<Vec<Arc<T>>>,
    receiver: watch::Receiver<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> SliceStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<Arc<T>>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Snapshot captured at subscription time.
    pub fn current(&self) -> &Arc<Vec<Arc<T>>> {
        &self.current
    }

    /// Latest snapshot (may have changed since subscription).
    pub fn latest(&self) -> Arc<Vec<Arc<T>>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the owning cell has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<Arc<T>>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> SliceWatchStream<T> {
        SliceWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct SliceWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for SliceWatchStream<T> {
    type Item = Arc<Vec<Arc<T>>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin when the inner type is Unpin, which
        // Arc<Vec<Arc<T>>> always is.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_unloaded_and_empty() {
        let cell: SliceCell<String> = SliceCell::new();
        assert!(!cell.is_loaded());
        assert!(cell.is_empty());
    }

    #[test]
    fn replace_all_is_wholesale() {
        let cell: SliceCell<String> = SliceCell::new();
        cell.replace_all(vec!["a".into(), "b".into()]);
        assert_eq!(cell.len(), 2);

        // A second replace does not merge; it swaps.
        cell.replace_all(vec!["c".into()]);
        let snap = cell.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(*snap[0], "c");
        assert!(cell.is_loaded());
    }

    #[test]
    fn replacing_with_empty_marks_loaded() {
        let cell: SliceCell<String> = SliceCell::new();
        cell.replace_all(Vec::new());
        assert!(cell.is_loaded());
        assert!(cell.is_empty());
    }

    #[tokio::test]
    async fn subscriber_sees_replacements() {
        let cell: SliceCell<i64> = SliceCell::new();
        let mut stream = cell.subscribe();
        assert!(stream.current().is_empty());

        cell.replace_all(vec![1, 2, 3]);
        let snap = stream.changed().await.unwrap();
        assert_eq!(snap.len(), 3);
    }

    #[test]
    fn value_cell_replace_and_get() {
        let cell: ValueCell<String> = ValueCell::new();
        assert!(!cell.is_loaded());

        cell.replace("hello".into());
        assert_eq!(*cell.get().unwrap(), "hello");
        assert!(cell.is_loaded());
    }
}
