//! Snapshot iteration and channel-backed live iteration.
//!
//! Both mechanisms here follow the same rule: the set's read lock is held
//! only long enough to copy the membership out, never for the lifetime of
//! the iteration. That bounded hold is what lets
//! [`SyncSet::to_vec`](super::SyncSet::to_vec) and concurrent stream
//! consumers coexist without deadlock, where holding the lock across an
//! unbuffered channel hand-off would wedge every later operation.

use std::thread;

use crossbeam_channel::{Receiver, bounded};

// =============================================================================
// SetIter
// =============================================================================

/// An owning iterator over a point-in-time snapshot of a set.
///
/// Produced by [`SyncSet::iter`](super::SyncSet::iter). The elements were
/// copied out under the read lock; iteration itself touches no shared
/// state, so it can be arbitrarily slow or abandoned early without
/// affecting the set.
pub struct SetIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> SetIter<T> {
    pub(crate) fn from_snapshot(snapshot: Vec<T>) -> Self {
        Self {
            inner: snapshot.into_iter(),
        }
    }
}

impl<T> Iterator for SetIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// ElementStream
// =============================================================================

/// A stream of elements pushed by a producer thread through a bounded
/// hand-off channel.
///
/// Produced by [`SyncSet::stream`](super::SyncSet::stream). The producer
/// works from a snapshot, so the stream observes the membership as of the
/// moment the stream was created; concurrent mutation of the set neither
/// blocks nor is blocked by a slow consumer.
///
/// Dropping the stream before it is exhausted disconnects the channel; the
/// producer thread exits on its next send.
pub struct ElementStream<T> {
    receiver: Receiver<T>,
}

impl<T> ElementStream<T>
where
    T: Send + 'static,
{
    /// Spawns the producer thread feeding a channel of the given capacity.
    ///
    /// Capacity `0` creates a rendezvous channel: every element is handed
    /// off directly to a waiting consumer.
    pub(crate) fn spawn(snapshot: Vec<T>, capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        thread::spawn(move || {
            for element in snapshot {
                // A send fails only when the consumer dropped the stream.
                if sender.send(element).is_err() {
                    break;
                }
            }
        });
        Self { receiver }
    }
}

impl<T> Iterator for ElementStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

// =============================================================================
// Tests
// =============================================================================
