use bytes::Bytes;
use iced::widget::image::Handle;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewId(u64);

/// Holds the decoded-on-demand image handles shown while an image is selected.
///
/// A preview is acquired when a file is selected and must be released once the
/// selection is replaced or discarded; handles never outlive their entry here.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    next_id: u64,
    handles: HashMap<PreviewId, Handle>,
}

impl PreviewRegistry {
    pub fn acquire(&mut self, bytes: Bytes) -> PreviewId {
        self.next_id += 1;
        let id = PreviewId(self.next_id);
        self.handles.insert(id, Handle::from_bytes(bytes));
        log::debug!("Acquired preview {id:?}");
        id
    }

    /// Returns `false` when the preview was already released.
    pub fn release(&mut self, id: PreviewId) -> bool {
        let released = self.handles.remove(&id).is_some();
        if released {
            log::debug!("Released preview {id:?}");
        } else {
            log::warn!("Preview {id:?} was released twice");
        }
        released
    }

    pub fn handle(&self, id: PreviewId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_hands_out_distinct_ids() {
        let mut registry = PreviewRegistry::default();
        let first = registry.acquire(Bytes::from_static(b"one"));
        let second = registry.acquire(Bytes::from_static(b"two"));

        assert_ne!(first, second);
        assert!(registry.handle(first).is_some());
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn release_is_idempotent() {
        let mut registry = PreviewRegistry::default();
        let id = registry.acquire(Bytes::from_static(b"img"));

        assert!(registry.release(id));
        assert!(!registry.release(id));
        assert!(registry.handle(id).is_none());
        assert_eq!(registry.live_count(), 0);
    }
}
