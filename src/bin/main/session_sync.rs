use glance_core::session::SessionState;

use super::SESSION_SAVE_DEBOUNCE_MS;

/// Debounces session saves while reading. Snapshots are only taken once the
/// app has been dirty for the debounce window.
pub(super) struct SessionSyncState {
    last_saved: Option<SessionState>,
    dirty_since_ms: Option<u64>,
}

impl SessionSyncState {
    pub(super) fn new() -> Self {
        Self {
            last_saved: None,
            dirty_since_ms: None,
        }
    }

    pub(super) fn mark_dirty(&mut self, now_ms: u64) {
        self.dirty_since_ms.get_or_insert(now_ms);
    }

    pub(super) fn due(&self, now_ms: u64) -> bool {
        self.dirty_since_ms
            .is_some_and(|since| now_ms.saturating_sub(since) >= SESSION_SAVE_DEBOUNCE_MS)
    }

    /// Returns `true` when `current` differs from what was last written.
    pub(super) fn needs_save(&mut self, current: &SessionState) -> bool {
        self.dirty_since_ms = None;
        self.last_saved.as_ref() != Some(current)
    }

    pub(super) fn mark_saved(&mut self, saved: SessionState) {
        self.last_saved = Some(saved);
        self.dirty_since_ms = None;
    }

    /// Forgets the saved baseline, e.g. after another document was opened.
    pub(super) fn reset(&mut self) {
        self.last_saved = None;
        self.dirty_since_ms = None;
    }
}
