//! Process-local session marker.
//!
//! Two values scoped to one browsing session: which admin (if any) is
//! logged in, and the publish stamp this session last synced against.
//! They are deliberately excluded from the durable store since they
//! describe *this session's* view, not shared state, and a fresh
//! process starts with both empty.

use aura_core::UserId;

use crate::sync::PublishStamp;

/// Ephemeral per-session state owned by the service.
#[derive(Debug, Clone, Default)]
pub struct SessionMarker {
    current_admin: Option<UserId>,
    last_synced: Option<PublishStamp>,
}

impl SessionMarker {
    /// A fresh session with no admin and no sync history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the authenticated admin for this session.
    pub fn set_current_admin(&mut self, id: UserId) {
        self.current_admin = Some(id);
    }

    /// The authenticated admin, if any.
    #[must_use]
    pub const fn current_admin(&self) -> Option<&UserId> {
        self.current_admin.as_ref()
    }

    /// Clear the authenticated admin (logout).
    pub fn clear_current_admin(&mut self) {
        self.current_admin = None;
    }

    /// The publish stamp this session last synced against, if any.
    #[must_use]
    pub const fn last_synced(&self) -> Option<&PublishStamp> {
        self.last_synced.as_ref()
    }

    /// Advance the session's sync stamp.
    pub fn set_last_synced(&mut self, stamp: PublishStamp) {
        self.last_synced = Some(stamp);
    }
}
