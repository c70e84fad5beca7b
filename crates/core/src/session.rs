//! The editable odontogram session.
//!
//! One session owns the working copy of one odontogram's collections and
//! keeps it synchronised with the record service: load replaces the copy
//! wholesale, `update` is the only mutation entry point, and save submits
//! the collections then reloads so the copy always reconciles back to the
//! server's authoritative state.
//!
//! The session moves through `Idle → Loading → Ready → Saving`; failures
//! drop back to `Ready` (or `Idle` before anything loaded) with an error
//! recorded, never tearing the session down. Methods take `&mut self`, so
//! the exclusive borrow serialises load/save the way the original UI
//! relied on its host disabling triggers mid-flight; the request
//! generation additionally tags every fetch so a response dispatched for a
//! previously bound odontogram can never overwrite the current one.

use crate::client::{CanvasApi, CanvasSnapshot};
use crate::model::{OdontogramId, OdontogramSummary, OdontogramWorkingCopy, WorkingCopyPatch};
use crate::{OdontogramError, OdontogramResult};
use std::sync::Arc;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No odontogram bound.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Working copy populated and editable.
    Ready,
    /// A save is in flight.
    Saving,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, toast-equivalent notification for the host UI to drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Editable working-copy session for one odontogram record.
pub struct OdontogramSession {
    api: Arc<dyn CanvasApi>,
    state: SessionState,
    bound: Option<OdontogramId>,
    generation: u64,
    working: OdontogramWorkingCopy,
    summary: Option<OdontogramSummary>,
    has_unsaved_changes: bool,
    last_error: Option<String>,
    notices: Vec<Notice>,
}

impl OdontogramSession {
    pub fn new(api: Arc<dyn CanvasApi>) -> Self {
        Self {
            api,
            state: SessionState::Idle,
            bound: None,
            generation: 0,
            working: OdontogramWorkingCopy::default(),
            summary: None,
            has_unsaved_changes: false,
            last_error: None,
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bound(&self) -> Option<OdontogramId> {
        self.bound
    }

    /// The editable working copy. Mutation goes through [`Self::update`].
    pub fn working_copy(&self) -> &OdontogramWorkingCopy {
        &self.working
    }

    /// Service-side summary from the most recent successful load.
    pub fn summary(&self) -> Option<&OdontogramSummary> {
        self.summary.as_ref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drains the pending transient notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// (Re)binds the session to an odontogram and loads it.
    ///
    /// Rebinding always discards the current working copy (collections are
    /// never merged across odontograms) and advances the request
    /// generation so a fetch still in flight for the previous id is
    /// discarded when it lands.
    pub async fn bind(&mut self, id: OdontogramId) -> OdontogramResult<()> {
        self.generation += 1;
        self.bound = Some(id);
        self.working = OdontogramWorkingCopy::default();
        self.summary = None;
        self.has_unsaved_changes = false;
        self.last_error = None;
        self.state = SessionState::Idle;
        self.load().await
    }

    /// Fetches the canonical collections and summary for the bound id.
    ///
    /// On success the working copy is replaced wholesale and the dirty flag
    /// cleared. On failure the previously loaded working copy is left
    /// untouched; a failed fetch is never partially applied.
    pub async fn load(&mut self) -> OdontogramResult<()> {
        let id = self.bound.ok_or(OdontogramError::NotBound)?;
        let generation = self.generation;
        self.state = SessionState::Loading;

        let api = Arc::clone(&self.api);
        match api.fetch_canvas(id).await {
            Ok(snapshot) => {
                self.apply_snapshot(generation, snapshot);
                Ok(())
            }
            Err(e) => {
                self.state = if self.summary.is_some() {
                    SessionState::Ready
                } else {
                    SessionState::Idle
                };
                let message = e.to_string();
                tracing::warn!(odontogram = %id, error = %message, "canvas load failed");
                self.last_error = Some(message.clone());
                self.notices.push(Notice {
                    level: NoticeLevel::Error,
                    message,
                });
                Err(e)
            }
        }
    }

    /// Merges a patch into the working copy and marks the session dirty.
    /// This is the only mutation entry point.
    pub fn update(&mut self, patch: WorkingCopyPatch) {
        self.working = self.working.apply_patch(patch);
        self.has_unsaved_changes = true;
    }

    /// Persists the working copy, then reloads to reconcile.
    ///
    /// Each non-empty collection is submitted to its own endpoint. If every
    /// attempted submission succeeds the dirty flag is cleared, a success
    /// notice is pushed unless `silent`, and the session reloads
    /// unconditionally: the server is authoritative, so edits made while
    /// the save was in flight are overwritten. A reconcile-reload failure
    /// is surfaced through the session's error state, not as a save
    /// failure.
    ///
    /// If any submission fails the whole save is failed: the dirty flag
    /// stays set, nothing reloads, and the working copy remains exactly the
    /// user's last edit.
    pub async fn save(&mut self, silent: bool) -> OdontogramResult<()> {
        let id = self.bound.ok_or(OdontogramError::NotBound)?;
        self.state = SessionState::Saving;

        let api = Arc::clone(&self.api);
        let result = Self::submit_collections(api.as_ref(), id, &self.working).await;

        match result {
            Ok(()) => {
                self.has_unsaved_changes = false;
                self.last_error = None;
                if !silent {
                    self.notices.push(Notice {
                        level: NoticeLevel::Success,
                        message: "Odontogram saved".into(),
                    });
                }
                if let Err(e) = self.load().await {
                    tracing::warn!(odontogram = %id, error = %e, "reconcile reload after save failed");
                }
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Ready;
                let message = e.to_string();
                tracing::warn!(odontogram = %id, error = %message, "canvas save failed");
                self.last_error = Some(message.clone());
                if !silent {
                    self.notices.push(Notice {
                        level: NoticeLevel::Error,
                        message,
                    });
                }
                Err(e)
            }
        }
    }

    // TODO(product): an emptied collection is skipped below, so a user
    // clearing e.g. every bridge can never persist that clear through this
    // path; it needs per-item deletes or a product decision to submit
    // empty collections.
    async fn submit_collections(
        api: &dyn CanvasApi,
        id: OdontogramId,
        working: &OdontogramWorkingCopy,
    ) -> OdontogramResult<()> {
        if !working.conditions.is_empty() {
            api.submit_conditions(id, &working.conditions).await?;
        }
        if !working.bridges.is_empty() {
            api.submit_bridges(id, &working.bridges).await?;
        }
        if !working.indicators.is_empty() {
            api.submit_indicators(id, &working.indicators).await?;
        }
        Ok(())
    }

    /// Applies a fetched snapshot if it still belongs to the current
    /// binding; responses tagged with an older generation are discarded.
    fn apply_snapshot(&mut self, generation: u64, snapshot: CanvasSnapshot) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding canvas response for a superseded binding"
            );
            return false;
        }
        self.working = snapshot.data;
        self.summary = Some(snapshot.summary);
        self.has_unsaved_changes = false;
        self.last_error = None;
        self.state = SessionState::Ready;
        true
    }
}
