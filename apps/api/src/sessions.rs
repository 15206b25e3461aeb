//! In-memory editing sessions, one per résumé. Lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;
use uuid::Uuid;

use crate::enhance::{EnhanceTarget, EnhancementSession};
use crate::errors::AppError;
use crate::models::ResumeEditor;

/// An open "improve" surface bound to one field of the résumé.
pub struct PendingEnhancement {
    pub target: EnhanceTarget,
    pub session: EnhancementSession,
}

pub struct ResumeSession {
    pub editor: ResumeEditor,
    pub enhancements: HashMap<Uuid, PendingEnhancement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeSession {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            editor: ResumeEditor::new(),
            enhancements: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Runs a mutation against the editor and stamps `updated_at`.
    pub fn edit<R>(&mut self, change: impl FnOnce(&mut ResumeEditor) -> R) -> R {
        let result = change(&mut self.editor);
        self.updated_at = Utc::now();
        result
    }

    pub fn enhancement_mut(&mut self, id: Uuid) -> Result<&mut PendingEnhancement, AppError> {
        self.enhancements
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Enhancement {id} not found")))
    }
}

/// All live sessions, keyed by résumé id.
pub struct Sessions(HashMap<Uuid, ResumeSession>);

impl Sessions {
    pub fn get(&self, id: Uuid) -> Result<&ResumeSession, AppError> {
        self.0
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut ResumeSession, AppError> {
        self.0
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Sessions>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Sessions(HashMap::new()))),
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session holding an empty résumé.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.lock().await.0.insert(id, ResumeSession::new());
        info!("Created resume session {id}");
        id
    }

    /// Closes a session. Any enhancement it owns is dropped, which cancels an
    /// in-flight request.
    pub async fn close(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.inner.lock().await.0.remove(&id);
        match removed {
            Some(session) => {
                info!(
                    "Closed resume session {id} at version {} ({} open enhancements)",
                    session.editor.version(),
                    session.enhancements.len()
                );
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Resume {id} not found"))),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.inner.lock().await
    }
}
