use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enhance::{EnhanceTarget, EnhancementSession, EnhancementStatus, StartOutcome};
use crate::errors::AppError;
use crate::routes::resumes::ResumeSnapshot;
use crate::sessions::PendingEnhancement;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateEnhancementRequest {
    pub target: EnhanceTarget,
}

#[derive(Serialize)]
pub struct EnhancementView {
    pub id: Uuid,
    pub target: EnhanceTarget,
    pub field: String,
    pub status: EnhancementStatus,
    pub original: String,
    pub improved: Option<String>,
    pub error: Option<String>,
}

impl EnhancementView {
    fn of(id: Uuid, pending: &PendingEnhancement) -> Self {
        let session = &pending.session;
        Self {
            id,
            target: pending.target,
            field: session.field().to_string(),
            status: session.status(),
            original: session.content().to_string(),
            improved: session.improved().map(str::to_string),
            error: session.last_error().map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub accepted: bool,
    pub outcome: StartOutcome,
    pub enhancement: EnhancementView,
}

/// POST /api/v1/resumes/:id/enhancements
pub async fn handle_create_enhancement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateEnhancementRequest>,
) -> Result<(StatusCode, Json<EnhancementView>), AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;

    let content = req
        .target
        .read(session.editor.resume())
        .ok_or_else(|| AppError::NotFound(format!("No entry for target {:?}", req.target)))?;

    let mut enhancement = EnhancementSession::new(
        req.target.field_name(),
        content,
        Arc::clone(&state.enhancer),
        state.config.enhance_timeout,
    );
    enhancement.start();

    let enhancement_id = Uuid::new_v4();
    let pending = PendingEnhancement {
        target: req.target,
        session: enhancement,
    };
    let view = EnhancementView::of(enhancement_id, &pending);
    session.enhancements.insert(enhancement_id, pending);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/resumes/:id/enhancements/:eid
pub async fn handle_get_enhancement(
    State(state): State<AppState>,
    Path((id, eid)): Path<(Uuid, Uuid)>,
) -> Result<Json<EnhancementView>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let pending = sessions.get_mut(id)?.enhancement_mut(eid)?;
    pending.session.poll().await;
    Ok(Json(EnhancementView::of(eid, pending)))
}

/// POST /api/v1/resumes/:id/enhancements/:eid/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Path((id, eid)): Path<(Uuid, Uuid)>,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let pending = sessions.get_mut(id)?.enhancement_mut(eid)?;
    pending.session.poll().await;
    let outcome = pending.session.start();
    Ok(Json(GenerateResponse {
        accepted: outcome == StartOutcome::Started,
        outcome,
        enhancement: EnhancementView::of(eid, pending),
    }))
}

/// POST /api/v1/resumes/:id/enhancements/:eid/apply
///
/// Writes the improved text into the résumé and closes the enhancement.
/// If the target entry is gone the enhancement stays open and can be discarded.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path((id, eid)): Path<(Uuid, Uuid)>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    let target = session.enhancement_mut(eid)?.target;
    if target.read(session.editor.resume()).is_none() {
        return Err(AppError::NotFound(format!(
            "Entry for target {target:?} no longer exists"
        )));
    }

    let mut pending = session
        .enhancements
        .remove(&eid)
        .ok_or_else(|| AppError::NotFound(format!("Enhancement {eid} not found")))?;
    pending.session.poll().await;

    let applied = pending.session.apply(|text| {
        session.edit(|editor| target.write(editor, text));
    });
    if let Err(err) = applied {
        session.enhancements.insert(eid, pending);
        return Err(err.into());
    }
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// DELETE /api/v1/resumes/:id/enhancements/:eid
pub async fn handle_discard(
    State(state): State<AppState>,
    Path((id, eid)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.lock().await;
    let mut pending = sessions
        .get_mut(id)?
        .enhancements
        .remove(&eid)
        .ok_or_else(|| AppError::NotFound(format!("Enhancement {eid} not found")))?;
    pending.session.discard();
    Ok(StatusCode::NO_CONTENT)
}
