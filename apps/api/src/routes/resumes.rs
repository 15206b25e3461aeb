use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entries::{add, add_blank, contains, invalid_id, remove, update, ListEntry};
use crate::models::{
    EditorList, Education, PersonalInfo, Resume, ResumeEditor, Skill, SkillCategory, TemplateTag,
    WorkExperience,
};
use crate::render::{self, text::plain_text, Document, TemplateKind};
use crate::sessions::ResumeSession;
use crate::state::AppState;

/// The three ordered lists of the résumé, as named in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    WorkExperience,
    Education,
    Skills,
}

#[derive(Serialize)]
pub struct ResumeSnapshot {
    pub id: Uuid,
    pub version: u64,
    pub resume: Resume,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeSnapshot {
    pub(crate) fn of(id: Uuid, session: &ResumeSession) -> Self {
        Self {
            id,
            version: session.editor.version(),
            resume: session.editor.resume().clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct TemplateInfo {
    pub tag: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Deserialize)]
pub struct TemplateRequest {
    pub template: String,
}

#[derive(Deserialize)]
pub struct AddEntryRequest {
    /// Only meaningful for skills.
    pub category: Option<SkillCategory>,
}

#[derive(Serialize)]
pub struct AddEntryResponse {
    pub entry_id: Uuid,
    #[serde(flatten)]
    pub snapshot: ResumeSnapshot,
}

#[derive(Deserialize)]
pub struct UpdateEntryRequest {
    pub field: String,
    pub value: String,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateKind::ALL
            .iter()
            .map(|kind| TemplateInfo {
                tag: kind.tag(),
                label: kind.label(),
                description: kind.description(),
            })
            .collect(),
    )
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ResumeSnapshot>), AppError> {
    let id = state.sessions.create().await;
    let sessions = state.sessions.lock().await;
    let snapshot = ResumeSnapshot::of(id, sessions.get(id)?);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let sessions = state.sessions.lock().await;
    Ok(Json(ResumeSnapshot::of(id, sessions.get(id)?)))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/resumes/:id/personal-info
pub async fn handle_put_personal_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    session.edit(|editor| editor.set_personal_info(info));
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// PUT /api/v1/resumes/:id/template
pub async fn handle_put_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    session.edit(|editor| editor.set_template(TemplateTag::new(req.template)));
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// PUT /api/v1/resumes/:id/sections/:section
pub async fn handle_put_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, Section)>,
    Json(body): Json<Value>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    match section {
        Section::WorkExperience => replace_list::<WorkExperience>(session, body)?,
        Section::Education => replace_list::<Education>(session, body)?,
        Section::Skills => replace_list::<Skill>(session, body)?,
    };
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// POST /api/v1/resumes/:id/sections/:section/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, Section)>,
    req: Option<Json<AddEntryRequest>>,
) -> Result<(StatusCode, Json<AddEntryResponse>), AppError> {
    let category = req.and_then(|Json(req)| req.category).unwrap_or_default();
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    let entry_id = match section {
        Section::WorkExperience => append::<WorkExperience>(session, add_blank),
        Section::Education => append::<Education>(session, add_blank),
        Section::Skills => append::<Skill>(session, |list| add(list, Skill::in_category(category))),
    };
    Ok((
        StatusCode::CREATED,
        Json(AddEntryResponse {
            entry_id,
            snapshot: ResumeSnapshot::of(id, session),
        }),
    ))
}

/// PATCH /api/v1/resumes/:id/sections/:section/entries/:entry_id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((id, section, entry_id)): Path<(Uuid, Section, Uuid)>,
    Json(req): Json<UpdateEntryRequest>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    match section {
        Section::WorkExperience => update_entry::<WorkExperience>(session, entry_id, &req)?,
        Section::Education => update_entry::<Education>(session, entry_id, &req)?,
        Section::Skills => update_entry::<Skill>(session, entry_id, &req)?,
    };
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// DELETE /api/v1/resumes/:id/sections/:section/entries/:entry_id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, entry_id)): Path<(Uuid, Section, Uuid)>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(id)?;
    match section {
        Section::WorkExperience => remove_entry::<WorkExperience>(session, entry_id)?,
        Section::Education => remove_entry::<Education>(session, entry_id)?,
        Section::Skills => remove_entry::<Skill>(session, entry_id)?,
    };
    Ok(Json(ResumeSnapshot::of(id, session)))
}

/// GET /api/v1/resumes/:id/document
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(id)?;
    Ok(Json(render::render(session.editor.resume())))
}

/// GET /api/v1/resumes/:id/document/text
pub async fn handle_get_document_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(id)?;
    Ok(plain_text(&render::render(session.editor.resume())))
}

fn replace_list<E>(session: &mut ResumeSession, body: Value) -> Result<u64, AppError>
where
    E: EditorList + DeserializeOwned,
{
    let entries: Vec<E> = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid entry list: {e}")))?;
    if let Some(id) = invalid_id(&entries) {
        return Err(AppError::Validation(format!(
            "Entry id {id} is nil or appears more than once"
        )));
    }
    Ok(session.edit(|editor| E::replace(editor, entries)))
}

fn append<E: EditorList>(
    session: &mut ResumeSession,
    grow: impl FnOnce(&[E]) -> Vec<E>,
) -> Uuid {
    session.edit(|editor: &mut ResumeEditor| {
        let next = grow(E::current(editor.resume()));
        let entry_id = next.last().map(ListEntry::id).unwrap_or_default();
        E::replace(editor, next);
        entry_id
    })
}

fn update_entry<E: EditorList>(
    session: &mut ResumeSession,
    entry_id: Uuid,
    req: &UpdateEntryRequest,
) -> Result<u64, AppError> {
    let field: E::Field = serde_json::from_value(Value::String(req.field.clone()))
        .map_err(|_| AppError::Validation(format!("Unknown field '{}'", req.field)))?;
    ensure_entry::<E>(session, entry_id)?;
    Ok(session.edit(|editor| {
        let next = update(E::current(editor.resume()), entry_id, field, &req.value);
        E::replace(editor, next)
    }))
}

fn remove_entry<E: EditorList>(session: &mut ResumeSession, entry_id: Uuid) -> Result<u64, AppError> {
    ensure_entry::<E>(session, entry_id)?;
    Ok(session.edit(|editor| {
        let next = remove(E::current(editor.resume()), entry_id);
        E::replace(editor, next)
    }))
}

fn ensure_entry<E: EditorList>(session: &ResumeSession, entry_id: Uuid) -> Result<(), AppError> {
    if contains(E::current(session.editor.resume()), entry_id) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Entry {entry_id} not found")))
    }
}
