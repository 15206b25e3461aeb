pub mod enhancements;
pub mod health;
pub mod resumes;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(resumes::handle_list_templates))
        // Résumé editing
        .route("/api/v1/resumes", post(resumes::handle_create_resume))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/personal-info",
            put(resumes::handle_put_personal_info),
        )
        .route(
            "/api/v1/resumes/:id/template",
            put(resumes::handle_put_template),
        )
        .route(
            "/api/v1/resumes/:id/sections/:section",
            put(resumes::handle_put_section),
        )
        .route(
            "/api/v1/resumes/:id/sections/:section/entries",
            post(resumes::handle_add_entry),
        )
        .route(
            "/api/v1/resumes/:id/sections/:section/entries/:entry_id",
            patch(resumes::handle_update_entry).delete(resumes::handle_remove_entry),
        )
        .route(
            "/api/v1/resumes/:id/document",
            get(resumes::handle_get_document),
        )
        .route(
            "/api/v1/resumes/:id/document/text",
            get(resumes::handle_get_document_text),
        )
        // Enhancement
        .route(
            "/api/v1/resumes/:id/enhancements",
            post(enhancements::handle_create_enhancement),
        )
        .route(
            "/api/v1/resumes/:id/enhancements/:eid",
            get(enhancements::handle_get_enhancement).delete(enhancements::handle_discard),
        )
        .route(
            "/api/v1/resumes/:id/enhancements/:eid/generate",
            post(enhancements::handle_generate),
        )
        .route(
            "/api/v1/resumes/:id/enhancements/:eid/apply",
            post(enhancements::handle_apply),
        )
        .with_state(state)
}
