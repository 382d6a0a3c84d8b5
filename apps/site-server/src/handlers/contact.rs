use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use studio_core::domain::ContactForm;
use studio_shared::ApiResponse;

use super::client_info;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmissionReceipt {
    pub id: i32,
}

/// POST /api/contact
///
/// The stored submission is not echoed back; visitors only get a receipt.
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ContactForm>,
) -> AppResult<HttpResponse> {
    let submission = state.contact.submit(&body, client_info(&req)).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        SubmissionReceipt { id: submission.id },
        "Thank you for your message! We'll get back to you soon.",
    )))
}
