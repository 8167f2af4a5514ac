use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::document::models::{
    CreateDocumentRequest, Document, Totals, UpdateDocumentRequest,
};
use crate::document::validation::Validator;
use crate::render::html::render_html;
use crate::render::layout::DocumentLayout;
use crate::render::{
    ChromiumRenderer, DrawRenderer, PdfBackend, PdfRenderer, RenderedPdf, RENDER_COUNTER,
};
use crate::{AppState, ErrorResponse};

const DEFAULT_PAYMENT_TERMS_DAYS: i64 = 30;

/// Document snapshot plus its derived totals, as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    pub totals: Totals,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        let totals = document.totals();
        Self { document, totals }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PdfQuery {
    /// PDF backend; defaults to the headless-browser path.
    pub backend: Option<PdfBackend>,
}

#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "Documents",
    responses(
        (status = 200, description = "List of all documents", body = [DocumentResponse])
    )
)]
pub async fn get_all_documents(state: web::Data<AppState>) -> impl Responder {
    let documents = state.documents.read();
    let mut all: Vec<&Document> = documents.values().collect();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let responses: Vec<DocumentResponse> =
        all.into_iter().cloned().map(DocumentResponse::from).collect();
    HttpResponse::Ok().json(responses)
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = "Documents",
    responses(
        (status = 200, description = "Document found", body = DocumentResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the document to retrieve")
    )
)]
pub async fn get_document_by_id(
    id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> impl Responder {
    let documents = state.documents.read();
    match documents.get(&id.into_inner()) {
        Some(document) => HttpResponse::Ok().json(DocumentResponse::from(document.clone())),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("Document not found")),
    }
}

#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "Documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document created successfully", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_document(
    req: web::Json<CreateDocumentRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(report) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&report));
    }

    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());
    let payment_terms_days = req.payment_terms_days.unwrap_or(DEFAULT_PAYMENT_TERMS_DAYS);
    let now = Utc::now();

    let document = Document {
        id: Uuid::new_v4(),
        kind: req.kind,
        document_number: state.issue_number(req.kind, date),
        date,
        due_date: Document::due_date_for(date, payment_terms_days),
        payment_terms_days,
        recipient_id: req.recipient_id,
        description: req.description,
        shipment_cost: req.shipment_cost.unwrap_or(Decimal::ZERO),
        discount: req.discount.unwrap_or(Decimal::ZERO),
        collected_payment: req.collected_payment.unwrap_or(Decimal::ZERO),
        items: req.items,
        created_at: now,
        updated_at: now,
    };

    state.documents.write().insert(document.id, document.clone());
    log::info!("document {} created ({})", document.document_number, document.id);
    HttpResponse::Created().json(DocumentResponse::from(document))
}

#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = "Documents",
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, description = "Document updated successfully", body = DocumentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the document to update")
    )
)]
pub async fn update_document(
    id: web::Path<Uuid>,
    req: web::Json<UpdateDocumentRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(report) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&report));
    }

    let document_id = id.into_inner();
    let updated = {
        let mut documents = state.documents.write();
        let Some(document) = documents.get_mut(&document_id) else {
            return HttpResponse::NotFound().json(ErrorResponse::not_found("Document not found"));
        };

        if let Some(date) = req.date {
            document.date = date;
        }
        if let Some(days) = req.payment_terms_days {
            document.payment_terms_days = days;
        }
        // Due date tracks its inputs; recompute on either change.
        if req.date.is_some() || req.payment_terms_days.is_some() {
            document.due_date =
                Document::due_date_for(document.date, document.payment_terms_days);
        }
        if let Some(recipient_id) = req.recipient_id {
            document.recipient_id = recipient_id;
        }
        if req.description.is_some() {
            document.description = req.description;
        }
        if let Some(value) = req.shipment_cost {
            document.shipment_cost = value;
        }
        if let Some(value) = req.discount {
            document.discount = value;
        }
        if let Some(value) = req.collected_payment {
            document.collected_payment = value;
        }
        if let Some(items) = req.items {
            document.items = items;
        }
        document.updated_at = Utc::now();
        document.clone()
    };

    state.preview_cache.invalidate(&document_id).await;
    HttpResponse::Ok().json(DocumentResponse::from(updated))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "Documents",
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the document to delete")
    )
)]
pub async fn delete_document(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let document_id = id.into_inner();
    let removed = state.documents.write().remove(&document_id);
    match removed {
        Some(document) => {
            state.preview_cache.invalidate(&document_id).await;
            log::info!("document {} deleted", document.document_number);
            HttpResponse::NoContent().finish()
        }
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("Document not found")),
    }
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}/preview",
    tag = "Documents",
    responses(
        (status = 200, description = "Self-contained HTML rendition, printable to A4", content_type = "text/html"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the document to preview")
    )
)]
pub async fn preview_document(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    let document_id = id.into_inner();

    if let Some(html) = state.preview_cache.get(&document_id).await {
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html);
    }

    let document = {
        let documents = state.documents.read();
        match documents.get(&document_id) {
            Some(document) => document.clone(),
            None => {
                return HttpResponse::NotFound()
                    .json(ErrorResponse::not_found("Document not found"));
            }
        }
    };

    let layout = resolve_layout(&state, &document).await;
    let html = render_html(&layout);
    state.preview_cache.insert(document_id, html.clone()).await;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}/pdf",
    tag = "Documents",
    responses(
        (status = 200, description = "PDF rendition, A4", content_type = "application/pdf"),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 502, description = "Render backend failed", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the document to render"),
        PdfQuery
    )
)]
pub async fn download_pdf(
    id: web::Path<Uuid>,
    query: web::Query<PdfQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let document = {
        let documents = state.documents.read();
        match documents.get(&id.into_inner()) {
            Some(document) => document.clone(),
            None => {
                return HttpResponse::NotFound()
                    .json(ErrorResponse::not_found("Document not found"));
            }
        }
    };

    let backend = query.backend.unwrap_or(PdfBackend::Chromium);
    let layout = resolve_layout(&state, &document).await;

    let renderer: Box<dyn PdfRenderer + Send> = match backend {
        PdfBackend::Chromium => Box::new(ChromiumRenderer::new(
            state.renderer_config.chromium_binary.clone(),
            state.renderer_config.render_timeout,
        )),
        PdfBackend::Draw => Box::new(DrawRenderer),
    };

    // Rendering blocks (child process or canvas encoding); keep it off the
    // async workers.
    let rendered = web::block(move || {
        renderer.render(&layout).map(|bytes| RenderedPdf {
            filename: sanitize_filename::sanitize(format!("{}.pdf", layout.document_number)),
            bytes,
        })
    })
    .await;

    match rendered {
        Ok(Ok(pdf)) => {
            RENDER_COUNTER
                .with_label_values(&[backend.as_str(), "ok"])
                .inc();
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", pdf.filename),
                ))
                .body(pdf.bytes)
        }
        Ok(Err(e)) => {
            RENDER_COUNTER
                .with_label_values(&[backend.as_str(), "error"])
                .inc();
            log::error!(
                "{} backend failed for {}: {}",
                backend.as_str(),
                document.document_number,
                e
            );
            // The caller can retry on the alternate backend.
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "RenderFailed",
                &format!("{} backend: {}", backend.as_str(), e),
            ))
        }
        Err(e) => {
            RENDER_COUNTER
                .with_label_values(&[backend.as_str(), "error"])
                .inc();
            log::error!("render task for {} aborted: {}", document.document_number, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(
                "Render task aborted before completion",
            ))
        }
    }
}

/// Resolve the recipient and build the layout. A failed lookup degrades the
/// address block instead of failing the render.
async fn resolve_layout(state: &web::Data<AppState>, document: &Document) -> DocumentLayout {
    let recipient = match state.recipients.lookup(document.recipient_id).await {
        Ok(recipient) => Some(recipient),
        Err(e) => {
            log::warn!(
                "recipient lookup for document {} failed: {}",
                document.document_number,
                e
            );
            None
        }
    };
    DocumentLayout::build(document, recipient.as_ref(), &state.renderer_config)
}
