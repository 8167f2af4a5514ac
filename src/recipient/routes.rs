use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::recipient::model::{CreateRecipientRequest, Recipient, UpdateRecipientRequest};
use crate::{AppState, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/recipients",
    tag = "Recipients",
    responses(
        (status = 200, description = "List all recipients", body = Vec<Recipient>)
    )
)]
pub async fn get_all_recipients(state: web::Data<AppState>) -> impl Responder {
    let mut recipients = state.recipients.list().await;
    recipients.sort_by(|a, b| a.company_name.cmp(&b.company_name));
    HttpResponse::Ok().json(recipients)
}

#[utoipa::path(
    get,
    path = "/api/recipients/{id}",
    tag = "Recipients",
    responses(
        (status = 200, description = "Recipient found", body = Recipient),
        (status = 404, description = "Recipient not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the recipient to retrieve")
    )
)]
pub async fn get_recipient_by_id(
    id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.recipients.lookup(id.into_inner()).await {
        Ok(recipient) => HttpResponse::Ok().json(recipient),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse::not_found(&e.to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/api/recipients",
    tag = "Recipients",
    request_body = CreateRecipientRequest,
    responses(
        (status = 201, description = "Recipient created successfully", body = Recipient)
    )
)]
pub async fn create_recipient(
    req: web::Json<CreateRecipientRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let recipient = Recipient {
        id: Uuid::new_v4(),
        company_name: req.company_name,
        address_line1: req.address_line1,
        address_line2: req.address_line2,
        city: req.city,
        state: req.state,
        country: req.country,
        postal_code: req.postal_code,
    };

    state.recipients.insert(recipient.clone()).await;
    log::info!("recipient {} created", recipient.id);
    HttpResponse::Created().json(recipient)
}

#[utoipa::path(
    put,
    path = "/api/recipients/{id}",
    tag = "Recipients",
    request_body = UpdateRecipientRequest,
    responses(
        (status = 200, description = "Recipient updated successfully", body = Recipient),
        (status = 404, description = "Recipient not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the recipient to update")
    )
)]
pub async fn update_recipient(
    id: web::Path<Uuid>,
    req: web::Json<UpdateRecipientRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let mut recipient = match state.recipients.lookup(id).await {
        Ok(recipient) => recipient,
        Err(e) => {
            return HttpResponse::NotFound().json(ErrorResponse::not_found(&e.to_string()));
        }
    };

    let req = req.into_inner();
    if let Some(company_name) = req.company_name {
        recipient.company_name = company_name;
    }
    if let Some(address_line1) = req.address_line1 {
        recipient.address_line1 = address_line1;
    }
    if req.address_line2.is_some() {
        recipient.address_line2 = req.address_line2;
    }
    if let Some(city) = req.city {
        recipient.city = city;
    }
    if let Some(state_field) = req.state {
        recipient.state = state_field;
    }
    if let Some(country) = req.country {
        recipient.country = country;
    }
    if let Some(postal_code) = req.postal_code {
        recipient.postal_code = postal_code;
    }

    state.recipients.insert(recipient.clone()).await;
    HttpResponse::Ok().json(recipient)
}

#[utoipa::path(
    delete,
    path = "/api/recipients/{id}",
    tag = "Recipients",
    responses(
        (status = 204, description = "Recipient deleted"),
        (status = 404, description = "Recipient not found", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "ID of the recipient to delete")
    )
)]
pub async fn delete_recipient(id: web::Path<Uuid>, state: web::Data<AppState>) -> impl Responder {
    if state.recipients.remove(id.into_inner()).await {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(ErrorResponse::not_found("Recipient not found"))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recipients")
            .route(web::get().to(get_all_recipients))
            .route(web::post().to(create_recipient)),
    )
    .service(
        web::resource("/recipients/{id}")
            .route(web::get().to(get_recipient_by_id))
            .route(web::put().to(update_recipient))
            .route(web::delete().to(delete_recipient)),
    );
}
