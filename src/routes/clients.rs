use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::dto::clients::ClientsQuery;
use crate::forms::clients::{AddClientForm, ClientNotesForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::clients as clients_service;

#[get("/accounts/{account_id}/clients")]
pub async fn list_clients(
    account_id: web::Path<String>,
    params: web::Query<ClientsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::load_clients(repo.get_ref(), &account_id, params.into_inner()) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(err) => error_response(err),
    }
}

#[post("/accounts/{account_id}/clients")]
pub async fn add_client(
    account_id: web::Path<String>,
    form: web::Json<AddClientForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::add_client(repo.get_ref(), &account_id, form.into_inner()) {
        Ok(record) => HttpResponse::Created().json(record),
        Err(err) => error_response(err),
    }
}

/// Accepts a raw CSV body with `name`, `phone` and `notes` columns.
#[post("/accounts/{account_id}/clients/upload")]
pub async fn upload_clients(
    account_id: web::Path<String>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::import_clients_csv(repo.get_ref(), &account_id, &body) {
        Ok(created) => HttpResponse::Created().json(json!({ "created": created })),
        Err(err) => error_response(err),
    }
}

#[post("/accounts/{account_id}/clients/{client_id}/notes")]
pub async fn save_client_notes(
    path: web::Path<(String, String)>,
    form: web::Json<ClientNotesForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (account_id, client_id) = path.into_inner();

    match clients_service::update_client_notes(
        repo.get_ref(),
        &account_id,
        &client_id,
        form.into_inner(),
    ) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err) => error_response(err),
    }
}
