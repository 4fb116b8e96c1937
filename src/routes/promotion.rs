use actix_web::{HttpResponse, Responder, get, post, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::promotion as promotion_service;

#[get("/accounts/{account_id}/promotion")]
pub async fn show_promotion(
    account_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match promotion_service::load_promotion_level(repo.get_ref(), &account_id) {
        Ok(progress) => HttpResponse::Ok().json(progress),
        Err(err) => error_response(err),
    }
}

#[post("/accounts/{account_id}/promotion/acknowledge")]
pub async fn acknowledge_promotion(
    account_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match promotion_service::acknowledge_promotion(repo.get_ref(), &account_id) {
        Ok(progress) => HttpResponse::Ok().json(progress),
        Err(err) => error_response(err),
    }
}
