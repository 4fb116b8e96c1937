use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::listings::ListingsQuery;
use crate::forms::listings::PostListingForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::listings as listings_service;

#[get("/listings")]
pub async fn list_listings(
    params: web::Query<ListingsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match listings_service::list_listings(repo.get_ref(), params.into_inner()) {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(err) => error_response(err),
    }
}

#[post("/accounts/{account_id}/listings")]
pub async fn post_listing(
    account_id: web::Path<String>,
    form: web::Json<PostListingForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match listings_service::post_listing(repo.get_ref(), &account_id, form.into_inner()) {
        Ok(listing) => HttpResponse::Created().json(listing),
        Err(err) => error_response(err),
    }
}
