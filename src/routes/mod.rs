//! JSON endpoints of the dashboard API.

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod clients;
pub mod listings;
pub mod promotion;

/// Registers every endpoint under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(clients::upload_clients)
            .service(clients::list_clients)
            .service(clients::add_client)
            .service(clients::save_client_notes)
            .service(promotion::show_promotion)
            .service(promotion::acknowledge_promotion)
            .service(listings::list_listings)
            .service(listings::post_listing),
    );
}

/// Maps a service failure onto an HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn errors_map_to_status_codes() {
        assert_eq!(
            error_response(ServiceError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(ServiceError::Form("bad".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(ServiceError::TypeConstraint("bad".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(ServiceError::Repository(RepositoryError::Unexpected(
                "boom".to_string()
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
