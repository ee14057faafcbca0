use crate::domain::DomainError;
use crate::presentation::http_handlers::{self, error_to_response};
use actix_web::{error::InternalError, web};

/// Registers the `/posts` routes together with the extractor configs that
/// turn bad bodies and bad ids into plain-text 400 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let response = error_to_response(DomainError::InvalidPayload(err.to_string()));
            InternalError::from_response(err, response).into()
        });

    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let response = error_to_response(DomainError::InvalidPostId);
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config).app_data(path_config).service(
        web::scope("/posts")
            .route("", web::post().to(http_handlers::create_post))
            .route("", web::get().to(http_handlers::list_posts))
            .route("/{id}", web::get().to(http_handlers::get_post))
            .route("/{id}", web::put().to(http_handlers::update_post))
            .route("/{id}", web::delete().to(http_handlers::delete_post)),
    );
}
