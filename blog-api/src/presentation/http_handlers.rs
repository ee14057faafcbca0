use crate::application::PostService;
use crate::domain::post::PostPayload;
use crate::domain::DomainError;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

// Тело успешного ответа на запись
#[derive(serde::Serialize)]
struct MessageResponse {
    message: &'static str,
}

// Преобразование DomainError в текстовый HttpResponse
pub(crate) fn error_to_response(err: DomainError) -> HttpResponse {
    let status = StatusCode::from_u16(err.to_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    }

    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(err.client_message())
}

pub async fn create_post(
    post_service: web::Data<Arc<PostService>>,
    post_data: web::Json<PostPayload>,
) -> impl Responder {
    tracing::info!("Creating post");

    match post_service.create_post(post_data.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Post created successfully",
        }),
        Err(err) => error_to_response(err),
    }
}

pub async fn get_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Getting post with id={}", post_id);

    match post_service.get_post(post_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn list_posts(post_service: web::Data<Arc<PostService>>) -> impl Responder {
    tracing::info!("Listing posts");

    match post_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err),
    }
}

pub async fn update_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
    post_data: web::Json<PostPayload>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Updating post id={}", post_id);

    match post_service
        .update_post(post_id, post_data.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Post updated successfully",
        }),
        Err(err) => error_to_response(err),
    }
}

pub async fn delete_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<i64>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Deleting post id={}", post_id);

    match post_service.delete_post(post_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Post deleted successfully",
        }),
        Err(err) => error_to_response(err),
    }
}
