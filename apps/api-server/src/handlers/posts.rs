//! Post resource handlers - the five CRUD operations.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use postit_core::DomainError;
use postit_core::domain::{NewPost, Post, PostChanges, PostQuery};
use postit_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters accepted by the listing endpoint. `page` arrives as a
/// string so the handler controls the rejection of non-integer values.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub page: Option<String>,
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        body: post.body,
        category: post.category,
        created_on: post.created_on,
    }
}

/// GET /posts
///
/// Lists posts newest first, optionally filtered by category and windowed to
/// a zero-based page of the configured size.
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let mut query = PostQuery::default();
    if let Some(category) = params.category {
        query = query.with_category(category);
    }
    if let Some(page) = params.page.as_deref() {
        // Rejected before any store call.
        let page: u64 = page
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid page number: {page}")))?;
        query = query.with_page(page, state.page_size);
    }

    let posts = state.posts.list(&query).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    // An id that does not parse cannot match any row, so it reads as a miss.
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::NotFound(format!("no post with id {raw}")))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = NewPost::new(req.title, req.body, req.category);
    post.validate()?;

    let stored = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(stored)))
}

/// PUT /posts/{id}
///
/// Overwrites title/body/category. The id and creation timestamp are never
/// touched, and an id with no matching row still reports success.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid post id: {raw}")))?;

    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        body: req.body,
        category: req.category,
    };
    state.posts.update(id, changes).await?;

    Ok(HttpResponse::Accepted().finish())
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid post id: {raw}")))?;

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().finish())
}
