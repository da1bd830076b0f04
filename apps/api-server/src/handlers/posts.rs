//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::{PostChanges, PostDraft, PostId};
use postboard_core::ports::PageRequest;
use postboard_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};
use postboard_shared::{ApiResponse, Pagination};

use crate::extract::JsonBody;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts?page=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());

    let page = state.posts.list(request).await;
    let pagination = Pagination {
        total: page.total,
        page: page.page,
        total_pages: page.total_pages(),
    };

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok_with_message(page.posts, "Posts retrieved successfully")
            .with_pagination(pagination),
    ))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse()?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post,
        "Post retrieved successfully",
    )))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: JsonBody<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post,
        "Post created successfully",
    )))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse()?;
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let post = state.posts.update(id, changes).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post,
        "Post updated successfully",
    )))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id: PostId = path.parse()?;
    let post = state.posts.delete(id).await?;
    tracing::info!(post_id = %post.id, "Deleted post");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post,
        "Post deleted successfully",
    )))
}
