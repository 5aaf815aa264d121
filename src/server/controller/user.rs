use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::siglad_user::UserRole;

use crate::{
    model::{
        api::{ErrorDto, ForbiddenDto, OkDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Create a user account
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Missing fields or unknown role/status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 409, description = "Email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    user: AuthUser,
    Json(new_user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let service = UserService::new(&state.db);
    let created = service.create(user.user_id, new_user).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all user accounts, newest first
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let service = UserService::new(&state.db);
    let users = service.list(user.user_id).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Update an account's role and/or status
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = UserDto),
        (status = 400, description = "Unknown role/status value", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(update): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let service = UserService::new(&state.db);
    let updated = service.update(user.user_id, id, update).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Account deleted", body = OkDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let service = UserService::new(&state.db);
    service.delete(user.user_id, id).await?;

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}
