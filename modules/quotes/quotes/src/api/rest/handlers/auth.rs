use std::sync::Arc;

use axum::extract::Json;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use quotes_kit::ApiResult;
use quotes_kit::response::{JsonBody, no_content};
use quotes_sdk::Session;
use tracing::{Span, info};

use crate::api::rest::dto::{LoginReq, RegisterReq, SessionDto, UserDto};
use crate::module::ConcreteAppServices;

pub(super) async fn register(
    svc: Arc<ConcreteAppServices>,
    req: RegisterReq,
) -> ApiResult<impl IntoResponse> {
    let email = req.email.clone();
    let id = svc.identity.register(req.into()).await?;
    Span::current().record("user_id", id.0);
    info!("Registered via REST");

    let location = format!("/users/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto { id: id.0, email }),
    ))
}

pub(super) async fn login(
    svc: Arc<ConcreteAppServices>,
    req: LoginReq,
) -> ApiResult<JsonBody<SessionDto>> {
    let session = svc.identity.login(&req.email, &req.password).await?;
    Span::current().record("user_id", session.user_id.0);
    Ok(Json(session.into()))
}

pub(super) async fn logout(
    svc: Arc<ConcreteAppServices>,
    session: Session,
) -> ApiResult<impl IntoResponse> {
    svc.identity.logout(&session).await;
    Ok(no_content())
}

pub(super) async fn me(svc: Arc<ConcreteAppServices>, session: Session) -> ApiResult<JsonBody<UserDto>> {
    let user = svc.identity.me(&session).await?;
    Ok(Json(user.into()))
}
