use std::sync::Arc;

use axum::extract::Json;
use quotes_kit::ApiResult;
use quotes_kit::response::JsonBody;
use quotes_sdk::{QuoteId, Session};

use crate::api::rest::dto::{QuoteDto, ToggleDto};
use crate::module::ConcreteAppServices;

pub(super) async fn toggle_favorite(
    svc: Arc<ConcreteAppServices>,
    session: Session,
    id: i32,
) -> ApiResult<JsonBody<ToggleDto>> {
    let outcome = svc.favorites.toggle(&session, QuoteId(id)).await?;
    Ok(Json(ToggleDto {
        quote_id: id,
        outcome: outcome.into(),
        favorite: outcome.is_favorite(),
    }))
}

pub(super) async fn list_favorites(
    svc: Arc<ConcreteAppServices>,
    session: Session,
) -> ApiResult<JsonBody<Vec<QuoteDto>>> {
    let quotes = svc.favorites.favorites_of(session.user_id).await?;
    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}
