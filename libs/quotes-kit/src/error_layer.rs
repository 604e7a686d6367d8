//! Request context for problem responses.
//!
//! Handlers return [`Problem`] through `?` without knowing the request path.
//! [`problem_context_middleware`] fills `instance` (and `trace_id` when the
//! handler had none) on the way out.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::problem::{Problem, current_trace_id};

/// Re-render problem responses that left the handler without an `instance`.
pub async fn problem_context_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let Some(problem) = response.extensions().get::<Problem>() else {
        return response;
    };
    if !problem.instance.is_empty() {
        return response;
    }

    let mut problem = problem.clone().with_instance(path);
    if problem.trace_id.is_none()
        && let Some(tid) = current_trace_id()
    {
        problem = problem.with_trace_id(tid);
    }

    let mut fresh = problem.into_response();
    for (name, value) in response.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            fresh.headers_mut().append(name.clone(), value.clone());
        }
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware::from_fn;
    use axum::routing::get;
    use tower::ServiceExt;

    async fn missing() -> Result<&'static str, Problem> {
        Err(Problem::new(StatusCode::NOT_FOUND, "Not Found", "Quote 9 was not found"))
    }

    async fn scoped() -> Result<&'static str, Problem> {
        Err(Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized", "no session")
            .with_instance("/already/set"))
    }

    fn app() -> Router {
        Router::new()
            .route("/quotes/{id}", get(missing))
            .route("/scoped", get(scoped))
            .route("/ok", get(|| async { "fine" }))
            .layer(from_fn(problem_context_middleware))
    }

    async fn problem_at(uri: &str) -> Problem {
        let resp = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            resp.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some(crate::problem::APPLICATION_PROBLEM_JSON)
        );
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn fills_instance_from_request_path() {
        let p = problem_at("/quotes/9?verbose=1").await;
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.instance, "/quotes/9");
    }

    #[tokio::test]
    async fn keeps_instance_set_by_handler() {
        let p = problem_at("/scoped").await;
        assert_eq!(p.instance, "/already/set");
    }

    #[tokio::test]
    async fn passes_plain_responses_through() {
        let resp = app()
            .oneshot(Request::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
