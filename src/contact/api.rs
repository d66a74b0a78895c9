use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http::StatusCode;

use super::relay::ContactRelay;
use super::{ContactError, ContactRequest, ErrorBody};

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = match self {
            ContactError::MissingFields => StatusCode::BAD_REQUEST,
            ContactError::SendFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/contact`, mergeable into any router state.
pub fn router<S>(relay: ContactRelay) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/contact", post(contact))
        .with_state(relay)
}

async fn contact(
    State(relay): State<ContactRelay>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(%rejection, "unreadable contact request");
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match relay.relay(&request).await {
        Ok(res) => (StatusCode::OK, Json(res)).into_response(),
        Err(e) => e.into_response(),
    }
}
