/// JSON extractor whose rejection renders as an [`ApiError`]
///
/// Plain `axum::Json` answers malformed bodies with a text/plain 400 or 422;
/// `ApiJson` turns every rejection into the usual `bad_request` body.

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
