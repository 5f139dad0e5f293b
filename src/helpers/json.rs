use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, message: String) -> JsonResponse<T> {
        JsonResponse {
            message,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> web::Json<JsonResponse<T>> {
        web::Json(self.into_response(message.into()))
    }

    fn error(self, status: StatusCode, message: String, fallback: &str) -> Error {
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        let body = HttpResponse::build(status).json(self.into_response(message.clone()));
        InternalError::from_response(message, body).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.into(), "Bad request")
    }

    pub fn form_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.into(), "Validation error")
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::NOT_FOUND, message.into(), "Object not found")
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.error(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "Internal error",
        )
    }
}
