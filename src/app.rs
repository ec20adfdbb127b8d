use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/get/", get(handlers::list_entries))
        .route("/get/:id", get(handlers::get_entry))
        .route("/create/", post(handlers::create_entry))
        .route("/update/:id", put(handlers::update_entry))
        .route("/delete/:id", delete(handlers::delete_entry))
        .layer(middleware::from_fn(allow_any_origin))
        .with_state(state)
}

/// Open CORS: preflights are answered here, every other response gets the
/// allow-origin header.
async fn allow_any_origin(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        let mut preflight = StatusCode::NO_CONTENT.into_response();
        let headers = preflight.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        );
        preflight
    } else {
        next.run(request).await
    };

    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}
