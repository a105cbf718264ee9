use crate::errors::ServerError;
use crate::templates::components::render_error_page;
use astra::Response;

// Result alias used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response.
///
/// Malformed slugs recover as plain 404s; a failing store is 503 so
/// callers can tell "no data" from "data inaccessible".
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error_page(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error_page(400, &msg),

        ServerError::InvalidSlug(_) => render_error_page(404, "Not Found"),

        ServerError::StoreUnavailable(msg) => {
            eprintln!("Store unavailable: {msg}");
            render_error_page(503, "Listing data is temporarily unavailable")
        }

        ServerError::InternalError => render_error_page(500, "Internal Server Error"),
    }
}
