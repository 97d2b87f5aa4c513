use actix_web::{get, HttpResponse};

pub const PLACEHOLDER: &str = "kallari-site server, built without the frontend";

/// Answer the root when the frontend isn't embedded.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(PLACEHOLDER)
}
