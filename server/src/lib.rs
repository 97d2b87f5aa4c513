#![deny(warnings)]

#[cfg(not(feature = "frontend"))]
mod ui;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

/// Register the site's services.
///
/// With the `frontend` feature this serves the embedded single page application. Unknown paths
/// resolve to its root, routing happens in the browser using the location fragment.
pub fn configure(cfg: &mut web::ServiceConfig) {
    #[cfg(feature = "frontend")]
    {
        use actix_web_static_files::ResourceFiles;

        let spa = kallari_site_server_embedded_frontend::site_assets();
        cfg.service(ResourceFiles::new("/", spa).resolve_not_found_to_root());
    }
    #[cfg(not(feature = "frontend"))]
    {
        cfg.service(ui::index);
    }
}

pub async fn run(bind: String, port: u16) -> std::io::Result<()> {
    log::info!("kallari-site {}", kallari_site::version());

    let server = HttpServer::new(|| App::new().wrap(Logger::default()).configure(configure));

    log::info!("starting up at http://{}:{}/", bind, port);

    server.bind((bind, port))?.run().await
}

#[cfg(all(test, not(feature = "frontend")))]
mod test {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn placeholder_index() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(ui::PLACEHOLDER.as_bytes()));
    }

    #[actix_web::test]
    async fn no_server_side_routes() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/proyectos").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
