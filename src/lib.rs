use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod document;
pub mod recipient;
pub mod render;
pub mod state;

pub use crate::config::RendererConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::document::handlers::get_all_documents,
            crate::document::handlers::get_document_by_id,
            crate::document::handlers::create_document,
            crate::document::handlers::update_document,
            crate::document::handlers::delete_document,
            crate::document::handlers::preview_document,
            crate::document::handlers::download_pdf,
            crate::recipient::routes::get_all_recipients,
            crate::recipient::routes::get_recipient_by_id,
            crate::recipient::routes::create_recipient,
            crate::recipient::routes::update_recipient,
            crate::recipient::routes::delete_recipient
        ),
        components(
            schemas(
                document::models::Document,
                document::models::DocumentKind,
                document::models::LineItem,
                document::models::Totals,
                document::models::CreateDocumentRequest,
                document::models::UpdateDocumentRequest,
                document::handlers::DocumentResponse,
                render::PdfBackend,
                recipient::model::Recipient,
                recipient::model::CreateRecipientRequest,
                recipient::model::UpdateRecipientRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Documents", description = "Invoice/memo CRUD and rendering endpoints."),
            (name = "Recipients", description = "Recipient directory endpoints.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost server")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let renderer_config = RendererConfig::from_env();
    log::info!(
        "asset root {}, chromium binary '{}'",
        renderer_config.asset_root.display(),
        renderer_config.chromium_binary
    );
    let app_state = web::Data::new(AppState::new(renderer_config));

    let prometheus = PrometheusMetricsBuilder::new("crown_diamonds_server")
        .registry(prometheus::default_registry().clone())
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .configure(recipient::routes::config)
                    .service(
                        web::resource("/documents")
                            .route(web::get().to(document::handlers::get_all_documents))
                            .route(web::post().to(document::handlers::create_document)),
                    )
                    .service(
                        web::resource("/documents/{id}")
                            .route(web::get().to(document::handlers::get_document_by_id))
                            .route(web::put().to(document::handlers::update_document))
                            .route(web::delete().to(document::handlers::delete_document)),
                    )
                    .service(
                        web::resource("/documents/{id}/preview")
                            .route(web::get().to(document::handlers::preview_document)),
                    )
                    .service(
                        web::resource("/documents/{id}/pdf")
                            .route(web::get().to(document::handlers::download_pdf)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .max_connections(25000)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
