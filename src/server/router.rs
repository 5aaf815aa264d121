//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every handler is registered here with its utoipa annotation; the collected
//! OpenAPI document is served through Swagger UI at `/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /health`, `GET /health/db` - Probes
/// - `POST /auth/login` - Credential exchange for a bearer token
/// - `POST /declarations` - DUCA submission (TRANSPORTISTA)
/// - `GET /declarations/{id}` - Declaration detail (AGENTE, ADMIN)
/// - `GET /status/mine` - Own declarations (TRANSPORTISTA)
/// - `GET /validation/pending`, `POST /validation/{id}/decision` - Agent queue
/// - `POST/GET /users`, `PATCH/DELETE /users/{id}` - Account admin (ADMIN)
/// - `GET/PUT/PATCH /admin/importers...`, `/admin/exporters...` - Catalog admin
/// - `GET /catalogs/importers`, `GET /catalogs/exporters` - Authenticated lookups
///
/// The OpenAPI specification is available at `/docs/openapi.json`; interactive
/// documentation is served at `/docs`.
pub fn routes() -> Router<AppState> {
    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.get_or_insert_with(Default::default);
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }

    #[derive(OpenApi)]
    #[openapi(
        info(title = "SIGLAD", description = "SIGLAD customs declaration API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::health::HEALTH_TAG, description = "Health probes"),
            (name = controller::auth::AUTH_TAG, description = "Authentication routes"),
            (name = controller::declaration::DECLARATION_TAG, description = "DUCA submission and detail"),
            (name = controller::status::STATUS_TAG, description = "Transporter declaration status"),
            (name = controller::validation::VALIDATION_TAG, description = "Agent validation workflow"),
            (name = controller::user::USER_TAG, description = "User administration"),
            (name = controller::importer::IMPORTER_TAG, description = "Importer catalog administration"),
            (name = controller::exporter::EXPORTER_TAG, description = "Exporter catalog administration"),
            (name = controller::catalog::CATALOG_TAG, description = "Catalog lookups"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::health::health_db))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::declaration::submit_declaration))
        .routes(routes!(controller::declaration::get_declaration))
        .routes(routes!(controller::status::my_declarations))
        .routes(routes!(controller::validation::pending_declarations))
        .routes(routes!(controller::validation::decide_declaration))
        .routes(routes!(controller::user::create_user, controller::user::list_users))
        .routes(routes!(controller::user::update_user, controller::user::delete_user))
        .routes(routes!(controller::importer::list_importers))
        .routes(routes!(controller::importer::upsert_importer))
        .routes(routes!(controller::importer::set_importer_estado))
        .routes(routes!(controller::exporter::list_exporters))
        .routes(routes!(controller::exporter::upsert_exporter))
        .routes(routes!(controller::exporter::set_exporter_estado))
        .routes(routes!(controller::catalog::importer_catalog))
        .routes(routes!(controller::catalog::exporter_catalog))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
