//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers that share a path are registered together so they end up on one method router.
///
/// # Registered Endpoints
/// - `GET /api` - Liveness check
/// - `POST /api/outlet` - Create an outlet with all of its parts
/// - `POST /api/outlet/link` - Create an outlet from existing parts
/// - `GET /api/outlet/{id}` - Get an outlet with selected relations
/// - `PATCH /api/outlet/{id}/verify` - Verify or un-verify an outlet
/// - `PATCH /api/outlet/{id}/collection` - Attach collections to empty tiers
/// - `GET /api/outlet/{id}/collection` - Get the collection of one tier
/// - `POST /api/outlet/{id}/infinity-pass` - Create and link an infinity pass
/// - `GET /api/outlet/{id}/infinity-pass` - Get the outlet's infinity pass
/// - `POST /api/outlet-details` - Create details, manager and bartender
/// - `POST /api/outlet-legal-document` - Create a legal document
/// - `POST /api/outlet-timing` - Create a weekly schedule
/// - `POST /api/outlet-timing/{id}/slot` - Add a slot to a schedule
/// - `PATCH /api/outlet-timing-slot/{id}` - Update a slot
/// - `POST /api/collection` - Create a collection with liquor items
/// - `GET /api/collection/{id}` - Get a collection
/// - `POST /api/owner` - Register an owner
/// - `GET /api/owner/{id}` - Get an owner with outlets
/// - `PUT /api/owner/{id}` - Update an owner's profile
///
/// # Returns
/// An Axum `Router<AppState>`, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pegman", description = "Pegman API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::outlet::OUTLET_TAG, description = "Outlet onboarding and verification"),
        (name = controller::timing::TIMING_TAG, description = "Outlet opening hours"),
        (name = controller::collection::COLLECTION_TAG, description = "Tiered collections"),
        (name = controller::infinity_pass::INFINITY_PASS_TAG, description = "Infinity passes"),
        (name = controller::owner::OWNER_TAG, description = "Outlet owners"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::outlet::create_outlet))
        .routes(routes!(controller::outlet::link_outlet))
        .routes(routes!(controller::outlet::get_outlet))
        .routes(routes!(controller::outlet::verify_outlet))
        .routes(routes!(controller::outlet::create_outlet_details))
        .routes(routes!(controller::outlet::create_legal_document))
        .routes(routes!(controller::timing::create_timing))
        .routes(routes!(controller::timing::add_timing_slot))
        .routes(routes!(controller::timing::update_timing_slot))
        .routes(routes!(controller::collection::create_collection))
        .routes(routes!(controller::collection::get_collection))
        .routes(routes!(
            controller::collection::attach_collections,
            controller::collection::get_outlet_collection
        ))
        .routes(routes!(
            controller::infinity_pass::create_infinity_pass,
            controller::infinity_pass::get_infinity_pass
        ))
        .routes(routes!(controller::owner::register_owner))
        .routes(routes!(
            controller::owner::get_owner,
            controller::owner::update_owner
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
