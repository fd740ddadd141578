//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::middleware::session_middleware;
use super::modules::{appointments, auth, health, profile};
use super::session::{SessionSettings, SESSION_COOKIE};
use crate::application::{AppointmentService, AuthService, UserService};

/// Unified state for every route. Axum extracts the specific handler state
/// via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub appointment_service: Arc<AppointmentService>,
    pub session: SessionSettings,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for auth::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        auth::AuthHandlerState {
            auth_service: Arc::clone(&s.auth_service),
            session: s.session.clone(),
        }
    }
}

impl FromRef<AppState> for profile::ProfileHandlerState {
    fn from_ref(s: &AppState) -> Self {
        profile::ProfileHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for appointments::AppointmentHandlerState {
    fn from_ref(s: &AppState) -> Self {
        appointments::AppointmentHandlerState {
            appointment_service: Arc::clone(&s.appointment_service),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE,
                    "Session token set by /api/v1/auth/login",
                ))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::logout,
        auth::current_session,
        // Profile
        profile::get_own_profile,
        profile::update_own_profile,
        profile::get_profile_by_key,
        // Appointments
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::set_staff_comments,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionInfo,
            profile::ProfileDto,
            profile::UpdateProfileRequest,
            profile::UpdateProfileResponse,
            appointments::AppointmentDto,
            appointments::StaffCommentsRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Cookie session sign-in and sign-out"),
        (name = "Profile", description = "Employee and customer profiles"),
        (name = "Appointments", description = "Bookings and staff comments"),
    ),
    info(
        title = "Spa Booking API",
        version = "1.0.0",
        description = "Appointments and employee/customer profiles for the spa booking site",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/logout", get(auth::logout))
        .route("/api/v1/auth/login", post(auth::login));

    // Session-protected routes
    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::current_session))
        .route(
            "/api/v1/profile",
            get(profile::get_own_profile).put(profile::update_own_profile),
        )
        .route("/api/v1/profiles/{key}", get(profile::get_profile_by_key))
        .route("/api/v1/appointments", get(appointments::list_appointments))
        .route("/api/v1/appointments/{id}", get(appointments::get_appointment))
        .route(
            "/api/v1/appointments/{id}/staff-comments",
            put(appointments::set_staff_comments),
        )
        .route_layer(middleware::from_fn_with_state(
            state.session.clone(),
            session_middleware,
        ));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
