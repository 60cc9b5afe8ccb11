use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Full application router: public routes, JWT-protected routes and global layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        .layer(CookieManagerLayer::new())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/", get(public::system::root))
        .route("/health", get(public::system::health))
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
}

fn protected_routes() -> Router<AppState> {
    use protected::{advisor, auth, candidate, establishment, lab_director, laboratory, thesis, user};

    Router::new()
        // Session
        .route("/auth/logout", get(auth::session_logout))
        .route("/auth/me", get(auth::session_whoami))
        // Users and advisors
        .route("/user/email/:email", get(user::get_by_email))
        .route("/user/:id", get(user::get).put(user::put).delete(user::delete))
        .route("/advisor", get(advisor::list))
        .route("/advisor/:id", get(advisor::get).put(advisor::put))
        // Establishments
        .route("/establishment", get(establishment::list).post(establishment::post))
        .route("/establishment/name/:name", get(establishment::get_by_name))
        .route(
            "/establishment/:id",
            get(establishment::get)
                .put(establishment::put)
                .delete(establishment::delete),
        )
        // Laboratories and their directors
        .route("/laboratory", get(laboratory::list).post(laboratory::post))
        .route("/laboratory/name/:name", get(laboratory::get_by_name))
        .route("/laboratory/city/:city", get(laboratory::list_by_city))
        .route("/laboratory/country/:country", get(laboratory::list_by_country))
        .route(
            "/laboratory/:id",
            get(laboratory::get).put(laboratory::put).delete(laboratory::delete),
        )
        .route("/lab-director", get(lab_director::list).post(lab_director::post))
        .route("/lab-director/laboratory/:id", get(lab_director::get_by_laboratory))
        .route("/lab-director/:id", get(lab_director::get).put(lab_director::put))
        // Candidates
        .route("/candidate", get(candidate::list).post(candidate::post))
        .route("/candidate/mine", get(candidate::list_mine))
        .route(
            "/candidate/:id",
            get(candidate::get).put(candidate::put).delete(candidate::delete),
        )
        // Theses and workflow actions
        .route("/thesis", get(thesis::list).post(thesis::post))
        .route("/thesis/mine", get(thesis::list_mine))
        .route("/thesis/:id", get(thesis::get).put(thesis::put))
        .route("/thesis/:id/validate-topic", put(thesis::validate_topic))
        .route("/thesis/:id/update-job-vacancy", put(thesis::update_job_vacancy))
        .route("/thesis/:id/assign-candidate", put(thesis::assign_candidate))
        .route("/thesis/:id/add-anrt-number", put(thesis::add_anrt_number))
        .route_layer(from_fn(jwt_auth_middleware))
}

/// Configured origins with credentials allowed, so the token cookie reaches the API.
fn cors_layer() -> CorsLayer {
    cors_layer_for(&config::config().security.cors_origins)
}

/// Credentialed CORS cannot use a literal `*` origin, so a wildcard entry
/// mirrors the request's `Origin` instead.
fn cors_layer_for(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS origin '*' configured; mirroring request origins");
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
