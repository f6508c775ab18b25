use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy that admits every origin, method and header while still
/// allowing credentials.
///
/// A literal `*` cannot be combined with `Access-Control-Allow-Credentials`,
/// so the request's own origin, method and headers are mirrored back instead.
pub fn permissive_with_credentials() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
