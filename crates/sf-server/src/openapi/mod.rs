//! OpenAPI specification generation
//!
//! Generates the OpenAPI document from code annotations using utoipa.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "sketchforge API",
        version = "0.1.0",
        description = "Arduino code generation backed by a chat-completion API"
    ),
    paths(
        crate::routes::generate::generate,
        crate::index,
        crate::health_check,
        crate::serve_openapi_json
    ),
    components(schemas(crate::types::ErrorResponse, crate::types::ApiError)),
    tags(
        (name = "generate", description = "Code generation"),
        (name = "system", description = "Service endpoints")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_generates_and_lists_generate_path() {
        let json = get_openapi_json().unwrap();
        assert!(json.contains("\"/generate\""));
        assert!(json.contains("\"/health\""));
    }
}
