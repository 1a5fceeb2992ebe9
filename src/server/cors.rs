use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::error::ConfigError;

/// Build the CORS layer from configuration / 根据配置构建跨域中间件
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    if config.allowed_origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidCors {
                kind: "origin",
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let methods = config
        .allowed_methods
        .iter()
        .map(|method| {
            Method::from_bytes(method.as_bytes()).map_err(|_| ConfigError::InvalidCors {
                kind: "method",
                value: method.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let headers = config
        .allowed_headers
        .iter()
        .map(|header| {
            HeaderName::from_bytes(header.as_bytes()).map_err(|_| ConfigError::InvalidCors {
                kind: "header",
                value: header.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers))
}
