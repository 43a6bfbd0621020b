//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! Implementación de los endpoints que no tocan disco:
//! - /echo/{texto}: Devuelve el texto del target
//! - /user-agent: Devuelve el header User-Agent
//! - /: Respuesta vacía de conectividad
//! - 405 para métodos no soportados en /files/

use crate::http::{Request, Response, StatusCode};
use crate::router::{RouteContext, RouteError};

/// Handler para /echo/{texto}
///
/// Devuelve como cuerpo el sufijo del target después de `/echo/`, sin
/// decodificar porcentajes. `/echo/` solo devuelve cuerpo vacío.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(request: &Request, _context: &RouteContext) -> Result<Response, RouteError> {
    let text = request.target().strip_prefix("/echo/").unwrap_or("");

    Ok(Response::new(StatusCode::Ok)
        .with_content(text)
        .with_content_type("text/plain"))
}

/// Handler para /user-agent
///
/// Devuelve el valor del header `User-Agent` del request (búsqueda
/// sensible a mayúsculas). Sin el header, el cuerpo queda vacío.
pub fn useragent_handler(
    request: &Request,
    _context: &RouteContext,
) -> Result<Response, RouteError> {
    let agent = request.header("User-Agent").unwrap_or("");

    Ok(Response::new(StatusCode::Ok)
        .with_content(agent)
        .with_content_type("text/plain"))
}

/// Handler para /
///
/// Prueba de conectividad: 200 sin cuerpo ni Content-Type.
pub fn root_handler(_request: &Request, _context: &RouteContext) -> Result<Response, RouteError> {
    Ok(Response::new(StatusCode::Ok))
}

/// Handler de método no soportado
///
/// Atrapa los métodos distintos de GET y POST sobre /files/ y responde
/// 405 sin cuerpo.
pub fn method_not_allowed_handler(
    _request: &Request,
    _context: &RouteContext,
) -> Result<Response, RouteError> {
    Ok(Response::new(StatusCode::MethodNotAllowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper para crear requests de prueba
    fn make_request(raw: &str) -> Request {
        Request::parse(raw.as_bytes())
    }

    fn context() -> RouteContext {
        RouteContext::default()
    }

    // ==================== ECHO ====================

    #[test]
    fn test_echo_handler_returns_suffix() {
        let request = make_request("GET /echo/abc HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.content(), b"abc");
    }

    #[test]
    fn test_echo_handler_empty_suffix() {
        let request = make_request("GET /echo/ HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.content().is_empty());
    }

    #[test]
    fn test_echo_handler_does_not_decode() {
        let request = make_request("GET /echo/hola%20mundo HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &context()).unwrap();

        assert_eq!(response.content(), b"hola%20mundo");
    }

    #[test]
    fn test_echo_handler_suffix_with_slashes() {
        let request = make_request("GET /echo/a/b/c HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &context()).unwrap();

        assert_eq!(response.content(), b"a/b/c");
    }

    #[test]
    fn test_echo_handler_sets_text_plain() {
        let request = make_request("GET /echo/abc HTTP/1.1\r\n\r\n");
        let response = echo_handler(&request, &context()).unwrap();

        let text = String::from_utf8_lossy(&response.to_bytes()).to_string();
        assert!(text.contains("Content-Type: text/plain\r\n"));
    }

    // ==================== USER-AGENT ====================

    #[test]
    fn test_useragent_handler_returns_header() {
        let request = make_request("GET /user-agent HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n");
        let response = useragent_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.content(), b"foo/1.0");
    }

    #[test]
    fn test_useragent_handler_missing_header() {
        let request = make_request("GET /user-agent HTTP/1.1\r\n\r\n");
        let response = useragent_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.content().is_empty());
    }

    #[test]
    fn test_useragent_handler_case_sensitive_lookup() {
        // "user-agent" en minúsculas no es "User-Agent"
        let request = make_request("GET /user-agent HTTP/1.1\r\nuser-agent: foo/1.0\r\n\r\n");
        let response = useragent_handler(&request, &context()).unwrap();

        assert!(response.content().is_empty());
    }

    // ==================== ROOT ====================

    #[test]
    fn test_root_handler_empty_ok() {
        let request = make_request("GET / HTTP/1.1\r\n\r\n");
        let response = root_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");
    }

    // ==================== 405 ====================

    #[test]
    fn test_method_not_allowed_handler() {
        let request = make_request("DELETE /files/x HTTP/1.1\r\n\r\n");
        let response = method_not_allowed_handler(&request, &context()).unwrap();

        assert_eq!(response.status(), StatusCode::MethodNotAllowed);
        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 405 Method Not Allowed\r\n\r\n"
        );
    }
}
