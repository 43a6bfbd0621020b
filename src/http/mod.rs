//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests HTTP/1.1
//! - Construcción de responses HTTP
//! - Manejo de status codes
//! - Negociación de Content-Encoding y compresión gzip
//!
//! ## Alcance del protocolo
//!
//! Se implementa el subconjunto de HTTP/1.1 que necesita el servidor:
//! - Una conexión transporta un request y recibe una respuesta
//! - No hay chunked transfer encoding ni conexiones persistentes
//! - El header `Host` no se valida
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod encoding; // Negociación de Accept-Encoding y códec gzip
pub mod request;  // Parsing de HTTP requests
pub mod response; // Construcción de HTTP responses
pub mod status;   // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
