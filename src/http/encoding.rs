//! # Negociación de Content-Encoding y Códec Gzip
//! src/http/encoding.rs
//!
//! Este módulo implementa las dos mitades de la compresión de respuestas:
//!
//! - **Negociación**: intersección entre lo que el cliente anuncia en
//!   `Accept-Encoding` y lo que el servidor soporta.
//! - **Códec**: compresión de un payload al formato contenedor gzip
//!   (con header y trailer, no deflate crudo).
//!
//! La serialización de [`Response`](super::Response) invoca al códec
//! cuando la negociación eligió gzip.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

use super::Request;

/// Encodings que el servidor sabe producir
///
/// La cadena vacía forma parte del conjunto soportado: un token vacío en
/// `Accept-Encoding` se acepta, pero nunca produce un `Content-Encoding`.
pub const SUPPORTED_ENCODINGS: [&str; 2] = ["gzip", ""];

/// Selecciona los encodings aceptados por el cliente Y soportados
///
/// Si el request trae `Accept-Encoding` (búsqueda exacta del nombre), se
/// elimina todo el espacio en blanco del valor, se parte por comas y se
/// conservan, en el orden en que aparecen, los tokens que coinciden
/// exactamente con un encoding soportado. No se interpretan q-values ni
/// el comodín `*`. Sin el header, la lista queda vacía.
///
/// # Ejemplo
/// ```
/// use mini_http::http::{encoding, Request};
///
/// let raw = b"GET / HTTP/1.1\r\nAccept-Encoding: gzip, br\r\n\r\n";
/// let request = Request::parse(raw);
///
/// assert_eq!(encoding::negotiate(&request), vec!["gzip".to_string()]);
/// ```
pub fn negotiate(request: &Request) -> Vec<String> {
    let Some(raw) = request.header("Accept-Encoding") else {
        return Vec::new();
    };

    // "gzip , br" y "gzip,br" deben negociar igual
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    cleaned
        .split(',')
        .filter(|token| SUPPORTED_ENCODINGS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Comprime un payload al formato contenedor gzip
///
/// Usa el preset por defecto de flate2. Si el encoder falla, devuelve los
/// bytes originales sin comprimir: el códec nunca hace fallar un request.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());

    if encoder.write_all(data).is_err() {
        return data.to_vec();
    }

    match encoder.finish() {
        Ok(compressed) => compressed,
        Err(_) => data.to_vec(),
    }
}
