//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! de forma programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! Los headers se emiten siempre en el mismo orden: `Content-Type` (si se
//! fijó), `Content-Encoding` (si la negociación eligió gzip) y
//! `Content-Length` (si el cuerpo final no quedó vacío). La compresión se
//! aplica recién al serializar, de modo que el `Content-Length` refleja
//! los bytes comprimidos.

use super::encoding;
use super::status::StatusCode;

/// Respuesta HTTP en construcción
///
/// Acumula status, contenido, tipo de contenido y encodings negociados;
/// nada se escribe al socket hasta llamar [`to_bytes`](Response::to_bytes).
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content: Vec<u8>,
    content_type: Option<String>,
    encodings: Vec<String>,
}

impl Response {
    /// Crea una respuesta sin cuerpo ni Content-Type
    pub fn new(status: StatusCode) -> Self {
        Response {
            status,
            content: Vec::new(),
            content_type: None,
            encodings: Vec::new(),
        }
    }

    /// Fija el contenido a partir de texto
    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.as_bytes().to_vec();
        self
    }

    /// Fija el contenido a partir de bytes crudos
    pub fn with_content_bytes(mut self, content: Vec<u8>) -> Self {
        self.content = content;
        self
    }

    /// Fija el header Content-Type
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Fija los encodings negociados con el cliente
    ///
    /// La lista llega de [`encoding::negotiate`]; solo `"gzip"` tiene
    /// efecto al serializar.
    pub fn set_encodings(&mut self, encodings: Vec<String>) {
        self.encodings = encodings;
    }

    /// Status de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Contenido sin comprimir
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Encodings negociados
    pub fn encodings(&self) -> &[String] {
        &self.encodings
    }

    /// Serializa la respuesta a los bytes que van al socket
    ///
    /// Serializar no consume la respuesta y es idempotente: el contenido
    /// original nunca se sobreescribe con la versión comprimida.
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_content("abc")
    ///     .with_content_type("text/plain");
    ///
    /// let expected = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc";
    /// assert_eq!(response.to_bytes(), expected);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let use_gzip = self.encodings.iter().any(|e| e == "gzip");

        let body = if use_gzip {
            encoding::compress(&self.content)
        } else {
            self.content.clone()
        };

        let mut head = format!("HTTP/1.1 {}\r\n", self.status);

        if let Some(content_type) = &self.content_type {
            head.push_str(&format!("Content-Type: {}\r\n", content_type));
        }

        if use_gzip {
            head.push_str("Content-Encoding: gzip\r\n");
        }

        if !body.is_empty() {
            head.push_str(&format!("Content-Length: {}\r\n", body.len()));
        }

        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&body);
        bytes
    }
}
