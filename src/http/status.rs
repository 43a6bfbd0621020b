//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP/1.1 que usará el servidor.
//! Según el RFC 9110, los códigos se agrupan en 5 categorías:
//!
//! - **1xx**: Informacional (no se usan aquí)
//! - **2xx**: Éxito (200 OK, 201 Created)
//! - **3xx**: Redirección (no implementadas)
//! - **4xx**: Error del cliente (400, 404, 405)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - El recurso fue creado (POST /files/)
    Created = 201,

    /// 400 Bad Request - Línea de request ilegible o fallo de lectura
    BadRequest = 400,

    /// 404 Not Found - Ruta o archivo no encontrado
    NotFound = 404,

    /// 405 Method Not Allowed - Método no soportado en una ruta conocida
    MethodNotAllowed = 405,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Estos textos están definidos en el RFC 9110 y son estándares.
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert!(StatusCode::Ok.is_success());
    /// assert!(StatusCode::Created.is_success());
    /// assert!(!StatusCode::NotFound.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }

    /// Verifica si el código indica error del cliente (4xx)
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert!(StatusCode::BadRequest.is_client_error());
    /// assert!(!StatusCode::Ok.is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert!(StatusCode::InternalServerError.is_server_error());
    /// assert!(!StatusCode::BadRequest.is_server_error());
    /// ```
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado para mostrarlo
    ///
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
