//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP/1.1 desde cero.
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /target HTTP/1.1`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: bytes crudos (usado por POST /files/)
//!
//! El parser es de mejor esfuerzo y nunca falla: un request ilegible
//! produce un [`Request`] con `method` y `target` vacíos, y es la capa
//! de conexión la que decide qué status devolver.

use std::collections::HashMap;

/// Métodos HTTP reconocidos por el router
///
/// GET y POST tienen significado propio en las rutas /files/; cualquier
/// otro token de método se conserva tal cual, sin rechazarlo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token (se transporta sin interpretar)
    Other(String),
}

impl Method {
    /// Construye un método desde el token de la request line
    ///
    /// Nunca falla: los métodos desconocidos se conservan como `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Other(token.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

/// Representa un request HTTP/1.1 parseado
///
/// Se crea una sola vez por conexión y es inmutable después del parseo.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST u otro token opaco)
    method: Method,

    /// Target crudo de la request line (path + query, sin decodificar)
    target: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    headers: HashMap<String, String>,

    /// Body del request en bytes crudos (vacío si no hay)
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request HTTP/1.1 desde bytes, con mejor esfuerzo
    ///
    /// Reglas de parseo:
    ///
    /// 1. Una entrada sin ningún `\r\n` no tiene request line terminada:
    ///    el resultado queda con `method` y `target` vacíos.
    /// 2. Los bytes se parten en el primer `\r\n\r\n` en bloque de headers
    ///    y body; sin separador, todo es bloque de headers y el body queda
    ///    vacío. El body se conserva byte a byte (sin truncar por
    ///    `Content-Length`).
    /// 3. La primera línea del bloque se tokeniza por espacios simples:
    ///    token 0 es el método y token 1 el target. Con menos de dos
    ///    tokens, ambos campos quedan vacíos.
    /// 4. Cada línea siguiente no vacía se parte en el primer `": "`;
    ///    las líneas sin ese separador se ignoran en silencio y las
    ///    claves repetidas conservan el último valor.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/hola HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw);
    ///
    /// assert_eq!(request.method().as_str(), "GET");
    /// assert_eq!(request.target(), "/echo/hola");
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        // Sin \r\n no hay request line completa: request ilegible
        if !contains_crlf(buffer) {
            return Request {
                method: Method::from_token(""),
                target: String::new(),
                headers: HashMap::new(),
                body: Vec::new(),
            };
        }

        // Separar bloque de headers y body sobre los bytes crudos, para
        // que un body binario llegue intacto a los handlers
        let (head, body) = split_head_body(buffer);
        let head_text = String::from_utf8_lossy(head);

        let mut lines = head_text.split("\r\n");
        let request_line = lines.next().unwrap_or("");

        let (method, target) = Self::parse_request_line(request_line);
        let headers = Self::parse_headers(lines);

        Request {
            method,
            target,
            headers,
            body: body.to_vec(),
        }
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /target HTTP/1.1`. Con menos de dos tokens separados
    /// por espacio, método y target quedan vacíos (request ilegible).
    fn parse_request_line(line: &str) -> (Method, String) {
        let mut tokens = line.split(' ');

        match (tokens.next(), tokens.next()) {
            (Some(method), Some(target)) => {
                (Method::from_token(method), target.to_string())
            }
            _ => (Method::from_token(""), String::new()),
        }
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato `Name: Value` (separador exacto `": "`).
    /// Las líneas sin separador se descartan y las claves duplicadas se
    /// sobrescriben (gana la última).
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                continue;
            }

            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el target crudo del request (path + query)
    ///
    /// Invariante: queda vacío solo cuando la request line no se pudo
    /// tokenizar en método y target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    ///
    /// La búsqueda es sensible a mayúsculas: `User-Agent` debe coincidir
    /// byte a byte (comportamiento heredado, no se pliega el nombre).
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET / HTTP/1.1\r\nUser-Agent: test\r\n\r\n";
    /// let request = Request::parse(raw);
    ///
    /// assert_eq!(request.header("User-Agent"), Some("test"));
    /// assert_eq!(request.header("user-agent"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Busca un `\r\n` en cualquier posición del buffer
fn contains_crlf(buffer: &[u8]) -> bool {
    buffer.windows(2).any(|pair| pair == b"\r\n")
}

/// Parte el buffer en el primer `\r\n\r\n`
///
/// Sin separador, todo el buffer es bloque de headers y el body es vacío.
fn split_head_body(buffer: &[u8]) -> (&[u8], &[u8]) {
    match buffer.windows(4).position(|window| window == b"\r\n\r\n") {
        Some(pos) => (&buffer[..pos], &buffer[pos + 4..]),
        None => (buffer, &[][..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.target(), "/");
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_parse_with_target() {
        let raw = b"GET /echo/abc HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.target(), "/echo/abc");
    }

    #[test]
    fn test_target_not_decoded() {
        // El target se conserva crudo, sin decodificar porcentajes
        let raw = b"GET /echo/hola%20mundo?x=1 HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.target(), "/echo/hola%20mundo?x=1");
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: test\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("test"));
    }

    #[test]
    fn test_header_lookup_is_case_sensitive() {
        let raw = b"GET / HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("User-Agent"), Some("foo/1.0"));
        assert_eq!(request.header("user-agent"), None);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nX-Tag: uno\r\nX-Tag: dos\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("X-Tag"), Some("dos"));
    }

    #[test]
    fn test_header_value_keeps_extra_colons() {
        // Solo se parte en el primer ": "
        let raw = b"GET / HTTP/1.1\r\nHost: localhost: 4221\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.header("Host"), Some("localhost: 4221"));
    }

    #[test]
    fn test_line_without_separator_is_skipped() {
        let raw = b"GET / HTTP/1.1\r\nbasura-sin-separador\r\nHost: x\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("Host"), Some("x"));
    }

    #[test]
    fn test_no_crlf_means_unreadable_request() {
        // Sin \r\n la request line no está terminada, aunque "parezca" válida
        let raw = b"GET /echo/abc HTTP/1.1";
        let request = Request::parse(raw);

        assert_eq!(request.method().as_str(), "");
        assert_eq!(request.target(), "");
    }

    #[test]
    fn test_empty_input() {
        let request = Request::parse(b"");

        assert_eq!(request.method().as_str(), "");
        assert_eq!(request.target(), "");
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_request_line_with_one_token() {
        let raw = b"GET\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.method().as_str(), "");
        assert_eq!(request.target(), "");
    }

    #[test]
    fn test_request_line_with_doubled_space() {
        // El espacio doble produce un segundo token vacío: la request
        // queda con target vacío y la capa de conexión responde 400
        let raw = b"GET  /x HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.target(), "");
    }

    #[test]
    fn test_unknown_method_passes_through() {
        let raw = b"DELETE /files/x HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.method(), &Method::Other("DELETE".to_string()));
        assert_eq!(request.method().as_str(), "DELETE");
        assert_eq!(request.target(), "/files/x");
    }

    #[test]
    fn test_body_verbatim() {
        let raw = b"POST /files/nuevo.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        let request = Request::parse(raw);

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), b"hello");
    }

    #[test]
    fn test_binary_body_preserved() {
        let mut raw = b"POST /files/bin HTTP/1.1\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xFF, 0x80, 0x0A]);
        let request = Request::parse(&raw);

        assert_eq!(request.body(), &[0x00, 0xFF, 0x80, 0x0A]);
    }

    #[test]
    fn test_missing_separator_leaves_body_empty() {
        // Headers sin línea vacía final: todo es bloque de headers
        let raw = b"GET / HTTP/1.1\r\nHost: x";
        let request = Request::parse(raw);

        assert_eq!(request.target(), "/");
        assert_eq!(request.header("Host"), Some("x"));
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_body_may_contain_separator() {
        // Solo el primer \r\n\r\n separa: el resto pertenece al body
        let raw = b"POST /files/a HTTP/1.1\r\n\r\nuno\r\n\r\ndos";
        let request = Request::parse(raw);

        assert_eq!(request.body(), b"uno\r\n\r\ndos");
    }
}
