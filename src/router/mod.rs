//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea targets HTTP a handlers
//! específicos.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Result<Response, RouteError>
//! ```
//!
//! Las rutas forman una tabla ordenada: el router la recorre de arriba
//! hacia abajo y gana la primera entrada cuyo patrón (y método, si la
//! ruta declara uno) coincide con el request. Si ninguna coincide,
//! retorna [`RouteError::NotFound`] y el servidor lo traduce a 404.

use std::fmt;

use crate::http::{Method, Request, Response};

/// Patrón contra el que se compara el target de un request
#[derive(Debug, Clone)]
pub enum Pattern {
    /// El target debe ser exactamente este string
    Exact(String),
    /// El target debe empezar con este string
    Prefix(String),
}

impl Pattern {
    fn matches(&self, target: &str) -> bool {
        match self {
            Pattern::Exact(path) => target == path,
            Pattern::Prefix(prefix) => target.starts_with(prefix),
        }
    }
}

/// Estado compartido que el router presta a cada handler
///
/// Hoy solo transporta el directorio base para servir archivos; los
/// handlers que no lo usan lo ignoran.
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    /// Directorio base de los handlers de archivos
    pub directory: String,
}

/// Error de un handler o del routing
#[derive(Debug)]
pub enum RouteError {
    /// Ninguna ruta registrada cubre el target
    NotFound(String),
    /// Falla de E/S dentro de un handler
    Internal(std::io::Error),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NotFound(target) => write!(f, "sin handler para {}", target),
            RouteError::Internal(err) => write!(f, "error de E/S en el handler: {}", err),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Internal(err) => Some(err),
            RouteError::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for RouteError {
    fn from(err: std::io::Error) -> Self {
        RouteError::Internal(err)
    }
}

/// Tipo de función handler
///
/// Un handler recibe el Request y el contexto compartido, y retorna una
/// Response o un error que el servidor traduce a status code.
pub type Handler = fn(&Request, &RouteContext) -> Result<Response, RouteError>;

/// Entrada de la tabla de rutas
struct Route {
    pattern: Pattern,
    /// `None` acepta cualquier método
    method: Option<Method>,
    handler: Handler,
}

/// Router que mapea targets a handlers
pub struct Router {
    /// Tabla ordenada de rutas; gana la primera coincidencia
    routes: Vec<Route>,
    context: RouteContext,
}

impl Router {
    /// Crea un router vacío con su contexto compartido
    pub fn new(context: RouteContext) -> Self {
        Self {
            routes: Vec::new(),
            context,
        }
    }

    /// Registra una ruta al final de la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::router::{Pattern, RouteContext, RouteError, Router};
    /// use mini_http::http::{Method, Request, Response, StatusCode};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &RouteContext) -> Result<Response, RouteError> {
    ///     Ok(Response::new(StatusCode::Ok).with_content("hola"))
    /// }
    ///
    /// let mut router = Router::new(RouteContext::default());
    /// router.register(Pattern::Exact("/hello".to_string()), Some(Method::GET), hello_handler);
    /// ```
    pub fn register(&mut self, pattern: Pattern, method: Option<Method>, handler: Handler) {
        self.routes.push(Route {
            pattern,
            method,
            handler,
        });
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Recorre la tabla en orden de registro; la primera ruta cuyo método
    /// y patrón coinciden atiende el request. Si ninguna coincide retorna
    /// [`RouteError::NotFound`] con el target.
    pub fn route(&self, request: &Request) -> Result<Response, RouteError> {
        for route in &self.routes {
            let method_matches = route
                .method
                .as_ref()
                .map_or(true, |method| method == request.method());

            if method_matches && route.pattern.matches(request.target()) {
                return (route.handler)(request, &self.context);
            }
        }

        Err(RouteError::NotFound(request.target().to_string()))
    }
}
