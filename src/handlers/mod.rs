//! # Handlers del Servidor
//!
//! Este módulo contiene la implementación de todos los endpoints
//! integrados del servidor.
//!
//! ## Categorías de handlers
//!
//! - **basic**: Endpoints en memoria (echo, user-agent, raíz, 405)
//! - **files**: Endpoints que tocan disco (GET y POST de /files/)
//!
//! Cada handler es una función que recibe el Request y el contexto de
//! rutas, y retorna `Result<Response, RouteError>`.

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;
