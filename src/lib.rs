//! # Mini HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 concurrente implementado desde cero, sin frameworks:
//! el protocolo se parsea y serializa a mano sobre sockets TCP.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, construcción de responses, status codes
//!   y compresión gzip
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento de peticiones a handlers
//! - `handlers`: Implementación de los endpoints (echo, user-agent, files)
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::config::Config;
//! use mini_http::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
