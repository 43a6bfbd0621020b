//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea requests HTTP
//! 4. Genera y envía responses HTTP
//!
//! Cada conexión transporta exactamente un request y se atiende en su
//! propio thread.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
