//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http --port 4221 --directory /tmp/archivos
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 HTTP_DIRECTORY=/tmp/archivos ./mini_http
//! ```

use clap::Parser;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http")]
#[command(about = "Servidor HTTP/1.1 minimalista con rutas integradas y compresión gzip")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz para las rutas /files/ (vacío = directorio de trabajo)
    #[arg(long, default_value = "", env = "HTTP_DIRECTORY")]
    pub directory: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "127.0.0.1".to_string(),
            directory: String::new(),
        }
    }
}
