//! # Mini HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.
//!
//! La configuración llega por CLI arguments o variables de entorno.

use mini_http::config::Config;
use mini_http::server::Server;

fn main() {
    println!("=================================");
    println!("  Mini HTTP/1.1 Server");
    println!("=================================\n");

    // Crear configuración desde CLI args y variables de entorno
    let config = Config::new();

    println!("⚙️  Configuración:");
    println!("   Puerto: {}", config.port);
    println!("   Host: {}", config.host);
    println!(
        "   Directorio: {}",
        if config.directory.is_empty() {
            "."
        } else {
            config.directory.as_str()
        }
    );
    println!();

    // Crear el servidor
    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
