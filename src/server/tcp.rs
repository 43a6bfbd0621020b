//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread y transporta exactamente un request.
//!
//! El manejo de conexión es el único punto donde los errores se
//! traducen a status codes:
//!
//! - Falla de lectura o request ilegible → 400
//! - Ninguna ruta coincide → 404
//! - Falla de E/S dentro de un handler → 500
//!
//! Los encodings negociados se aplican a la respuesta elegida, sea de
//! éxito o de error, porque hay un solo camino de serialización.

use crate::config::Config;
use crate::handlers;
use crate::http::{encoding, Method, Request, Response, StatusCode};
use crate::router::{Pattern, RouteContext, RouteError, Router};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Construye el servidor con su tabla de rutas integrada
    pub fn new(config: Config) -> Self {
        let context = RouteContext {
            directory: config.directory.clone(),
        };
        let mut router = Router::new(context);

        // Tabla de rutas: el orden importa, gana la primera coincidencia
        router.register(
            Pattern::Prefix("/echo/".to_string()),
            None,
            handlers::echo_handler,
        );
        router.register(
            Pattern::Prefix("/files/".to_string()),
            Some(Method::GET),
            handlers::readfile_handler,
        );
        router.register(
            Pattern::Prefix("/files/".to_string()),
            Some(Method::POST),
            handlers::writefile_handler,
        );
        router.register(
            Pattern::Prefix("/files/".to_string()),
            None,
            handlers::method_not_allowed_handler,
        );
        router.register(
            Pattern::Prefix("/user-agent".to_string()),
            None,
            handlers::useragent_handler,
        );
        router.register(Pattern::Exact("/".to_string()), None, handlers::root_handler);

        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Liga el puerto configurado y atiende conexiones para siempre
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        self.serve(listener)
    }

    /// Atiende conexiones de un listener ya ligado
    ///
    /// Cada conexión aceptada se procesa en su propio thread; una
    /// conexión que falla no afecta a las demás ni al accept loop.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router) {
                            eprintln!("   ❌ Error en thread: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión: un read, un request, una respuesta
    fn handle_connection(mut stream: TcpStream, router: Arc<Router>) -> std::io::Result<()> {
        let start = Instant::now();

        // Generar Request ID único para correlacionar logs
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let mut hasher = DefaultHasher::new();
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .hash(&mut hasher);
        thread::current().id().hash(&mut hasher);
        let request_id = format!("{:016x}", hasher.finish());

        // Un solo read de tamaño fijo: el request debe caber completo
        let mut buffer = [0u8; 1024];
        let bytes_read = match stream.read(&mut buffer) {
            Ok(n) => n,
            Err(e) => {
                println!("   ❌ Error de lectura: {} [req_id: {}]", e, &request_id[..8]);
                let response = Response::new(StatusCode::BadRequest);
                stream.write_all(&response.to_bytes())?;
                stream.flush()?;
                return Ok(());
            }
        };

        println!("   ✅ {} bytes [req_id: {}]", bytes_read, &request_id[..8]);

        let request = Request::parse(&buffer[..bytes_read]);

        // La negociación ocurre antes del routing: los encodings aplican
        // también a las respuestas de error
        let encodings = encoding::negotiate(&request);

        let mut response = if request.target().is_empty() {
            println!("   ❌ Request ilegible [req_id: {}]", &request_id[..8]);
            Response::new(StatusCode::BadRequest)
        } else {
            println!("   ✅ {} {}", request.method().as_str(), request.target());

            match router.route(&request) {
                Ok(response) => response,
                Err(RouteError::NotFound(target)) => {
                    println!("   ❌ Sin ruta para {}", target);
                    Response::new(StatusCode::NotFound)
                }
                Err(RouteError::Internal(e)) => {
                    eprintln!("   ❌ Error de E/S en handler: {}", e);
                    Response::new(StatusCode::InternalServerError)
                }
            }
        };

        response.set_encodings(encodings);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        println!(
            "   ✅ {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }
}
