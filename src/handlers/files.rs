//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Implementación de los endpoints que tocan disco:
//! - GET /files/{filename}: Lee un archivo del directorio base
//! - POST /files/{filename}: Escribe el body del request a un archivo
//!
//! El path se arma concatenando el directorio base configurado y el
//! filename del target con un `/`. El filename se usa tal cual llega,
//! sin decodificar ni validar separadores; un filename con `/` apunta a
//! un subdirectorio.
//!
//! Un archivo que no se puede abrir o crear responde 404. Una falla de
//! E/S después de abrir es [`RouteError::Internal`] y el servidor la
//! traduce a 500.

use std::fs::File;
use std::io::{Read, Write};

use crate::http::{Request, Response, StatusCode};
use crate::router::{RouteContext, RouteError};

/// Handler para GET /files/{filename}
///
/// Lee el archivo completo a memoria y lo devuelve como
/// `application/octet-stream`. Si el archivo no existe (o no se puede
/// abrir), responde 404 sin cuerpo.
pub fn readfile_handler(
    request: &Request,
    context: &RouteContext,
) -> Result<Response, RouteError> {
    let path = resolve_path(&context.directory, filename(request.target()));

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(_) => return Ok(Response::new(StatusCode::NotFound)),
    };

    let mut content = Vec::new();
    file.read_to_end(&mut content)?;

    Ok(Response::new(StatusCode::Ok)
        .with_content_bytes(content)
        .with_content_type("application/octet-stream"))
}

/// Handler para POST /files/{filename}
///
/// Escribe el body del request, byte a byte, al archivo destino
/// (creándolo o truncándolo) y responde 201 sin cuerpo. Si el archivo
/// no se puede crear (por ejemplo, el directorio no existe), responde
/// 404 sin cuerpo.
pub fn writefile_handler(
    request: &Request,
    context: &RouteContext,
) -> Result<Response, RouteError> {
    let path = resolve_path(&context.directory, filename(request.target()));

    let mut file = match File::create(&path) {
        Ok(file) => file,
        Err(_) => return Ok(Response::new(StatusCode::NotFound)),
    };

    file.write_all(request.body())?;

    Ok(Response::new(StatusCode::Created))
}

/// Extrae el filename del target (lo que sigue a `/files/`)
fn filename(target: &str) -> &str {
    target.strip_prefix("/files/").unwrap_or("")
}

/// Arma el path concatenando directorio base y filename
///
/// Con directorio vacío el filename se usa solo, relativo al directorio
/// de trabajo del proceso.
fn resolve_path(directory: &str, filename: &str) -> String {
    if directory.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", directory, filename)
    }
}
