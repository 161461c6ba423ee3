//! Páginas HTML y assets estáticos del frontend

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Ruta pública → archivo dentro de `static_dir`
pub const PAGES: [(&str, &str); 4] = [
    ("/index", "index.html"),
    ("/add-log", "add_log.html"),
    ("/trips-page", "trips.html"),
    ("/analytics-page", "analytics.html"),
];

pub fn create_page_router(static_dir: &Path) -> Router<AppState> {
    PAGES
        .into_iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(static_dir.join(file)))
        })
        .nest_service("/static", ServeDir::new(static_dir))
}
