// ============================================================================
// Web Layer - actix-web routes for the order form
// ============================================================================
//
// GET  /           render the current order
// POST /name       set the name, render inline (400 on a blank name)
// POST /cake-type  set the cake type, redirect to /
// POST /fillings   set the fillings, redirect to /
//
// ============================================================================

pub mod handlers;
pub mod view;

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::domain::order::OrderCommandHandler;
use crate::metrics::{self, Metrics};
use crate::store::OrderStore;

/// Shared state handed to every request handler.
pub struct AppState {
    pub orders: OrderCommandHandler,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, metrics: Arc<Metrics>) -> Self {
        Self {
            orders: OrderCommandHandler::new(store),
            metrics,
        }
    }
}

/// Register the order routes plus /health and /metrics.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/name", web::post().to(handlers::submit_name))
        .route("/cake-type", web::post().to(handlers::submit_cake_type))
        .route("/fillings", web::post().to(handlers::submit_fillings))
        .configure(metrics::configure);
}

/// Build the HTTP server on an already bound listener.
pub fn run(listener: TcpListener, state: web::Data<AppState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
