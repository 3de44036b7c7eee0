use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::borrow_book;
use super::handlers::create_book;
use super::handlers::delete_book;
use super::handlers::init_db;
use super::handlers::list_books;
use super::handlers::return_book;
use super::handlers::update_book;
use crate::domain::book::service::BookService;
use crate::domain::loan::service::LoanService;
use crate::inbound::http::middleware as auth_middleware;
use crate::outbound::repositories::book::PostgresBookRepository;
use crate::outbound::repositories::loan::PostgresLoanLedger;

/// Unified application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<PostgresBookRepository>>,
    pub loan_service: Arc<LoanService<PostgresLoanLedger>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    book_service: Arc<BookService<PostgresBookRepository>>,
    loan_service: Arc<LoanService<PostgresLoanLedger>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        book_service,
        loan_service,
        authenticator,
    };

    // Catalog listing and the dev reseed are the only public routes
    let public_routes = Router::new()
        .route("/books", get(list_books))
        .route("/init-db", get(init_db));

    let protected_routes = Router::new()
        .route("/borrow", post(borrow_book))
        .route("/return", post(return_book))
        .route("/books", post(create_book))
        .route("/books/:book_id", put(update_book))
        .route("/books/:book_id", delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth_middleware::authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
