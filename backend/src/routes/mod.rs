//! Route definitions for StockLedger

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public + logout)
        .nest("/auth", auth_routes())
        // Protected routes - product catalog
        .nest("/products", product_routes())
        // Protected routes - sales
        .nest("/sales", sale_routes())
        // Protected routes - expenses
        .nest("/expenses", expense_routes())
        // Protected routes - reporting
        .nest("/reports", report_routes())
        // Protected routes - exports
        .nest("/exports", export_routes())
        // Protected routes - user administration (role-gated in handlers)
        .nest("/admin", admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
        .route(
            "/logout",
            post(handlers::logout).route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Product catalog routes (protected)
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::add_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::edit_product)
                .delete(handlers::delete_product),
        )
        .route("/:product_id/restock", post(handlers::restock_product))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Sales routes (protected)
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::record_sale))
        .route("/:sale_id/receipt", get(handlers::view_receipt))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Expense routes (protected)
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_expenses).post(handlers::record_expense),
        )
        .route(
            "/:expense_id",
            put(handlers::edit_expense).delete(handlers::delete_expense),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Reporting routes (protected)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/sales", get(handlers::sales_report))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Export routes (protected)
fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(handlers::export_sales))
        .route("/products", get(handlers::export_products))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// User administration routes (protected; role checks in handlers)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users/pending", get(handlers::list_pending_users))
        .route("/users/:user_id", put(handlers::edit_user))
        .route("/users/:user_id/approve", post(handlers::approve_user))
        .route("/users/:user_id/reject", post(handlers::reject_user))
        .route_layer(middleware::from_fn(auth_middleware))
}
