//! Business logic services for StockLedger

pub mod auth;
pub mod expense;
pub mod product;
pub mod reporting;
pub mod sale;
pub mod user_admin;

pub use auth::AuthService;
pub use expense::ExpenseService;
pub use product::ProductService;
pub use reporting::ReportingService;
pub use sale::SaleService;
pub use user_admin::UserAdminService;
