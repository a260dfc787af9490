// Library entry point, shared by the binary and the integration tests
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod server;
pub mod views;

pub use db::Database;
pub use views::Views;

pub struct AppState {
    pub db: Database,
    pub views: Views,
}
