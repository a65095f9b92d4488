pub mod app;
pub mod db;

pub use app::Config;
pub use db::{db_url, DbKind, RuntimeEnv};
