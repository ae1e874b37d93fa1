pub mod health;
pub mod helpers;
pub mod resources;
pub mod routes;
pub mod types;

pub use health::AppStartTime;
pub use routes::{admin_routes, configure};
