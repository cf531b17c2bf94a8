//! Application services: request/response translation around the gateways.
//!
//! Every operation returns `Ok(None)` when the targeted row does not exist,
//! or when the gateway produced no row for a create.

pub mod category_service;
pub mod game_service;
pub mod monitor_service;
pub mod product_service;
pub mod purchase_service;
pub mod user_service;

pub use category_service::{CategoryService, CategoryServiceImpl};
pub use game_service::{GameService, GameServiceImpl};
pub use monitor_service::{MonitorService, MonitorServiceImpl};
pub use product_service::{ProductService, ProductServiceImpl};
pub use purchase_service::{PurchaseService, PurchaseServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
