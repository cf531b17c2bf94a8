//! Request and response shapes for the REST surface.
//!
//! Requests carry their field constraints as `validator` attributes and are
//! checked before any service code runs. Responses derive `Default` so that
//! composite responses can fall back to empty nested objects.

pub mod category;
pub mod game;
pub mod monitor;
pub mod product;
pub mod purchase;
pub mod user;

pub use category::{CategoryRequest, CategoryResponse};
pub use game::{GameRequest, GameResponse};
pub use monitor::{MonitorRequest, MonitorResponse};
pub use product::{ProductRequest, ProductResponse};
pub use purchase::{PurchaseRequest, PurchaseResponse};
pub use user::{UserRequest, UserResponse};

/// Response shapes that carry their storage-assigned id.
pub trait Identified {
    fn id(&self) -> i32;
}
