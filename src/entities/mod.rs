//! sea-orm models, one module per table.

pub mod category;
pub mod game;
pub mod monitor;
pub mod product;
pub mod purchase;
pub mod user;

pub use category::{Entity as Category, Model as CategoryModel};
pub use game::{Entity as Game, Model as GameModel};
pub use monitor::{Entity as Monitor, Model as MonitorModel};
pub use product::{Entity as Product, Model as ProductModel};
pub use purchase::{Entity as Purchase, Model as PurchaseModel};
pub use user::{Entity as User, Model as UserModel};
