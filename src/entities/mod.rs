//! Database entities for the station management domain.

pub mod client;
pub mod employee;
pub mod feedback;
pub mod product;
pub mod pump;
pub mod purchase;
pub mod restock;
pub mod sale;
pub mod station;
pub mod supplier;
pub mod tank;

pub use client::Entity as Client;
pub use employee::Entity as Employee;
pub use feedback::Entity as Feedback;
pub use product::Entity as Product;
pub use pump::Entity as Pump;
pub use purchase::Entity as Purchase;
pub use restock::Entity as Restock;
pub use sale::Entity as Sale;
pub use station::Entity as Station;
pub use supplier::Entity as Supplier;
pub use tank::Entity as Tank;
