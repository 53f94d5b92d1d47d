pub mod cart;
pub mod catalog;
pub mod engine;
pub mod layout;
pub mod session;

pub use crate::domain::model::{CartLine, Category, MenuItem, Money, OrderSummary};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
