pub mod error;
pub mod menu;
pub mod model;
pub mod output;
pub mod store;
