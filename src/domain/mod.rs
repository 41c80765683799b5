//! Domain model: catalog records, cart state, checkout.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod value_objects;
