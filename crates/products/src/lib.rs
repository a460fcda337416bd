//! Product catalog domain module.
//!
//! This crate contains the business rules for catalog products, implemented
//! purely as deterministic domain logic (no IO, no storage, no logging).

pub mod product;

pub use product::{NewProduct, Product};
