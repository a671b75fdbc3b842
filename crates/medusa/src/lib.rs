//! Rust client for the Medusa storefront API.
//!
//! Every call returns a [`StoreResponse`]: either the operation's typed
//! payload, a single structured [`ApiError`], or a list of validation
//! errors. Transport and decode failures are reported separately as
//! [`Error`], so an envelope always reflects an actual API answer.
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa::{Medusa, StoreResponse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), medusa::Error> {
//!     let client = Medusa::builder("http://localhost:9000").build()?;
//!
//!     match client.auth().exists("ada@example.com").await? {
//!         StoreResponse::Data(data) => println!("exists: {}", data.exists),
//!         StoreResponse::Error(err) => eprintln!("error: {}", err.message),
//!         StoreResponse::Errors(errs) => eprintln!("{} errors", errs.len()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod customers;
mod error;
mod products;
mod response;
mod schema;
mod transport;

pub use auth::{AuthApi, ExistsData};
pub use client::Medusa;
pub use config::{Config, MedusaBuilder};
pub use customers::{CreateCustomerRequest, CustomerData, CustomersApi, UpdateCustomerRequest};
pub use error::Error;
pub use products::{ProductData, ProductsApi};
pub use response::{ApiError, StoreResponse};
pub use schema::{Address, Customer, Product};
