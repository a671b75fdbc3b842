//! Medusa client implementation.

use crate::auth::AuthApi;
use crate::config::{Config, MedusaBuilder};
use crate::customers::CustomersApi;
use crate::products::ProductsApi;
use crate::response::{classify, StoreResponse};
use crate::transport::HttpTransport;
use crate::Error;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Medusa storefront API client.
///
/// Stateless: every call is a single request/response cycle, so the client
/// can be shared freely across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use medusa::{CreateCustomerRequest, Medusa, StoreResponse};
///
/// #[tokio::main]
/// async fn main() -> Result<(), medusa::Error> {
///     let client = Medusa::builder("http://localhost:9000").build()?;
///
///     let request = CreateCustomerRequest {
///         first_name: "Ada".into(),
///         last_name: "Lovelace".into(),
///         email: "ada@example.com".into(),
///         password: "secret".into(),
///         ..Default::default()
///     };
///
///     match client.customers().create(&request).await? {
///         StoreResponse::Data(data) => println!("created {}", data.customer.id),
///         StoreResponse::Error(err) => eprintln!("error: {}", err.message),
///         StoreResponse::Errors(errs) => eprintln!("{} validation errors", errs.len()),
///     }
///
///     Ok(())
/// }
/// ```
pub struct Medusa {
    config: Config,
    transport: HttpTransport,
}

impl Medusa {
    /// Create a new builder pointed at the given backend URL.
    pub fn builder(base_url: impl Into<String>) -> MedusaBuilder {
        MedusaBuilder::new(base_url)
    }

    /// Create a new client from config.
    pub(crate) fn from_config(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Auth endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Customer endpoints.
    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(self)
    }

    /// Product endpoints.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// GET `path` and classify the response as a `T` payload.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<StoreResponse<T>, Error> {
        let raw = self.transport.send(Method::GET, path, None::<&()>).await?;
        classify(raw.status, &raw.body)
    }

    /// POST `body` to `path` and classify the response as a `T` payload.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<StoreResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let raw = self.transport.send(Method::POST, path, Some(body)).await?;
        classify(raw.status, &raw.body)
    }
}

impl MedusaBuilder {
    /// Build the Medusa client.
    pub fn build(self) -> Result<Medusa, Error> {
        let config = self.build_config()?;
        Medusa::from_config(config)
    }
}
