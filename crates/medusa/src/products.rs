//! Store product endpoints.

use crate::client::Medusa;
use crate::response::StoreResponse;
use crate::schema::Product;
use crate::Error;
use serde::Deserialize;

/// Payload wrapping a retrieved product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductData {
    /// The backend reports the product as a one-element list even though
    /// the endpoint addresses a single id.
    pub product: Vec<Product>,
}

/// Product endpoints, obtained from [`Medusa::products`].
pub struct ProductsApi<'a> {
    client: &'a Medusa,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a Medusa) -> Self {
        Self { client }
    }

    /// Retrieve a product by id.
    pub async fn retrieve(&self, id: &str) -> Result<StoreResponse<ProductData>, Error> {
        let path = format!("/store/products/{id}");
        self.client.get(&path).await
    }
}
