//! Store customer endpoints.

use crate::client::Medusa;
use crate::response::StoreResponse;
use crate::schema::{Address, Customer};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fields for creating a customer account.
///
/// Build with struct-update syntax; `phone` is omitted from the wire body
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Fields for updating the logged-in customer.
///
/// Every field is optional; unset fields are omitted from the wire body
/// and left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Payload wrapping the customer returned by create and update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerData {
    pub customer: Customer,
}

/// Customer endpoints, obtained from [`Medusa::customers`].
pub struct CustomersApi<'a> {
    client: &'a Medusa,
}

impl<'a> CustomersApi<'a> {
    pub(crate) fn new(client: &'a Medusa) -> Self {
        Self { client }
    }

    /// Create a customer account.
    pub async fn create(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<StoreResponse<CustomerData>, Error> {
        self.client.post("/store/customers", request).await
    }

    /// Update the logged-in customer's saved details.
    pub async fn update(
        &self,
        request: &UpdateCustomerRequest,
    ) -> Result<StoreResponse<CustomerData>, Error> {
        self.client.post("/store/customers/me", request).await
    }
}
