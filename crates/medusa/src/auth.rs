//! Store auth endpoints.

use crate::client::Medusa;
use crate::response::StoreResponse;
use crate::Error;
use serde::Deserialize;

/// Payload for the email-exists check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExistsData {
    /// Whether a customer account exists for the email.
    pub exists: bool,
}

/// Auth endpoints, obtained from [`Medusa::auth`].
pub struct AuthApi<'a> {
    client: &'a Medusa,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a Medusa) -> Self {
        Self { client }
    }

    /// Check whether a customer account exists for the given email.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use medusa::Medusa;
    /// # async fn example(client: &Medusa) -> Result<(), medusa::Error> {
    /// let response = client.auth().exists("ada@example.com").await?;
    /// if let Some(data) = response.data() {
    ///     println!("exists: {}", data.exists);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn exists(&self, email: &str) -> Result<StoreResponse<ExistsData>, Error> {
        let path = format!("/store/auth/{email}");
        self.client.get(&path).await
    }
}
