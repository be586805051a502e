//! # Cart Client
//!
//! The handle storefront code holds. It wraps a `ResourceClient<Cart>` bound to
//! one cart and exposes the cart operations with typed errors.
use crate::cart_actor::{CartAction, CartError};
use crate::model::{Cart, CartCreate, CartId, Product, ProductId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for one cart owned by the cart actor. Cheap to clone.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, cart_id: CartId) -> Self {
        Self { inner, cart_id }
    }

    /// Asks the actor to open the cart persisted under `storage_key` and binds a
    /// client to it. A key that is already open yields the same cart.
    #[instrument(skip(inner, storage_key))]
    pub async fn open(
        inner: ResourceClient<Cart>,
        storage_key: impl Into<String>,
    ) -> Result<Self, CartError> {
        let params = CartCreate {
            storage_key: storage_key.into(),
        };
        debug!(storage_key = %params.storage_key, "Opening cart");
        let cart_id = inner.create(params).await.map_err(Self::map_error)?;
        Ok(Self::new(inner, cart_id))
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Snapshot of the whole cart, derived views included.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.get(self.cart_id)
            .await?
            .ok_or_else(|| CartError::NotFound(self.cart_id.to_string()))
    }

    /// The current ordered lines.
    pub async fn lines(&self) -> Result<Vec<Product>, CartError> {
        Ok(self.cart().await?.lines)
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Vec<Product>, CartError> {
        debug!("Adding product");
        self.perform(CartAction::AddProduct(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Vec<Product>, CartError> {
        debug!("Removing product");
        self.perform(CartAction::RemoveProduct(product_id)).await
    }

    /// Returns the unchanged lines, not an error, when the catalog or the store
    /// could not be reached.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: u32,
    ) -> Result<Vec<Product>, CartError> {
        debug!("Updating product amount");
        self.perform(CartAction::UpdateProductAmount { product_id, amount })
            .await
    }

    /// Empties the cart and deletes its stored copy.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Vec<Product>, CartError> {
        debug!("Clearing cart");
        self.perform(CartAction::Clear).await
    }

    async fn perform(&self, action: CartAction) -> Result<Vec<Product>, CartError> {
        self.inner
            .perform_action(self.cart_id, action)
            .await
            .map_err(Self::map_error)
    }
}
