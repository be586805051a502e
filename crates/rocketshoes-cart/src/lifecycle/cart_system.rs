use crate::cart_actor::{self, CartContext, CartError, Notice};
use crate::catalog::{CatalogApi, HttpCatalog};
use crate::clients::CartClient;
use crate::config::Config;
use crate::storage::{FileStorage, Storage};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

/// The runtime orchestrator for the cart.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the cart actor
/// - **Dependency Wiring**: handing the catalog, the store and the notice channel
///   to the actor
/// - **Hydration**: opening the cart persisted under the configured key
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(&Config::load()?).await?;
/// let mut notices = system.subscribe_notices();
///
/// system.cart.add_product(ProductId(2)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client bound to the open cart
    pub cart: CartClient,

    notices: broadcast::Sender<Notice>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Starts the cart against the HTTP catalog and the file store named by `config`.
    pub async fn new(config: &Config) -> Result<Self, CartError> {
        let catalog = HttpCatalog::new(config.api.base_url.trim());
        let path = config
            .storage
            .path
            .clone()
            .unwrap_or_else(FileStorage::default_path);
        info!(
            base_url = catalog.base_url(),
            storage = %path.display(),
            "Starting cart system"
        );

        Self::with_parts(Arc::new(catalog), Arc::new(FileStorage::new(path)), config).await
    }

    /// Starts the cart against any catalog and store.
    pub async fn with_parts(
        catalog: Arc<dyn CatalogApi>,
        storage: Arc<dyn Storage>,
        config: &Config,
    ) -> Result<Self, CartError> {
        // 1. Create the actor (no dependencies)
        let (cart_actor, generic_client) = cart_actor::new(config.cart.channel_capacity);

        // 2. Start it with injected context
        let context = CartContext::new(catalog, storage).with_policy(config.cart.stock_policy());
        let notices = context.notices.clone();
        let cart_handle = tokio::spawn(cart_actor.run(context));

        // 3. Hydrate the persisted cart
        let cart = CartClient::open(generic_client, config.storage.cart_key.clone()).await?;
        info!(cart_id = %cart.cart_id(), key = %config.storage.cart_key, "Cart opened");

        Ok(Self {
            cart,
            notices,
            handles: vec![cart_handle],
        })
    }

    /// Receives every notice published from now on.
    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Gracefully shuts down the system.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        // Dropping the client closes the channel; the actor exits its loop.
        drop(self.cart);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::model::{ProductId, ProductInfo};
    use crate::storage::MemoryStorage;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new().with_product(
            ProductInfo {
                id: ProductId(1),
                title: "Tênis de Caminhada Leve Confortável".into(),
                price: 179.9,
                image: "tenis1.jpg".into(),
            },
            1,
        )
    }

    #[tokio::test]
    async fn notices_reach_subscribers() {
        let system = CartSystem::with_parts(
            Arc::new(catalog()),
            Arc::new(MemoryStorage::new()),
            &Config::default(),
        )
        .await
        .unwrap();
        let mut notices = system.subscribe_notices();

        system.cart.add_product(ProductId(1)).await.unwrap();
        assert!(system.cart.add_product(ProductId(1)).await.is_err());

        assert_eq!(notices.recv().await.unwrap(), Notice::OutOfStock(ProductId(1)));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn file_backed_cart_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.path = Some(dir.path().join("storage.json"));
        let storage = || Arc::new(FileStorage::new(dir.path().join("storage.json")));

        let system = CartSystem::with_parts(Arc::new(catalog()), storage(), &config)
            .await
            .unwrap();
        system.cart.add_product(ProductId(1)).await.unwrap();
        system.shutdown().await.unwrap();

        let system = CartSystem::with_parts(Arc::new(catalog()), storage(), &config)
            .await
            .unwrap();
        let cart = system.cart.cart().await.unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].id, ProductId(1));
        system.shutdown().await.unwrap();
    }
}
