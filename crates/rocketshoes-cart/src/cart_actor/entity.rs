//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The actor hands each action to [`Cart::handle_action`] and waits for it to
//! finish, network round trips included, before reading the next message. That is
//! what keeps two concurrent adds of the same product from both reading the old
//! amount.
//!
//! Every mutation follows the same order: fetch from the catalog, reduce, persist,
//! then swap `self.lines`. An error at any step leaves `self` untouched.

use super::actions::CartAction;
use super::error::CartError;
use super::notice::Notice;
use super::reducer::{CartIntent, CartReducer, StockPolicy};
use crate::catalog::{CatalogApi, CatalogError};
use crate::model::{Cart, CartCreate, CartId, Product, ProductId, ProductInfo, Stock};
use crate::storage::{load_cart, save_cart, Storage};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Capacity of the notice channel. Slow subscribers miss the oldest notices.
pub const NOTICE_CAPACITY: usize = 16;

/// Dependencies injected into the cart actor through `run()`.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: Arc<dyn CatalogApi>,
    pub storage: Arc<dyn Storage>,
    pub notices: broadcast::Sender<Notice>,
    pub policy: StockPolicy,
}

impl CartContext {
    pub fn new(catalog: Arc<dyn CatalogApi>, storage: Arc<dyn Storage>) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            catalog,
            storage,
            notices,
            policy: StockPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StockPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Publishes the error's notice, if it has one, and hands the error back.
    fn fail(&self, err: CartError) -> CartError {
        if let Some(notice) = err.notice() {
            warn!(product_id = %notice.product_id(), error = %err, "{notice}");
            // No subscribers is not an error.
            let _ = self.notices.send(notice);
        }
        err
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = Vec<Product>;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id, params.storage_key))
    }

    /// One cart per storage key: opening a key twice shares the same lines.
    fn matches_create(&self, params: &CartCreate) -> bool {
        self.storage_key == params.storage_key
    }

    /// Hydrates the lines from storage. Never fails: an unusable copy is an empty cart.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), Self::Error> {
        self.lines = load_cart(ctx.storage.as_ref(), &self.storage_key).await;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<Vec<Product>, Self::Error> {
        match action {
            CartAction::AddProduct(product_id) => self.add_product(product_id, ctx).await,
            CartAction::RemoveProduct(product_id) => self.remove_product(product_id, ctx).await,
            CartAction::UpdateProductAmount { product_id, amount } => {
                self.update_product_amount(product_id, amount, ctx).await
            }
            CartAction::Clear => self.clear(ctx).await,
        }
    }
}

impl Cart {
    async fn add_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<Vec<Product>, CartError> {
        let (stock, product) = fetch_for_add(ctx.catalog.as_ref(), product_id)
            .await
            .map_err(|e| {
                ctx.fail(CartError::AddFailed {
                    product_id,
                    source: e.into(),
                })
            })?;

        let lines = CartReducer::reduce(self.lines.clone(), CartIntent::Add { product, stock })
            .map_err(|rejection| ctx.fail(rejection.into()))?;

        save_cart(ctx.storage.as_ref(), &self.storage_key, &lines)
            .await
            .map_err(|e| {
                ctx.fail(CartError::AddFailed {
                    product_id,
                    source: e.into(),
                })
            })?;

        self.lines = lines;
        Ok(self.lines.clone())
    }

    async fn remove_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<Vec<Product>, CartError> {
        let lines = CartReducer::reduce(self.lines.clone(), CartIntent::Remove { product_id })
            .map_err(|rejection| ctx.fail(rejection.into()))?;

        // Written even when nothing was removed.
        save_cart(ctx.storage.as_ref(), &self.storage_key, &lines)
            .await
            .map_err(|source| ctx.fail(CartError::RemoveFailed { product_id, source }))?;

        self.lines = lines;
        Ok(self.lines.clone())
    }

    /// Catalog and storage failures are swallowed here: the cart comes back
    /// unchanged and no notice is published.
    async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
        ctx: &CartContext,
    ) -> Result<Vec<Product>, CartError> {
        let stock = match ctx.catalog.stock(product_id).await {
            Ok(stock) => stock,
            Err(e) => {
                debug!(%product_id, error = %e, "stock lookup failed, update skipped");
                return Ok(self.lines.clone());
            }
        };

        let intent = CartIntent::SetAmount {
            product_id,
            amount,
            stock,
            policy: ctx.policy,
        };
        let lines = CartReducer::reduce(self.lines.clone(), intent)
            .map_err(|rejection| ctx.fail(rejection.into()))?;

        if let Err(e) = save_cart(ctx.storage.as_ref(), &self.storage_key, &lines).await {
            debug!(%product_id, error = %e, "cart write failed, update skipped");
            return Ok(self.lines.clone());
        }

        self.lines = lines;
        Ok(self.lines.clone())
    }

    async fn clear(&mut self, ctx: &CartContext) -> Result<Vec<Product>, CartError> {
        ctx.storage
            .remove_item(&self.storage_key)
            .await
            .map_err(|source| CartError::ClearFailed { source })?;

        self.lines.clear();
        Ok(Vec::new())
    }
}

/// Stock first, then product metadata, like the storefront page does it.
async fn fetch_for_add(
    catalog: &dyn CatalogApi,
    product_id: ProductId,
) -> Result<(Stock, ProductInfo), CatalogError> {
    let stock = catalog.stock(product_id).await?;
    let product = catalog.product(product_id).await?;
    Ok((stock, product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::storage::{MemoryStorage, StorageError, CART_STORAGE_KEY};
    use std::path::PathBuf;

    /// Reads like an empty store, refuses every write.
    struct ReadOnlyStorage;

    #[async_trait]
    impl Storage for ReadOnlyStorage {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: PathBuf::from("/read-only/storage.json"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn sneaker(id: u32) -> ProductInfo {
        ProductInfo {
            id: ProductId(id),
            title: format!("Tênis {id}"),
            price: 100.0 + f64::from(id),
            image: format!("tenis{id}.jpg"),
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_product(sneaker(1), 3)
            .with_product(sneaker(2), 5)
    }

    async fn open(ctx: &CartContext) -> Cart {
        let mut cart = Cart::from_create_params(
            CartId(1),
            CartCreate {
                storage_key: CART_STORAGE_KEY.to_string(),
            },
        )
        .unwrap();
        cart.on_create(ctx).await.unwrap();
        cart
    }

    #[tokio::test]
    async fn add_new_product_persists_one_unit() {
        let storage = MemoryStorage::new();
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(storage.clone()));
        let mut cart = open(&ctx).await;

        let lines = cart
            .handle_action(CartAction::AddProduct(ProductId(2)), &ctx)
            .await
            .unwrap();

        assert_eq!(lines, vec![Product::from_info(sneaker(2), 1)]);
        assert_eq!(load_cart(&storage, CART_STORAGE_KEY).await, lines);
    }

    #[tokio::test]
    async fn add_at_stock_limit_notifies_and_keeps_cart() {
        let storage = MemoryStorage::new();
        save_cart(&storage, CART_STORAGE_KEY, &[Product::from_info(sneaker(2), 5)])
            .await
            .unwrap();
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(storage.clone()));
        let mut notices = ctx.subscribe();
        let mut cart = open(&ctx).await;
        let writes = storage.write_count();

        let err = cart
            .handle_action(CartAction::AddProduct(ProductId(2)), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CartError::OutOfStock {
                requested: 6,
                available: 5,
                ..
            }
        ));
        assert_eq!(notices.try_recv().unwrap(), Notice::OutOfStock(ProductId(2)));
        assert_eq!(cart.lines[0].amount, 5);
        assert_eq!(storage.write_count(), writes);
    }

    #[tokio::test]
    async fn add_unknown_product_is_add_failed() {
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(MemoryStorage::new()));
        let mut notices = ctx.subscribe();
        let mut cart = open(&ctx).await;

        let err = cart
            .handle_action(CartAction::AddProduct(ProductId(42)), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::AddFailed { product_id: ProductId(42), .. }));
        assert_eq!(notices.try_recv().unwrap(), Notice::AddFailed(ProductId(42)));
        assert!(cart.lines.is_empty());
    }

    #[tokio::test]
    async fn failed_write_leaves_lines_untouched() {
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(ReadOnlyStorage));
        let mut notices = ctx.subscribe();
        let mut cart = open(&ctx).await;

        let err = cart
            .handle_action(CartAction::AddProduct(ProductId(1)), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::AddFailed { .. }));
        assert!(cart.lines.is_empty());

        let err = cart
            .handle_action(CartAction::RemoveProduct(ProductId(1)), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::RemoveFailed { .. }));

        assert_eq!(notices.try_recv().unwrap(), Notice::AddFailed(ProductId(1)));
        assert_eq!(notices.try_recv().unwrap(), Notice::RemoveFailed(ProductId(1)));
    }

    #[tokio::test]
    async fn remove_absent_product_still_writes() {
        let storage = MemoryStorage::new();
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(storage.clone()));
        let mut cart = open(&ctx).await;

        let lines = cart
            .handle_action(CartAction::RemoveProduct(ProductId(9)), &ctx)
            .await
            .unwrap();

        assert!(lines.is_empty());
        assert_eq!(storage.write_count(), 1);
        assert_eq!(
            storage.get_item(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn update_checks_current_amount() {
        let catalog = catalog();
        let storage = MemoryStorage::new();
        let ctx = CartContext::new(Arc::new(catalog.clone()), Arc::new(storage.clone()));
        let mut notices = ctx.subscribe();
        let mut cart = open(&ctx).await;
        cart.handle_action(CartAction::AddProduct(ProductId(1)), &ctx)
            .await
            .unwrap();

        // Current amount 1 <= stock 3, so 7 is taken as is.
        let lines = cart
            .handle_action(
                CartAction::UpdateProductAmount {
                    product_id: ProductId(1),
                    amount: 7,
                },
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(lines[0].amount, 7);

        // Now 7 > 3: refused with a notice.
        let err = cart
            .handle_action(
                CartAction::UpdateProductAmount {
                    product_id: ProductId(1),
                    amount: 2,
                },
                &ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::UpdateFailed { .. }));
        assert_eq!(notices.try_recv().unwrap(), Notice::UpdateFailed(ProductId(1)));
        assert_eq!(load_cart(&storage, CART_STORAGE_KEY).await[0].amount, 7);
    }

    #[tokio::test]
    async fn update_swallows_catalog_and_storage_failures() {
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(ReadOnlyStorage));
        let mut notices = ctx.subscribe();
        let mut cart = open(&ctx).await;
        cart.lines = vec![Product::from_info(sneaker(1), 1)];

        // Unknown product: the stock lookup fails.
        let lines = cart
            .handle_action(
                CartAction::UpdateProductAmount {
                    product_id: ProductId(77),
                    amount: 2,
                },
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(lines, cart.lines);

        // Known product, but the write fails.
        let lines = cart
            .handle_action(
                CartAction::UpdateProductAmount {
                    product_id: ProductId(1),
                    amount: 2,
                },
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(lines[0].amount, 1);
        assert!(notices.try_recv().is_err());
    }

    #[tokio::test]
    async fn strict_policy_rejects_requested_amount_above_stock() {
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(MemoryStorage::new()))
            .with_policy(StockPolicy {
                validate_requested_amount: true,
            });
        let mut cart = open(&ctx).await;
        cart.handle_action(CartAction::AddProduct(ProductId(1)), &ctx)
            .await
            .unwrap();

        let err = cart
            .handle_action(
                CartAction::UpdateProductAmount {
                    product_id: ProductId(1),
                    amount: 4,
                },
                &ctx,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::UpdateFailed { .. }));
        assert_eq!(cart.lines[0].amount, 1);
    }

    #[tokio::test]
    async fn clear_deletes_the_stored_key() {
        let storage = MemoryStorage::new();
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(storage.clone()));
        let mut cart = open(&ctx).await;
        cart.handle_action(CartAction::AddProduct(ProductId(1)), &ctx)
            .await
            .unwrap();

        let lines = cart.handle_action(CartAction::Clear, &ctx).await.unwrap();

        assert!(lines.is_empty());
        assert!(cart.lines.is_empty());
        assert!(storage.get_item(CART_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn on_create_with_garbage_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(CART_STORAGE_KEY, "not a cart").await.unwrap();
        let ctx = CartContext::new(Arc::new(catalog()), Arc::new(storage));

        assert!(open(&ctx).await.lines.is_empty());
    }
}
