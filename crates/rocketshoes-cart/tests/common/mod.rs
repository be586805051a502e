//! Fake storefront API serving `stock/{id}` and `products/{id}`.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rocketshoes_cart::model::{ProductId, ProductInfo, Stock};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Default)]
struct Records {
    products: HashMap<u32, ProductInfo>,
    stock: HashMap<u32, u32>,
}

#[derive(Clone, Default)]
struct ApiState {
    records: Arc<Mutex<Records>>,
    requests: Arc<AtomicUsize>,
    delay: Duration,
}

pub struct FakeStorefront {
    addr: SocketAddr,
    state: ApiState,
    _handle: tokio::task::JoinHandle<()>,
}

pub fn sneaker(id: u32, price: f64) -> ProductInfo {
    ProductInfo {
        id: ProductId(id),
        title: format!("Tênis {id}"),
        price,
        image: format!(
            "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis{id}.jpg"
        ),
    }
}

async fn stock(
    State(state): State<ApiState>,
    Path(id): Path<u32>,
) -> Result<Json<Stock>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(state.delay).await;
    let records = state.records.lock().unwrap();
    records
        .stock
        .get(&id)
        .map(|&amount| {
            Json(Stock {
                id: ProductId(id),
                amount,
            })
        })
        .ok_or(StatusCode::NOT_FOUND)
}

async fn product(
    State(state): State<ApiState>,
    Path(id): Path<u32>,
) -> Result<Json<ProductInfo>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(state.delay).await;
    let records = state.records.lock().unwrap();
    records
        .products
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

impl FakeStorefront {
    pub async fn start() -> Self {
        Self::start_with_delay(Duration::ZERO).await
    }

    /// Every response waits `delay`, widening the window between a cart's
    /// read and its write.
    pub async fn start_with_delay(delay: Duration) -> Self {
        let state = ApiState {
            delay,
            ..ApiState::default()
        };
        let app = Router::new()
            .route("/stock/{id}", get(stock))
            .route("/products/{id}", get(product))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            _handle: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn add_product(&self, info: ProductInfo, stock: u32) {
        let mut records = self.state.records.lock().unwrap();
        records.stock.insert(info.id.0, stock);
        records.products.insert(info.id.0, info);
    }

    /// A product the catalog lists but has no stock record for.
    pub fn add_product_without_stock(&self, info: ProductInfo) {
        let mut records = self.state.records.lock().unwrap();
        records.products.insert(info.id.0, info);
    }

    pub fn set_stock(&self, id: u32, amount: u32) {
        self.state.records.lock().unwrap().stock.insert(id, amount);
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }
}
