#![allow(dead_code)]

use async_trait::async_trait;
use paysheet::domain::payment_type::PaymentType;
use paysheet::domain::ports::PaymentCatalog;
use paysheet::error::{PaymentSheetError, Result};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;

pub fn sample_types() -> Vec<PaymentType> {
    vec![
        PaymentType::new(1, "Visa"),
        PaymentType::new(2, "MasterCard"),
        PaymentType::new(3, "PayPal"),
    ]
}

/// Answers fetches from a queue of prepared responses, in call order.
/// Once the queue is empty every fetch resolves immediately with an empty catalog.
#[derive(Default)]
pub struct ScriptedCatalog {
    responses: Mutex<VecDeque<(Duration, Result<Vec<PaymentType>>)>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, delay: Duration, result: Result<Vec<PaymentType>>) {
        self.responses.lock().await.push_back((delay, result));
    }
}

#[async_trait]
impl PaymentCatalog for ScriptedCatalog {
    async fn fetch_types(&self) -> Result<Vec<PaymentType>> {
        let next = self.responses.lock().await.pop_front();
        let (delay, result) = next.unwrap_or((Duration::ZERO, Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        result
    }
}

/// A catalog whose backend is always down.
pub struct FailingCatalog;

#[async_trait]
impl PaymentCatalog for FailingCatalog {
    async fn fetch_types(&self) -> Result<Vec<PaymentType>> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Err(PaymentSheetError::CatalogError("service unavailable".into()))
    }
}

/// A catalog that blows up mid-fetch.
pub struct PanickingCatalog;

#[async_trait]
impl PaymentCatalog for PanickingCatalog {
    async fn fetch_types(&self) -> Result<Vec<PaymentType>> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        panic!("catalog backend crashed");
    }
}
