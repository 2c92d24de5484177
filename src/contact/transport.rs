use std::time::Duration;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use super::ContactRecord;
use crate::schedule::{sleep, Scheduler};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Delivers a contact message somewhere. A controller never calls `send`
/// again before the previous call has returned.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, record: &ContactRecord) -> Result<(), SendError>;
}

/// Stand-in transport with no backend: waits, then reports success.
#[derive(Clone)]
pub struct SimulatedTransport<S: Scheduler> {
    scheduler: S,
    delay: Duration,
}

impl<S: Scheduler> SimulatedTransport<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay }
    }
}

#[async_trait(?Send)]
impl<S: Scheduler> ContactTransport for SimulatedTransport<S> {
    async fn send(&self, record: &ContactRecord) -> Result<(), SendError> {
        sleep(&self.scheduler, self.delay).await;
        info!(
            "contact: simulated delivery of a {}-char message",
            record.message.chars().count()
        );
        Ok(())
    }
}
