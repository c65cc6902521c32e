pub mod interval;

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::convert::Infallible;
use std::future::Future;

/// The outermost boundary. main.rs only knows this trait.
/// A driver has no in-band exit: it only ever returns an error.
#[async_trait]
pub trait Driver: Send {
    async fn drive(&mut self) -> Result<Infallible>;
}

/// Drive until `shutdown` resolves. A shutdown signal that cannot be armed
/// is an error, never a clean stop.
pub async fn drive_until<D, S>(driver: &mut D, shutdown: S) -> Result<()>
where
    D: Driver + ?Sized,
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = driver.drive() => {
            let never = result?;
            match never {}
        }
        result = shutdown => {
            result.context("failed to listen for shutdown signal")?;
            Ok(())
        }
    }
}
