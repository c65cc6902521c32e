use anyhow::{Context, Result};
use async_trait::async_trait;
use std::convert::Infallible;
use std::io::Write;
use std::time::Duration;

use super::Driver;
use crate::consts::DEFAULT_INTERVAL;
use crate::entity::Entity;

pub struct IntervalConfig {
    pub interval: Duration,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Runs one entity forever, pausing a fixed interval after every run.
pub struct IntervalDriver<W: Write + Send> {
    entity: Box<dyn Entity>,
    out: W,
    config: IntervalConfig,
}

impl<W: Write + Send> IntervalDriver<W> {
    pub fn new(entity: Box<dyn Entity>, out: W, config: IntervalConfig) -> Self {
        Self {
            entity,
            out,
            config,
        }
    }

    pub fn entity(&self) -> &dyn Entity {
        self.entity.as_ref()
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }
}

#[async_trait]
impl<W: Write + Send> Driver for IntervalDriver<W> {
    async fn drive(&mut self) -> Result<Infallible> {
        log::debug!(
            "driving {} every {:?}",
            self.entity.name(),
            self.config.interval
        );

        loop {
            self.entity.run(&mut self.out)?;
            self.out.flush().context("failed to flush output")?;
            log::trace!("{} ran, sleeping {:?}", self.entity.name(), self.config.interval);
            tokio::time::sleep(self.config.interval).await;
        }
    }
}
