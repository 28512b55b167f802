use super::client::TextGenerator;
use crate::{Error, Result, prompt::InstructionSet};
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

const DEFAULT_BACKOFF: Duration = Duration::from_millis(250);

/// Puts a deadline on every backend call and optionally retries failures.
///
/// This sits between the responder and the real backend; the responder itself
/// never retries.
pub struct GuardedGenerator {
    inner: Box<dyn TextGenerator>,
    timeout: Duration,
    max_retries: u32,
    backoff: Duration,
}

impl GuardedGenerator {
    pub fn new(inner: Box<dyn TextGenerator>, timeout: Duration) -> Self {
        Self {
            inner,
            timeout,
            max_retries: 0,
            backoff: DEFAULT_BACKOFF,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Base delay between attempts; grows linearly with the attempt number.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn attempt(&self, instructions: &InstructionSet) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.inner.generate(instructions)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl TextGenerator for GuardedGenerator {
    async fn generate(&self, instructions: &InstructionSet) -> Result<String> {
        let mut attempt: u32 = 0;
        loop {
            match self.attempt(instructions).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.max_retries && e.is_retryable() => {
                    attempt += 1;
                    warn!(
                        "Backend attempt {} of {} failed, retrying: {}",
                        attempt,
                        self.max_retries + 1,
                        e
                    );
                    tokio::time::sleep(self.backoff * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
