//! # Failing Backend
//!
//! A Backend wrapper that can simulate failures for testing error paths
//! without a broken disk.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::traits::Backend;

/// Policy for when failures should occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Never fail (passthrough).
    Never,
    /// Fail every write.
    Writes,
    /// Let N writes succeed, then fail every later write.
    AfterWrites(usize),
    /// Fail every read.
    Reads,
}

/// Wrapper around a Backend that can simulate failures.
pub struct FailingBackend<B: Backend> {
    inner: B,
    policy: RwLock<FailurePolicy>,
    write_count: AtomicUsize,
}

impl<B: Backend> FailingBackend<B> {
    /// Create a new failing backend with the given policy.
    pub fn new(inner: B, policy: FailurePolicy) -> Self {
        Self {
            inner,
            policy: RwLock::new(policy),
            write_count: AtomicUsize::new(0),
        }
    }

    /// Get the underlying backend (for inspection).
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Number of writes that reached the inner backend.
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Replace the failure policy and reset the write counter.
    pub fn set_policy(&self, policy: FailurePolicy) -> Result<()> {
        *self
            .policy
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))? = policy;
        self.write_count.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn policy(&self) -> Result<FailurePolicy> {
        self.policy
            .read()
            .map(|p| p.clone())
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn check_write(&self, key: &str) -> Result<()> {
        let fail = match self.policy()? {
            FailurePolicy::Writes => true,
            FailurePolicy::AfterWrites(n) => self.write_count() >= n,
            FailurePolicy::Never | FailurePolicy::Reads => false,
        };
        if fail {
            return Err(StoreError::Injected(format!("write to {}", key)));
        }
        Ok(())
    }
}

impl<B: Backend> Backend for FailingBackend<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.policy()? == FailurePolicy::Reads {
            return Err(StoreError::Injected(format!("read of {}", key)));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_write(key)?;
        self.inner.set(key, value)?;
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_write(key)?;
        self.inner.remove(key)?;
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
