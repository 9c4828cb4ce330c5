// Copyright 2026 the WildView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered source fallback.
//!
//! Dashboards load their charting bundle from the first of several mirrors that
//! answers. [`SourceFallback`] models that as a plain loop over an ordered list
//! with a bounded number of attempts; the caller supplies the actual loader.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, warn};

use crate::error::FallbackError;

/// A successfully loaded source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loaded<'a, S, T> {
    /// Position of the source in the fallback list.
    pub index: usize,
    /// The source that succeeded.
    pub source: &'a S,
    /// The loader's output.
    pub value: T,
}

/// Sources tried in order until one loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFallback<S> {
    sources: Vec<S>,
    max_attempts: usize,
}

impl<S> SourceFallback<S> {
    /// Creates a fallback list that may try every source once.
    pub fn new(sources: impl IntoIterator<Item = S>) -> Self {
        let sources: Vec<S> = sources.into_iter().collect();
        let max_attempts = sources.len();
        Self {
            sources,
            max_attempts,
        }
    }

    /// Limits how many sources are tried (at least one).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the sources in priority order.
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    /// Returns how many sources [`SourceFallback::load`] will try at most.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts.min(self.sources.len())
    }
}

impl<S: fmt::Debug> SourceFallback<S> {
    /// Runs `attempt` on each source in order and returns the first success.
    ///
    /// When every attempted source fails, the error of the last attempt is returned.
    pub fn load<T, E: fmt::Display>(
        &self,
        mut attempt: impl FnMut(&S) -> Result<T, E>,
    ) -> Result<Loaded<'_, S, T>, FallbackError<E>> {
        let attempts = self.max_attempts();
        let mut last = None;
        for (index, source) in self.sources.iter().take(attempts).enumerate() {
            match attempt(source) {
                Ok(value) => {
                    debug!(index, ?source, "source loaded");
                    return Ok(Loaded {
                        index,
                        source,
                        value,
                    });
                }
                Err(err) => {
                    debug!(index, ?source, %err, "source failed, trying next");
                    last = Some(err);
                }
            }
        }
        match last {
            Some(last) => {
                warn!(attempts, "all sources failed");
                Err(FallbackError::Exhausted { attempts, last })
            }
            None => Err(FallbackError::NoSources),
        }
    }
}
