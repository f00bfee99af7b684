//! Natural kana comparator.
//!
//! [`Collator::compare`] is a strict total order over strings: collation keys
//! first, then raw codepoints, so two strings compare equal only when they are
//! identical. [`Collator::sort`] builds every key once, sorts the decorated
//! entries stably and returns a new vector.

use crate::collate::CollationKey;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, debug_span};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("missing argument: sort requires a collection of strings")]
    MissingArgument,
}

/// Configured natural kana comparator.
#[derive(Debug, Clone, Copy)]
pub struct Collator {
    numeric: bool,
}

impl Default for Collator {
    fn default() -> Self {
        Self { numeric: true }
    }
}

impl Collator {
    pub fn builder() -> CollatorBuilder {
        CollatorBuilder::default()
    }

    /// Collation key of `text` under this configuration.
    #[inline]
    pub fn key(&self, text: &str) -> CollationKey {
        CollationKey::with_numeric(text, self.numeric)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b)).then_with(|| a.cmp(b))
    }

    /// Stable natural kana sort. The input is left untouched.
    ///
    /// `None` stands for a call without a collection and is rejected with
    /// [`SortError::MissingArgument`]; an empty slice sorts to an empty vector.
    pub fn sort<S>(&self, strings: Option<&[S]>) -> Result<Vec<S>, SortError>
    where
        S: AsRef<str> + Clone,
    {
        let Some(strings) = strings else {
            debug!("sort called without a collection");
            return Err(SortError::MissingArgument);
        };
        let _span = debug_span!("natural_kana_sort", n = strings.len(), numeric = self.numeric)
            .entered();

        let mut decorated: Vec<(CollationKey, &S)> = strings
            .iter()
            .map(|s| (self.key(s.as_ref()), s))
            .collect();
        decorated.sort_by(|(ka, a), (kb, b)| {
            ka.cmp(kb).then_with(|| a.as_ref().cmp(b.as_ref()))
        });
        Ok(decorated.into_iter().map(|(_, s)| s.clone()).collect())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CollatorBuilder {
    numeric: bool,
}

impl Default for CollatorBuilder {
    fn default() -> Self {
        Self { numeric: true }
    }
}

impl CollatorBuilder {
    /// Compare digit runs by value (`2` < `10`). On by default; when off,
    /// every digit is compared on its own.
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn build(self) -> Collator {
        Collator {
            numeric: self.numeric,
        }
    }
}
