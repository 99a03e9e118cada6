#![forbid(unsafe_code)]

//! Injected item-source abstraction.
//!
//! Listing pages consume their product data through [`ItemSource`] rather
//! than a module-level store singleton. The trait separates cheap reads
//! ([`ItemSource::get`]) from loads that may hit the loader
//! ([`ItemSource::load`]), and makes staleness explicit: after
//! [`ItemSource::invalidate`] the cached data stays readable but reports
//! [`Freshness::Stale`] until the next load.
//!
//! [`CachedSource`] is the generation-counted reference implementation over a
//! caller-supplied loader closure.
//!
//! # Example
//!
//! ```rust
//! use storegrid_core::source::{CachedSource, Freshness, ItemSource};
//!
//! let mut source = CachedSource::new(|| Ok(vec!["ring", "necklace"]));
//! assert_eq!(source.freshness(), Freshness::Empty);
//!
//! let items = source.load().unwrap();
//! assert_eq!(items.len(), 2);
//! assert_eq!(source.freshness(), Freshness::Fresh);
//!
//! source.invalidate();
//! assert_eq!(source.freshness(), Freshness::Stale);
//! assert!(source.get().is_some()); // stale data still readable
//! ```

use std::fmt;

/// Boxed failure produced by a loader.
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Freshness of a source's cached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Data present and not invalidated since the last load.
    Fresh,
    /// Data present but invalidated; a reload is due.
    Stale,
    /// Never loaded (or cleared).
    Empty,
}

/// An injected, invalidatable source of listing items.
pub trait ItemSource<T> {
    /// Current cached items, if any. Never triggers a load.
    fn get(&self) -> Option<&[T]>;

    /// Items, loading (or reloading) if the cache is not fresh.
    fn load(&mut self) -> Result<&[T], SourceError>;

    /// Mark cached data stale without discarding it.
    fn invalidate(&mut self);

    /// Freshness of the cached data.
    fn freshness(&self) -> Freshness;

    /// Edit the cached items in place, keeping them fresh.
    ///
    /// This is the optimistic-update path: the UI mutates its copy
    /// immediately and reconciles with the backend later via
    /// [`invalidate`](Self::invalidate) + [`load`](Self::load). Returns
    /// `false` (and does not run the closure) when nothing is cached.
    fn mutate<M>(&mut self, mutation: M) -> bool
    where
        M: FnOnce(&mut Vec<T>),
        Self: Sized;
}

/// Generation-counted [`ItemSource`] over a loader closure.
///
/// Invalidation bumps a generation counter; the cache is fresh only while
/// the loaded generation matches the current one, so repeated invalidations
/// coalesce into a single reload.
#[derive(Debug)]
pub struct CachedSource<T, F> {
    loader: F,
    items: Option<Vec<T>>,
    generation: u64,
    loaded_generation: u64,
}

impl<T, F> CachedSource<T, F>
where
    F: FnMut() -> Result<Vec<T>, LoadError>,
{
    /// Create an empty source over the given loader.
    pub fn new(loader: F) -> Self {
        Self {
            loader,
            items: None,
            generation: 1,
            loaded_generation: 0,
        }
    }

    /// Discard cached items entirely, returning to [`Freshness::Empty`].
    pub fn clear(&mut self) {
        self.items = None;
        self.generation += 1;
    }

    /// Number of cached items (0 when empty).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_none()
    }
}

impl<T, F> ItemSource<T> for CachedSource<T, F>
where
    F: FnMut() -> Result<Vec<T>, LoadError>,
{
    fn get(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    fn load(&mut self) -> Result<&[T], SourceError> {
        if self.freshness() != Freshness::Fresh {
            #[cfg(feature = "tracing")]
            let _span =
                tracing::debug_span!("source_load", generation = self.generation).entered();

            let items = (self.loader)().map_err(SourceError::Load)?;
            self.items = Some(items);
            self.loaded_generation = self.generation;
        }
        // Cache is populated by the branch above whenever it was not fresh.
        Ok(self.items.as_deref().unwrap_or_default())
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn freshness(&self) -> Freshness {
        if self.items.is_none() {
            Freshness::Empty
        } else if self.loaded_generation == self.generation {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }

    fn mutate<M>(&mut self, mutation: M) -> bool
    where
        M: FnOnce(&mut Vec<T>),
    {
        match self.items.as_mut() {
            Some(items) => {
                mutation(items);
                self.loaded_generation = self.generation;
                true
            }
            None => false,
        }
    }
}

/// Error surfaced by [`ItemSource::load`].
#[derive(Debug)]
pub enum SourceError {
    /// The underlying loader failed.
    Load(LoadError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "item source load failed: {err}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn load_populates_and_reports_fresh() {
        let mut source = CachedSource::new(|| Ok(vec![1, 2, 3]));
        assert_eq!(source.freshness(), Freshness::Empty);
        assert_eq!(source.get(), None);

        assert_eq!(source.load().unwrap(), &[1, 2, 3]);
        assert_eq!(source.freshness(), Freshness::Fresh);
        assert_eq!(source.get(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn fresh_load_does_not_rerun_loader() {
        let calls = Cell::new(0u32);
        let mut source = CachedSource::new(|| {
            calls.set(calls.get() + 1);
            Ok(vec![1])
        });

        source.load().unwrap();
        source.load().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn invalidate_keeps_data_but_forces_reload() {
        let calls = Cell::new(0u32);
        let mut source = CachedSource::new(|| {
            calls.set(calls.get() + 1);
            Ok(vec![calls.get()])
        });

        source.load().unwrap();
        source.invalidate();
        assert_eq!(source.freshness(), Freshness::Stale);
        assert_eq!(source.get(), Some(&[1][..]));

        assert_eq!(source.load().unwrap(), &[2]);
        assert_eq!(source.freshness(), Freshness::Fresh);
    }

    #[test]
    fn repeated_invalidations_coalesce() {
        let calls = Cell::new(0u32);
        let mut source = CachedSource::new(|| {
            calls.set(calls.get() + 1);
            Ok(vec![0])
        });

        source.load().unwrap();
        source.invalidate();
        source.invalidate();
        source.invalidate();
        source.load().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn loader_failure_surfaces_and_leaves_cache_empty() {
        let mut source: CachedSource<u32, _> = CachedSource::new(|| Err("backend down".into()));
        let err = source.load().unwrap_err();
        assert_eq!(err.to_string(), "item source load failed: backend down");
        assert_eq!(source.freshness(), Freshness::Empty);
    }

    #[test]
    fn mutate_edits_in_place_and_refreshes() {
        let mut source = CachedSource::new(|| Ok(vec![1, 2, 3]));
        source.load().unwrap();
        source.invalidate();

        assert!(source.mutate(|items| items.retain(|&n| n != 2)));
        assert_eq!(source.get(), Some(&[1, 3][..]));
        assert_eq!(source.freshness(), Freshness::Fresh);
    }

    #[test]
    fn mutate_on_empty_source_is_a_no_op() {
        let mut source: CachedSource<u32, _> = CachedSource::new(|| Ok(Vec::new()));
        assert!(!source.mutate(|items| items.push(1)));
        assert_eq!(source.freshness(), Freshness::Empty);
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut source = CachedSource::new(|| Ok(vec![1]));
        source.load().unwrap();
        source.clear();
        assert_eq!(source.freshness(), Freshness::Empty);
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
    }
}
