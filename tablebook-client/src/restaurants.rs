//! Restaurant detail lookup
//!
//! Keyed read of a restaurant by slug. Absence is an expected outcome,
//! so it is a [`Lookup`] variant rather than an error; the caller owns
//! the redirect decision. Transport and server failures stay `Err`.

use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::Restaurant;

/// Outcome of a slug lookup
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(Restaurant),
    NotFound,
}

impl Lookup {
    /// The restaurant, if one matched
    pub fn found(self) -> Option<Restaurant> {
        match self {
            Lookup::Found(restaurant) => Some(restaurant),
            Lookup::NotFound => None,
        }
    }
}

/// Read-only, idempotent restaurant lookup by slug
#[async_trait]
pub trait RestaurantDirectory: Send + Sync {
    async fn restaurant_by_slug(&self, slug: &str) -> ClientResult<Lookup>;
}

#[async_trait]
impl RestaurantDirectory for HttpClient {
    async fn restaurant_by_slug(&self, slug: &str) -> ClientResult<Lookup> {
        match self
            .get::<Restaurant>(&format!("api/restaurants/{}", slug))
            .await
        {
            Ok(restaurant) => Ok(Lookup::Found(restaurant)),
            Err(ClientError::NotFound(_)) => Ok(Lookup::NotFound),
            Err(err) => Err(err),
        }
    }
}

/// Memoizing wrapper over any directory.
///
/// Each lookup is independent and the projection is immutable, so
/// `Found` results are cached for the lifetime of the wrapper.
/// `NotFound` and failures are never cached; a slug may appear later.
pub struct CachedDirectory<D> {
    inner: D,
    cache: DashMap<String, Restaurant>,
}

impl<D> CachedDirectory<D> {
    /// Wrap a directory with a lookup cache
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of cached restaurants
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<D: RestaurantDirectory> RestaurantDirectory for CachedDirectory<D> {
    async fn restaurant_by_slug(&self, slug: &str) -> ClientResult<Lookup> {
        if let Some(hit) = self.cache.get(slug) {
            return Ok(Lookup::Found(hit.clone()));
        }

        let outcome = self.inner.restaurant_by_slug(slug).await?;
        if let Lookup::Found(restaurant) = &outcome {
            self.cache.insert(slug.to_string(), restaurant.clone());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Cuisine, Location, Price};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn restaurant(slug: &str) -> Restaurant {
        Restaurant {
            id: 1,
            name: "Bistro".to_string(),
            images: vec![],
            description: "A bistro".to_string(),
            open_time: "10:00:00.000Z".to_string(),
            close_time: "22:00:00.000Z".to_string(),
            slug: slug.to_string(),
            price: Price::Regular,
            location: Location {
                id: 1,
                name: "ottawa".to_string(),
            },
            cuisine: Cuisine {
                id: 1,
                name: "french".to_string(),
            },
            main_image: String::new(),
        }
    }

    /// Directory that answers only one slug and counts its calls
    struct CountingDirectory {
        slug: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RestaurantDirectory for CountingDirectory {
        async fn restaurant_by_slug(&self, slug: &str) -> ClientResult<Lookup> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if slug == self.slug {
                Ok(Lookup::Found(restaurant(slug)))
            } else {
                Ok(Lookup::NotFound)
            }
        }
    }

    #[tokio::test]
    async fn caches_found_lookups() {
        let directory = CachedDirectory::new(CountingDirectory {
            slug: "bistro-ottawa".to_string(),
            calls: AtomicUsize::new(0),
        });

        let first = directory.restaurant_by_slug("bistro-ottawa").await.unwrap();
        assert_eq!(first.found().unwrap().name, "Bistro");
        let second = directory.restaurant_by_slug("bistro-ottawa").await.unwrap();
        assert_eq!(second.found().unwrap().slug, "bistro-ottawa");

        assert_eq!(directory.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(directory.cached_len(), 1);
    }

    #[tokio::test]
    async fn does_not_cache_not_found() {
        let directory = CachedDirectory::new(CountingDirectory {
            slug: "bistro-ottawa".to_string(),
            calls: AtomicUsize::new(0),
        });

        for _ in 0..2 {
            let outcome = directory.restaurant_by_slug("no-such-place").await.unwrap();
            assert!(matches!(outcome, Lookup::NotFound));
        }

        assert_eq!(directory.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(directory.cached_len(), 0);
    }
}
