//! Query-scoped memoization over any [`PositionProvider`].
//!
//! Searches re-evaluate the same instants repeatedly (window edges,
//! bisection endpoints, midnight samples). A `CachedProvider` is created at
//! the start of one query, threaded through it, and dropped at the end.
//! Keys use `Instant::to_bits()`: within one query the same instant is
//! always produced by the same arithmetic, so bit equality is exact.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use panjika_time::Instant;
use serde::Serialize;

use crate::{Body, EngineError, GeoLocation, HorizontalPosition, PositionProvider};

/// Telemetry from one cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QueryStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

type ObserverKey = [u64; 3];

fn observer_key(o: &GeoLocation) -> ObserverKey {
    [
        o.latitude_deg.to_bits(),
        o.longitude_deg.to_bits(),
        o.altitude_m.to_bits(),
    ]
}

/// Memoizing wrapper. Not `Sync`: each thread builds its own.
pub struct CachedProvider<'a, P: PositionProvider + ?Sized> {
    inner: &'a P,
    longitudes: RefCell<HashMap<(u64, Body), f64>>,
    horizontal: RefCell<HashMap<(u64, Body, ObserverKey), HorizontalPosition>>,
    separations: RefCell<HashMap<(u64, Body, Body), f64>>,
    evaluations: Cell<u32>,
    cache_hits: Cell<u32>,
}

impl<'a, P: PositionProvider + ?Sized> CachedProvider<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self {
            inner,
            longitudes: RefCell::new(HashMap::with_capacity(64)),
            horizontal: RefCell::new(HashMap::new()),
            separations: RefCell::new(HashMap::new()),
            evaluations: Cell::new(0),
            cache_hits: Cell::new(0),
        }
    }

    pub fn stats(&self) -> QueryStats {
        QueryStats {
            evaluations: self.evaluations.get(),
            cache_hits: self.cache_hits.get(),
        }
    }

    fn memo<K, V>(
        &self,
        map: &RefCell<HashMap<K, V>>,
        key: K,
        compute: impl FnOnce() -> Result<V, EngineError>,
    ) -> Result<V, EngineError>
    where
        K: std::hash::Hash + Eq,
        V: Copy,
    {
        if let Some(v) = map.borrow().get(&key) {
            self.cache_hits.set(self.cache_hits.get() + 1);
            return Ok(*v);
        }
        let v = compute()?;
        self.evaluations.set(self.evaluations.get() + 1);
        map.borrow_mut().insert(key, v);
        Ok(v)
    }
}

impl<P: PositionProvider + ?Sized> std::fmt::Debug for CachedProvider<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedProvider")
            .field("stats", &self.stats())
            .finish()
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for CachedProvider<'_, P> {
    fn apparent_longitude(&self, at: Instant, body: Body) -> Result<f64, EngineError> {
        self.memo(&self.longitudes, (at.to_bits(), body), || {
            self.inner.apparent_longitude(at, body)
        })
    }

    fn topocentric_alt_az(
        &self,
        at: Instant,
        body: Body,
        observer: &GeoLocation,
    ) -> Result<HorizontalPosition, EngineError> {
        self.memo(
            &self.horizontal,
            (at.to_bits(), body, observer_key(observer)),
            || self.inner.topocentric_alt_az(at, body, observer),
        )
    }

    fn angular_separation(&self, at: Instant, a: Body, b: Body) -> Result<f64, EngineError> {
        self.memo(&self.separations, (at.to_bits(), a, b), || {
            self.inner.angular_separation(at, a, b)
        })
    }

    fn coverage(&self) -> (Instant, Instant) {
        self.inner.coverage()
    }
}
