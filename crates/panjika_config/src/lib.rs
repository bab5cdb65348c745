//! Configuration for the panjika almanac.
//!
//! This crate provides:
//! - TOML sections `[observer]`, `[almanac]`, `[eclipse]` and `[hijri]`,
//!   every field optional
//! - Conversion into the runtime [`Observer`](panjika_search::Observer),
//!   [`AlmanacSettings`](panjika_search::AlmanacSettings) and Hijri converter
//! - The [`LocationResolver`] seam with a fixed fallback observer

pub mod error;
pub mod resolver;
pub mod sections;

pub use error::ConfigError;
pub use resolver::{
    LocationResolver, default_observer, load_config, load_or_default, resolve_observer,
};
pub use sections::{
    AlmanacSection, AyanamshaSetting, DEFAULT_PLACE, DEFAULT_ZONE, EclipseSection, HijriSection,
    ObserverOverrides, ObserverSection, PanjikaConfig,
};
