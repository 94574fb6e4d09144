//! Core of the tempgami explorer.
//!
//! Everything in this crate is free of browser dependencies so the state
//! machines can be driven and tested natively:
//! - `selector`: two-click circle gesture producing a `SearchRegion`
//! - `selection`: the active-station controller and its stale-response guard
//! - `overlay`: candidate set and the map features derived from it
//! - `query`: the HTTP client for the tempgami API, generic over transport
//! - `matrix`, `heatmap`, `color_scale`: the low/high frequency matrix and
//!   how it is colored for display

pub mod color_scale;
pub mod config;
pub mod error;
pub mod geodesic;
pub mod heatmap;
pub mod matrix;
pub mod overlay;
pub mod payload;
pub mod query;
pub mod selection;
pub mod selector;
pub mod station;
