//! Shared Dioxus components and JS bridge for the tempgami explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js heatmap and Leaflet map via `js_sys::eval()`
//! - `transport`: browser `fetch` implementation of `tg_core::query::HttpGet`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (station controls, map, matrix, tables)

pub mod js_bridge;
pub mod state;
pub mod transport;
pub mod components;
