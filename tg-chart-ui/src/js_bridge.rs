//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The heatmap (D3.js) and station map (Leaflet) live in `assets/js/*.js` and
//! are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes data for those globals and wires map events back
//! into Rust through closures parked on `window`.

use std::rc::Rc;

use tg_core::geodesic::LatLon;
use tg_core::station::StationId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Loaded from a CDN when the host page has not already provided them.
const D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";
const LEAFLET_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");

/// Global the host page may define to override `ExplorerConfig` fields.
const CONFIG_GLOBAL: &str = "TEMPGAMI_CONFIG";

/// Map input forwarded from Leaflet.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Click(LatLon),
    PointerMove(LatLon),
    /// A candidate's popup button was pressed
    Pick(StationId),
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Tempgami JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn js_string_literal(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-libraries polling loop.
///
/// The chart JS files define functions via `function` declarations. They are
/// evaluated at global scope once both D3 and Leaflet are present, and each
/// function is then promoted to `window.*` explicitly.
pub fn init_charts() {
    ensure_libraries();

    let all_js = [TOOLTIP_JS, HEATMAP_JS, STATION_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__tgChartsReady) {{ window.__tgChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__tgChartsReady || window.__tgChartsPolling) return;
            window.__tgChartsPolling = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__tgChartScripts);
                    delete window.__tgChartScripts;
                    if (typeof renderTempHeatmap !== 'undefined') window.renderTempHeatmap = renderTempHeatmap;
                    if (typeof initStationMap !== 'undefined') window.initStationMap = initStationMap;
                    if (typeof setStationMapFeatures !== 'undefined') window.setStationMapFeatures = setStationMapFeatures;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__tgChartsReady = true;
                    console.log('Tempgami charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Add `<script>`/`<link>` tags for D3 and Leaflet unless the page has them.
fn ensure_libraries() {
    call_js(&format!(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('tg-d3')) {{
            var s = document.createElement('script');
            s.id = 'tg-d3'; s.src = '{D3_URL}';
            document.head.appendChild(s);
        }}
        if (typeof L === 'undefined' && !document.getElementById('tg-leaflet')) {{
            var css = document.createElement('link');
            css.rel = 'stylesheet'; css.href = '{LEAFLET_CSS_URL}';
            document.head.appendChild(css);
            var l = document.createElement('script');
            l.id = 'tg-leaflet'; l.src = '{LEAFLET_URL}';
            document.head.appendChild(l);
        }}
        "#
    ));
}

/// Run `call` once the chart scripts are ready and `container_id` is in the DOM.
fn when_ready(container_id: &str, function: &str, call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__tgChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        {call}
                    }} catch(e) {{ console.error('[Tempgami] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the low/high temperature heatmap.
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    let data = js_string_literal(data_json);
    let config = js_string_literal(config_json);
    when_ready(
        container_id,
        "renderTempHeatmap",
        &format!("window.renderTempHeatmap('{container_id}', '{data}', '{config}');"),
    );
}

/// Create (or re-attach) the Leaflet map in `container_id`.
pub fn init_station_map(container_id: &str, center: LatLon, zoom: u8) {
    when_ready(
        container_id,
        "initStationMap",
        &format!(
            "window.initStationMap('{container_id}', {}, {}, {zoom});",
            center.lat, center.lon
        ),
    );
}

/// Replace everything drawn on the station map.
///
/// `features_json` is a serialized `Vec<tg_core::overlay::MapFeature>`. The
/// script keeps the latest list and redraws it if the map is recreated.
pub fn set_map_features(features_json: &str) {
    let features = js_string_literal(features_json);
    when_ready_global(
        "setStationMapFeatures",
        &format!("window.setStationMapFeatures('{features}');"),
    );
}

/// Like `when_ready` for calls that do not need a container.
fn when_ready_global(function: &str, call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            if (window.__tgChartsReady && typeof window.{function} !== 'undefined') {{
                {call}
                return;
            }}
            var poll = setInterval(function() {{
                if (window.__tgChartsReady && typeof window.{function} !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        {call}
                    }} catch(e) {{ console.error('[Tempgami] {function} error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Route Leaflet clicks, pointer moves and candidate picks into `on_event`.
///
/// The map script calls `window.__tgMapClick(lat, lon)`,
/// `window.__tgMapMove(lat, lon)` and `window.__tgMapPick(id)`. Registering
/// again replaces the previous handlers.
pub fn register_map_handlers(on_event: impl Fn(MapEvent) + 'static) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; map events will not be delivered");
        return;
    };
    let on_event = Rc::new(on_event);

    let click = {
        let on_event = on_event.clone();
        Closure::wrap(Box::new(move |lat: f64, lon: f64| {
            on_event(MapEvent::Click(LatLon::new(lat, lon)));
        }) as Box<dyn FnMut(f64, f64)>)
    };
    let pointer_move = {
        let on_event = on_event.clone();
        Closure::wrap(Box::new(move |lat: f64, lon: f64| {
            on_event(MapEvent::PointerMove(LatLon::new(lat, lon)));
        }) as Box<dyn FnMut(f64, f64)>)
    };
    let pick = Closure::wrap(Box::new(move |id: JsValue| match id.as_string() {
        Some(id) => on_event(MapEvent::Pick(StationId::new(id))),
        None => log::warn!("Ignoring pick with non-string id {:?}", id),
    }) as Box<dyn FnMut(JsValue)>);

    let handlers: [(&str, &JsValue); 3] = [
        ("__tgMapClick", click.as_ref()),
        ("__tgMapMove", pointer_move.as_ref()),
        ("__tgMapPick", pick.as_ref()),
    ];
    for (name, handler) in handlers {
        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), handler) {
            log::error!("Failed to register {}: {:?}", name, e);
        }
    }

    // forget the callbacks to keep them alive
    click.forget();
    pointer_move.forget();
    pick.forget();
}

/// JSON text of `window.TEMPGAMI_CONFIG`, if the host page defines it.
pub fn read_config_override() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string())
}

#[cfg(test)]
mod tests {
    use super::js_string_literal;

    #[test]
    fn test_js_string_literal_escapes_quotes() {
        let json = r#"[{"label":"O'HARE \"INTL\""}]"#;
        assert_eq!(
            js_string_literal(json),
            r#"[{"label":"O\'HARE \\"INTL\\""}]"#
        );
    }
}
