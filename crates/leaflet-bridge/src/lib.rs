//! Leaflet Bridge
//!
//! Minimal wasm-bindgen bindings to the global `L` namespace of Leaflet.
//! Only the pieces needed to show a basemap, listen for clicks and
//! drop markers with popups are bound.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    /// `L.map(id)` - throws if the container is missing or already initialized
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(element_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    /// Base class of everything that can be added to a map
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = setPopupContent)]
    pub fn set_popup_content(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(extends = Layer)]
    pub type Popup;

    #[wasm_bindgen(js_namespace = L, js_name = popup)]
    pub fn popup(options: &JsValue) -> Popup;

    /// Payload of map mouse events (`click`, `dblclick`, ...)
    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// Options for `L.popup`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    /// Close other popups when this one opens
    pub auto_close: bool,
    /// Close when the map is clicked
    pub close_on_click: bool,
    pub class_name: String,
}

/// Options for `L.tileLayer`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayerOptions {
    pub attribution: String,
}

/// Serialize an options struct into a plain JS object
pub fn to_js<T: Serialize>(options: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(options).map_err(Into::into)
}

/// `[lat, lng]` array accepted wherever Leaflet expects a `LatLngExpression`
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_options_use_leaflet_keys() {
        let options = PopupOptions {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: "running-popup".to_string(),
        };

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["maxWidth"], 250);
        assert_eq!(json["minWidth"], 100);
        assert_eq!(json["autoClose"], false);
        assert_eq!(json["closeOnClick"], false);
        assert_eq!(json["className"], "running-popup");
    }

    #[test]
    fn test_tile_layer_options() {
        let options = TileLayerOptions { attribution: "OSM".to_string() };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"attribution":"OSM"}"#);
    }
}
