//! Map View
//!
//! Leaflet basemap, click capture and workout markers.

use leaflet_bridge::{self as leaflet, PopupOptions, TileLayerOptions};
use wasm_bindgen::prelude::*;

use crate::config::{OSM_ATTRIBUTION, OSM_TILE_URL};
use crate::error::{AppError, AppResult};
use crate::models::{Coords, WorkoutType};

pub const POPUP_MIN_WIDTH: u32 = 100;
pub const POPUP_MAX_WIDTH: u32 = 250;

/// Popup settings for a workout marker. Popups stay open when other
/// popups open or the map is clicked, so several can be visible at once.
pub fn popup_options(workout_type: WorkoutType) -> PopupOptions {
    PopupOptions {
        max_width: POPUP_MAX_WIDTH,
        min_width: POPUP_MIN_WIDTH,
        auto_close: false,
        close_on_click: false,
        class_name: workout_type.popup_class(),
    }
}

/// Map operations used by the controller
pub trait MapView {
    /// Create the basemap centered on `center`
    fn initialize(&mut self, center: Coords, zoom: u8) -> AppResult<()>;

    /// Register the handler for clicks on the map
    fn on_click(&mut self, handler: Box<dyn FnMut(Coords)>) -> AppResult<()>;

    /// Place a marker with an opened popup showing `glyph`
    fn render_marker(&mut self, coords: Coords, glyph: &str, popup: &PopupOptions) -> AppResult<()>;
}

/// `MapView` backed by the global Leaflet `L`
pub struct LeafletMapView {
    element_id: String,
    map: Option<leaflet::Map>,
    click_handler: Option<Closure<dyn FnMut(leaflet::MouseEvent)>>,
}

impl LeafletMapView {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            map: None,
            click_handler: None,
        }
    }

    fn map(&self) -> AppResult<&leaflet::Map> {
        self.map.as_ref().ok_or(AppError::MapNotReady)
    }
}

impl MapView for LeafletMapView {
    fn initialize(&mut self, center: Coords, zoom: u8) -> AppResult<()> {
        let map = leaflet::create_map(&self.element_id)?;
        map.set_view(&leaflet::lat_lng(center.lat, center.lng), f64::from(zoom));

        let options = leaflet::to_js(&TileLayerOptions {
            attribution: OSM_ATTRIBUTION.to_string(),
        })?;
        leaflet::tile_layer(OSM_TILE_URL, &options).add_to(&map);

        tracing::info!("[MAP] initialized at {:.4},{:.4} zoom {}", center.lat, center.lng, zoom);
        self.map = Some(map);
        Ok(())
    }

    fn on_click(&mut self, mut handler: Box<dyn FnMut(Coords)>) -> AppResult<()> {
        let map = self.map()?;
        let closure = Closure::<dyn FnMut(leaflet::MouseEvent)>::new(move |ev: leaflet::MouseEvent| {
            let lat_lng = ev.latlng();
            handler(Coords::new(lat_lng.lat(), lat_lng.lng()));
        });
        map.on("click", closure.as_ref().unchecked_ref());
        // The closure must outlive the listener
        self.click_handler = Some(closure);
        Ok(())
    }

    fn render_marker(&mut self, coords: Coords, glyph: &str, popup: &PopupOptions) -> AppResult<()> {
        let map = self.map()?;
        let popup = leaflet::popup(&leaflet::to_js(popup)?);
        let marker = leaflet::marker(&leaflet::lat_lng(coords.lat, coords.lng));
        marker.add_to(map);
        marker
            .bind_popup(&popup)
            .set_popup_content(&format!("{} ", glyph))
            .open_popup();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_options_per_type() {
        let running = popup_options(WorkoutType::Running);
        assert_eq!(running.class_name, "running-popup");
        assert_eq!((running.min_width, running.max_width), (100, 250));
        assert!(!running.auto_close);
        assert!(!running.close_on_click);

        assert_eq!(popup_options(WorkoutType::Cycling).class_name, "cycling-popup");
    }

    #[test]
    fn test_unready_map_rejects_markers() {
        let mut view = LeafletMapView::new("map");
        let result = view.render_marker(
            Coords::new(0.0, 0.0),
            WorkoutType::Running.glyph(),
            &popup_options(WorkoutType::Running),
        );
        assert_eq!(result, Err(AppError::MapNotReady));
        assert_eq!(view.on_click(Box::new(|_| {})), Err(AppError::MapNotReady));
    }
}
