//! Trailmark App
//!
//! Sidebar with the workout form and list, map on the right.

use std::cell::RefCell;
use std::rc::Rc;

use console_logger::LogBuffer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{LogPanel, WorkoutForm, WorkoutList};
use crate::config::AppConfig;
use crate::controller::WorkoutController;
use crate::form::FormSignals;
use crate::geolocation;
use crate::map_view::LeafletMapView;
use crate::models::Coords;
use crate::notify::BrowserAlert;
use crate::store::{store_add_workout, AppState};

type Controller = WorkoutController<LeafletMapView, FormSignals, BrowserAlert>;

#[component]
pub fn App(config: AppConfig, logs: Option<LogBuffer>) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let form = FormSignals::new();
    let controller: Rc<RefCell<Controller>> = Rc::new(RefCell::new(WorkoutController::new(
        LeafletMapView::new(config.map_element_id.clone()),
        form,
        BrowserAlert,
        config.zoom,
    )));

    // Ask for the position once the map container is mounted
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                let position = geolocation::current_position().await;
                let weak = Rc::downgrade(&controller);
                let on_click = move |coords: Coords| {
                    let Some(controller) = weak.upgrade() else { return };
                    match controller.try_borrow_mut() {
                        Ok(mut controller) => controller.show_form(coords),
                        Err(_) => tracing::warn!("[APP] click ignored, controller busy"),
                    };
                };
                if let Err(e) = controller.borrow_mut().load_map(position, on_click) {
                    tracing::error!("[APP] map unavailable: {}", e);
                }
            });
        });
    }

    let on_submit = {
        let controller = controller.clone();
        move || {
            let recorded = controller.borrow_mut().new_workout().cloned();
            match recorded {
                Ok(workout) => store_add_workout(&store, workout),
                Err(e) => tracing::debug!("[APP] no workout recorded: {}", e),
            }
        }
    };

    let on_type_change = move || controller.borrow().toggle_workout_type();

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <h1 class="logo">"Trailmark"</h1>
                <WorkoutForm form=form on_submit=on_submit on_type_change=on_type_change />
                <WorkoutList />
                {logs.map(|logs| view! { <LogPanel logs=logs /> })}
            </aside>
            <div id=config.map_element_id class="map"></div>
        </div>
    }
}
