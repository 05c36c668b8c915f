use dioxus::prelude::*;

use crate::domain::models::MenuTree;
use crate::shared::storage::{open_platform_store, PlatformStore};
use crate::shared::view_state::ViewStateSync;

pub const SIDEBAR_ID: &str = "sidebar";
pub const MOBILE_OVERLAY_ID: &str = "mobileOverlay";
pub const USER_INFO_TOGGLE_ID: &str = "userInfoToggle";
pub const USER_MENU_ID: &str = "userMenu";

pub type SharedViewState = Signal<ViewStateSync<PlatformStore>>;

/// Sidebar, submenu and user menu state for the current page.
///
/// The first effect run restores persisted state for `current_path` and
/// applies the viewport width; later runs only recompute the active
/// selection. Window resize and document click listeners live as long as the
/// calling component.
pub fn use_view_state(current_path: String) -> SharedViewState {
    let mut view = use_signal(|| ViewStateSync::new(open_platform_store(), MenuTree::console()));

    use_effect(use_reactive!(|(current_path,)| {
        if view.peek().is_initialized() {
            view.write().set_current_path(&current_path);
            return;
        }

        let mut sync = view.write();
        sync.initialize(&current_path);
        if let Some(width) = viewport_width() {
            sync.handle_viewport_change(width);
        }
    }));

    use_hook(move || listeners::install(view));

    view
}

#[cfg(target_arch = "wasm32")]
fn viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_width() -> Option<u32> {
    None
}

#[cfg(target_arch = "wasm32")]
mod listeners {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{
        viewport_width, SharedViewState, SIDEBAR_ID, USER_INFO_TOGGLE_ID, USER_MENU_ID,
    };
    use crate::shared::view_state::InteractionTarget;

    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    /// Window `resize` and document `click` listeners, removed when the
    /// layout unmounts
    pub struct ViewportListeners {
        window: web_sys::Window,
        document: web_sys::Document,
        on_resize: Listener,
        on_click: Listener,
    }

    impl Drop for ViewportListeners {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
            let _ = self
                .document
                .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        }
    }

    pub fn install(view: SharedViewState) -> Option<Rc<ViewportListeners>> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let mut resize_view = view;
        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(width) = viewport_width() {
                resize_view.write().handle_viewport_change(width);
            }
        }) as Box<dyn FnMut(_)>);

        let lookup = document.clone();
        let mut click_view = view;
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let inside = |id: &str| {
                lookup
                    .get_element_by_id(id)
                    .is_some_and(|element| element.contains(target.as_ref()))
            };
            let interaction = InteractionTarget {
                inside_sidebar: inside(SIDEBAR_ID),
                inside_user_menu: inside(USER_INFO_TOGGLE_ID) || inside(USER_MENU_ID),
            };

            let needs_update = click_view.peek().closes_on_interaction(interaction);
            if needs_update {
                click_view.write().handle_outside_interaction(interaction);
            }
        }) as Box<dyn FnMut(_)>);

        let listeners = ViewportListeners {
            window,
            document,
            on_resize,
            on_click,
        };
        if let Err(e) = listeners
            .window
            .add_event_listener_with_callback("resize", listeners.on_resize.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to listen for window resize: {:?}", e);
        }
        if let Err(e) = listeners
            .document
            .add_event_listener_with_callback("click", listeners.on_click.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to listen for document clicks: {:?}", e);
        }
        Some(Rc::new(listeners))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod listeners {
    use super::SharedViewState;

    pub fn install(_view: SharedViewState) {}
}
