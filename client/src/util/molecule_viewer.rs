//! Handle around one embedded 3-D molecule viewer (Miew) instance.
//!
//! DESIGN
//! ======
//! Each molecule block owns exactly one [`MoleculeViewer`]. The handle is
//! created once when the container mounts and terminated when it is dropped,
//! so no viewer state lives in module-level globals.
//!
//! ERROR HANDLING
//! ==============
//! A missing viewer library or a throwing constructor/loader yields a
//! [`ViewerError`]; the block logs it and shows a placeholder.

#[cfg(test)]
#[path = "molecule_viewer_test.rs"]
mod molecule_viewer_test;

use serde_json::{Value, json};

use crate::payload::MolecularFormat;
#[cfg(feature = "hydrate")]
use crate::payload::MolecularPayload;

/// Global constructor name exposed by the viewer script.
pub const VIEWER_GLOBAL: &str = "Miew";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    #[error("molecule viewer library is not loaded")]
    Unavailable,
    #[error("molecule viewer failed to initialize: {0}")]
    Init(String),
    #[error("molecule viewer rejected the {format} structure: {message}")]
    Load { format: &'static str, message: String },
}

/// Viewer options applied at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerSettings {
    pub editing: bool,
    pub interpolate_views: bool,
    pub z_sprite: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self { editing: true, interpolate_views: true, z_sprite: true }
    }
}

impl ViewerSettings {
    /// Settings object in the viewer's own option names.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "editing": self.editing,
            "interpolateViews": self.interpolate_views,
            "zSprite": self.z_sprite,
        })
    }
}

/// Options for loading a structure from an in-memory string.
#[must_use]
pub fn load_options(format: MolecularFormat) -> Value {
    json!({ "sourceType": "immediate", "fileType": format.as_str() })
}

/// A live viewer attached to one container element.
#[cfg(feature = "hydrate")]
pub struct MoleculeViewer {
    instance: wasm_bindgen::JsValue,
}

#[cfg(feature = "hydrate")]
impl MoleculeViewer {
    /// Create, initialize and start a viewer in `container`, then load `payload`.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Unavailable`] when the viewer script has not been
    /// loaded, [`ViewerError::Init`] when construction or `init()` fails, and
    /// [`ViewerError::Load`] when `load()` throws synchronously.
    pub fn mount(
        container: &web_sys::HtmlElement,
        payload: &MolecularPayload,
        settings: ViewerSettings,
    ) -> Result<Self, ViewerError> {
        use js_sys::{Array, Function, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(ViewerError::Unavailable)?;
        let ctor = Reflect::get(&window, &JsValue::from_str(VIEWER_GLOBAL))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ViewerError::Unavailable)?;

        let options = to_js(&json!({ "settings": settings.to_json() })).map_err(ViewerError::Init)?;
        Reflect::set(&options, &JsValue::from_str("container"), container).map_err(|e| ViewerError::Init(describe(&e)))?;

        let instance =
            Reflect::construct(&ctor, &Array::of1(&options)).map_err(|e| ViewerError::Init(describe(&e)))?;
        let viewer = Self { instance };

        let initialized = viewer.call("init", &[]).map_err(ViewerError::Init)?;
        if initialized.as_bool() == Some(false) {
            return Err(ViewerError::Init("init() returned false".to_owned()));
        }
        viewer.call("run", &[]).map_err(ViewerError::Init)?;

        let format = payload.format.as_str();
        let load_opts = to_js(&load_options(payload.format))
            .map_err(|message| ViewerError::Load { format, message })?;
        let pending = viewer
            .call("load", &[JsValue::from_str(&payload.body), load_opts])
            .map_err(|message| ViewerError::Load { format, message })?;
        if let Ok(promise) = pending.dyn_into::<js_sys::Promise>() {
            let on_reject = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                leptos::logging::warn!("molecule viewer failed to load {format} structure: {}", describe(&err));
            });
            let _ = promise.catch(&on_reject);
            // Leaked once per mounted viewer; the promise may settle after unmount.
            on_reject.forget();
        }

        Ok(viewer)
    }

    fn call(&self, method: &str, args: &[wasm_bindgen::JsValue]) -> Result<wasm_bindgen::JsValue, String> {
        use wasm_bindgen::JsCast;

        let function = js_sys::Reflect::get(&self.instance, &wasm_bindgen::JsValue::from_str(method))
            .map_err(|e| describe(&e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| format!("viewer has no {method}()"))?;
        let args: js_sys::Array = args.iter().collect();
        js_sys::Reflect::apply(&function, &self.instance, &args).map_err(|e| describe(&e))
    }
}

#[cfg(feature = "hydrate")]
impl Drop for MoleculeViewer {
    fn drop(&mut self) {
        if let Err(err) = self.call("term", &[]) {
            leptos::logging::warn!("molecule viewer did not terminate cleanly: {err}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn to_js(value: &Value) -> Result<wasm_bindgen::JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(|e| describe(&e))
}

#[cfg(feature = "hydrate")]
fn describe(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
