use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Once;

use js_sys::Function;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use iconmotion_core::{
    AmbientConfigPatch, HostReducedMotionSignal, IconAnimationFacade, IconProps,
    MotionPresetCatalog, ScopeStack, Subscription, SystemPreferenceObserver,
};

/// The page's reduced-motion signal, fed from a `matchMedia` listener on the JS side.
static HOST_SIGNAL: Lazy<HostReducedMotionSignal> =
    Lazy::new(|| HostReducedMotionSignal::new(false));
static INSTALL: Once = Once::new();
static NEXT_LISTENER: AtomicU32 = AtomicU32::new(1);

thread_local! {
    static JS_LISTENERS: RefCell<HashMap<u32, Function>> = RefCell::new(HashMap::new());
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_patch(patch: JsValue, what: &str) -> Result<AmbientConfigPatch, JsError> {
    let patch: AmbientConfigPatch =
        swb::from_value(patch).map_err(|e| JsError::new(&format!("{what} parse error: {e}")))?;
    patch
        .validate()
        .map_err(|e| JsError::new(&format!("{what}: {e}")))?;
    Ok(patch)
}

/// Plain objects instead of JS `Map`s, so renderers can spread the result.
fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
pub struct IconMotion {
    scopes: ScopeStack,
    subscriptions: HashMap<u32, Subscription>,
}

#[wasm_bindgen]
impl IconMotion {
    /// Create a resolver. Pass a provider config object or undefined/null for defaults.
    /// Example:
    ///   new IconMotion({ animated: true, defaultSize: 20 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<IconMotion, JsError> {
        console_error_panic_hook::set_once();
        INSTALL.call_once(|| {
            SystemPreferenceObserver::global().install_source(Box::new(HOST_SIGNAL.clone()));
        });

        let mut scopes = ScopeStack::new();
        if !jsvalue_is_undefined_or_null(&config) {
            scopes.push(&parse_patch(config, "config")?);
        }
        Ok(IconMotion {
            scopes,
            subscriptions: HashMap::new(),
        })
    }

    /// Enter a nested provider. Keys it omits fall back to library defaults.
    /// Returns the scope id.
    #[wasm_bindgen(js_name = push_scope)]
    pub fn push_scope(&mut self, patch: JsValue) -> Result<u32, JsError> {
        let patch = if jsvalue_is_undefined_or_null(&patch) {
            AmbientConfigPatch::default()
        } else {
            parse_patch(patch, "push_scope")?
        };
        Ok(self.scopes.push(&patch).0)
    }

    /// Leave the innermost provider. Returns its id, or undefined if none was open.
    #[wasm_bindgen(js_name = pop_scope)]
    pub fn pop_scope(&mut self) -> Option<u32> {
        self.scopes.pop().map(|id| id.0)
    }

    /// The ambient config currently in effect.
    #[wasm_bindgen(js_name = current_config)]
    pub fn current_config(&self) -> Result<JsValue, JsError> {
        to_js(&self.scopes.current_config(), "current_config")
    }

    /// Resolve one icon's props (`{ motionType, trigger, animated, size, ... }`).
    /// Unknown motion types and triggers degrade to `scale` / `hover`; wrongly
    /// typed props are ignored. Props that are not an object resolve as `{}`.
    #[wasm_bindgen]
    pub fn resolve(&self, props: JsValue) -> Result<JsValue, JsError> {
        let props: IconProps = if jsvalue_is_undefined_or_null(&props) {
            IconProps::default()
        } else {
            swb::from_value(props).unwrap_or_else(|e| {
                log::debug!("unreadable icon props ({e}); using defaults");
                IconProps::default()
            })
        };
        let icon = IconAnimationFacade::resolve_in(
            &props,
            &self.scopes.current(),
            SystemPreferenceObserver::global(),
        );
        to_js(&icon, "resolve")
    }

    /// Forward the page's `prefers-reduced-motion` value.
    #[wasm_bindgen(js_name = set_system_reduced_motion)]
    pub fn set_system_reduced_motion(&self, reduced: bool) {
        HOST_SIGNAL.set(reduced);
    }

    #[wasm_bindgen(js_name = prefers_reduced_motion)]
    pub fn prefers_reduced_motion(&self) -> bool {
        SystemPreferenceObserver::global().prefers_reduced_motion()
    }

    /// Call `callback(reduced: boolean)` on every change. Returns an id for unsubscribing.
    #[wasm_bindgen(js_name = subscribe_reduced_motion)]
    pub fn subscribe_reduced_motion(&mut self, callback: Function) -> u32 {
        let key = NEXT_LISTENER.fetch_add(1, Ordering::Relaxed);
        JS_LISTENERS.with(|l| l.borrow_mut().insert(key, callback));
        // JS functions are not Send; the observer only sees the registry key.
        let sub = SystemPreferenceObserver::global().subscribe(move |reduced| {
            let f = JS_LISTENERS.with(|l| l.borrow().get(&key).cloned());
            if let Some(f) = f {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_bool(reduced)) {
                    log::warn!("reduced-motion listener {key} threw: {e:?}");
                }
            }
        });
        self.subscriptions.insert(key, sub);
        key
    }

    #[wasm_bindgen(js_name = unsubscribe_reduced_motion)]
    pub fn unsubscribe_reduced_motion(&mut self, id: u32) -> bool {
        JS_LISTENERS.with(|l| l.borrow_mut().remove(&id));
        match self.subscriptions.remove(&id) {
            Some(sub) => {
                sub.unsubscribe();
                true
            }
            None => false,
        }
    }
}

impl Drop for IconMotion {
    fn drop(&mut self) {
        JS_LISTENERS.with(|l| {
            let mut l = l.borrow_mut();
            for id in self.subscriptions.keys() {
                l.remove(id);
            }
        });
    }
}

/// The catalog entry for a motion type name (unknown names give `scale`).
#[wasm_bindgen(js_name = lookup_preset)]
pub fn lookup_preset(motion_type: &str) -> Result<JsValue, JsError> {
    to_js(MotionPresetCatalog::lookup_str(motion_type), "lookup_preset")
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
