#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use field_core::pattern;
use field_core::{
    ControlMode, FieldParams, FrameScheduler, GestureClassifier, ParticleField, Pattern,
    PointColor,
};
use instant::Instant;
use rand::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod fetch;
mod source;

use source::JsLandmarkSource;

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[field] wasm module ready");
    Ok(())
}

/// Particle field plus gesture pipeline, driven once per animation frame.
///
/// The page owns the camera, the landmark model and the renderer; it calls
/// [`GestureField::tick`] from `requestAnimationFrame` and reads back
/// `positions()` and the rotation pair.
#[wasm_bindgen]
pub struct GestureField {
    // Shared with in-flight image loads.
    inner: Rc<RefCell<FrameScheduler>>,
    started: Instant,
}

#[wasm_bindgen]
impl GestureField {
    #[wasm_bindgen(constructor)]
    pub fn new(count: Option<usize>, seed: Option<u32>) -> GestureField {
        let params = count.map(FieldParams::with_count).unwrap_or_default();
        let seed = seed.map(u64::from).unwrap_or_else(rand::random);
        let field = ParticleField::new(params, seed);
        Self {
            inner: Rc::new(RefCell::new(FrameScheduler::new(
                GestureClassifier::default(),
                field,
            ))),
            started: Instant::now(),
        }
    }

    /// Advance one frame. `video_time` is the camera's current time (negative
    /// when no camera is available); `detect` is only called when it changed.
    /// Returns whether inference ran.
    pub fn tick(&self, video_time: f64, detect: &js_sys::Function) -> bool {
        let now = self.started.elapsed().as_secs_f64();
        let mut source = JsLandmarkSource::new(video_time, detect);
        self.inner.borrow_mut().tick(Some(&mut source), now)
    }

    /// Live coordinates, three floats per point, same order every frame.
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.inner.borrow().field.positions())
    }

    pub fn rotation_yaw(&self) -> f32 {
        self.inner.borrow().field.rotation().yaw
    }

    pub fn rotation_pitch(&self) -> f32 {
        self.inner.borrow().field.rotation().pitch
    }

    pub fn count(&self) -> usize {
        self.inner.borrow().field.count()
    }

    /// `"rotate"` or `"scale"`.
    pub fn mode(&self) -> String {
        match self.inner.borrow().gesture().mode {
            ControlMode::Rotate => "rotate".into(),
            ControlMode::Scale => "scale".into(),
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.inner.borrow().gesture().scale_factor
    }

    pub fn pattern(&self) -> String {
        self.inner.borrow().field.pattern().to_string()
    }

    /// Switch to a builtin pattern by name. Returns `false` when it was
    /// already active.
    pub fn set_pattern(&self, name: &str) -> Result<bool, JsValue> {
        let pattern: Pattern = name.parse().map_err(to_js)?;
        self.inner
            .borrow_mut()
            .field
            .set_pattern(pattern, None)
            .map_err(to_js)
    }

    /// Fetch an image (URL or data URL) and switch to its silhouette.
    ///
    /// Resolves `true` when applied and `false` when a later pattern request
    /// superseded it. Rejects on fetch or decode failure, leaving the field
    /// unchanged.
    pub fn load_image_pattern(&self, url: String) -> js_sys::Promise {
        // Reserve the ticket now so pattern calls made after this one win.
        let (ticket, params) = {
            let mut scheduler = self.inner.borrow_mut();
            let ticket = scheduler.field.begin_image();
            (ticket, scheduler.field.params().clone())
        };
        let inner = Rc::clone(&self.inner);
        future_to_promise(async move {
            log::info!("[image] loading {} (generation {})", url, ticket.generation);
            let bytes = fetch::fetch_bytes(&url)
                .await
                .inspect_err(|e| log::warn!("[image] `{}` failed: {}", url, e))
                .map_err(to_js)?;
            let mut rng = StdRng::seed_from_u64(ticket.seed);
            let points = pattern::silhouette_from_bytes(&bytes, params.count, &params, &mut rng);
            let applied = inner
                .borrow_mut()
                .field
                .finish_image(ticket, url, points)
                .map_err(to_js)?;
            Ok(JsValue::from_bool(applied))
        })
    }

    /// Set the point colour from `#rrggbb`.
    pub fn set_color(&self, hex: &str) -> Result<(), JsValue> {
        let color: PointColor = hex.parse().map_err(to_js)?;
        self.inner.borrow_mut().field.set_color(color);
        Ok(())
    }

    /// Current point colour as `#rrggbb`.
    pub fn color(&self) -> String {
        self.inner.borrow().field.color().to_string()
    }

    pub fn set_auto_rotate(&self, enabled: bool) {
        self.inner.borrow_mut().field.set_auto_rotate(enabled);
    }
}
