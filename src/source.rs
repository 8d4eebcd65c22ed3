use field_core::{HandLandmarkFrame, LandmarkSource};
use wasm_bindgen::JsValue;

/// Adapts the page's hand-landmark callback to [`LandmarkSource`].
///
/// `detect` is called as `detect(nowMs)` and returns `null` for no hand or
/// an array-like of 63 floats (`x, y, z` for each of the 21 landmarks).
pub struct JsLandmarkSource<'a> {
    video_time: f64,
    detect: &'a js_sys::Function,
}

impl<'a> JsLandmarkSource<'a> {
    /// A negative `video_time` means no camera frame is available.
    pub fn new(video_time: f64, detect: &'a js_sys::Function) -> Self {
        Self { video_time, detect }
    }
}

impl LandmarkSource for JsLandmarkSource<'_> {
    fn frame_stamp(&self) -> Option<f64> {
        (self.video_time >= 0.0).then_some(self.video_time)
    }

    fn detect(&mut self, now_sec: f64) -> Option<HandLandmarkFrame> {
        let result = match self
            .detect
            .call1(&JsValue::NULL, &JsValue::from_f64(now_sec * 1000.0))
        {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[scheduler] detect callback threw: {:?}", e);
                return None;
            }
        };
        if result.is_null() || result.is_undefined() {
            return None;
        }
        let coords = js_sys::Float32Array::new(&result).to_vec();
        HandLandmarkFrame::from_flat(&coords)
            .inspect_err(|e| log::warn!("[scheduler] dropping frame: {}", e))
            .ok()
    }
}
