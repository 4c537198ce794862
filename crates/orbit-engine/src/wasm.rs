//! WASM bindings for the web host

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct WasmOrbit {
    engine: crate::engine::OrbitEngine,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WasmOrbit {
    #[wasm_bindgen(constructor)]
    pub fn new(gate_threshold: f64) -> Self {
        let config = crate::engine::EngineConfig {
            gate_threshold,
            ..crate::engine::EngineConfig::default()
        };
        Self {
            engine: crate::engine::OrbitEngine::new(config),
        }
    }

    /// Load a baked plan produced by the `orbit bake` build step
    pub fn load_plan(&mut self, json: &str) -> Result<(), JsValue> {
        self.engine
            .load_plan_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Re-solve from a JSON-encoded parameter set (interactive controls)
    pub fn retune(&mut self, config_json: &str) -> Result<(), JsValue> {
        let params: orbit_plan::PlanConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine.retune(&params);
        Ok(())
    }

    /// Advance to the latest scroll progress.
    ///
    /// Returns a flat array: [x, y, label_opacity] per object, then the
    /// stage offset y, the title opacity, and the forward plan time.
    pub fn advance(&mut self, scroll_progress: f64) -> Vec<f64> {
        let frame = self.engine.advance(scroll_progress);

        let mut out = Vec::with_capacity(frame.objects.len() * 3 + 3);
        for object in &frame.objects {
            out.push(object.position.x);
            out.push(object.position.y);
            out.push(object.label_opacity);
        }
        out.push(frame.stage_offset_y);
        out.push(frame.title_opacity);
        out.push(frame.plan_time);
        out
    }

    /// Restart the scroll session (host component remount)
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
