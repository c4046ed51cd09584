// WebAssembly bindings for the unit converter
use crate::units::{self, Converter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = UnitConverter)]
pub struct UnitConverterWasm {
    inner: Converter,
}

#[wasm_bindgen(js_class = UnitConverter)]
impl UnitConverterWasm {
    /// Bind a converter to the unit values are stored in
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<UnitConverterWasm, JsValue> {
        let inner = Converter::new(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Canonical name of the stored unit
    #[wasm_bindgen(getter)]
    pub fn base(&self) -> String {
        self.inner.base().to_string()
    }

    /// Dimension name, or undefined for dimensionless units
    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> Option<String> {
        self.inner.dimension().map(|kind| kind.name().to_string())
    }

    #[wasm_bindgen]
    pub fn scale(&self, target: &str) -> Result<f64, JsValue> {
        self.inner
            .scale(target)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn convert(&self, value: f64, target: &str) -> Result<f64, JsValue> {
        self.inner
            .apply(value, target)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Convert a whole data column at once
    #[wasm_bindgen(js_name = convertArray)]
    pub fn convert_array(&self, values: Vec<f64>, target: &str) -> Result<Vec<f64>, JsValue> {
        self.inner
            .apply(values, target)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Unit names to offer in a selector
    #[wasm_bindgen(js_name = compatibleUnits)]
    pub fn compatible_units(&self) -> js_sys::Array {
        self.inner
            .compatible_units()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}

#[wasm_bindgen(js_name = standardizeUnit)]
pub fn standardize_unit(raw: &str) -> String {
    units::standardize(raw)
}
