//! WASM API for notation conversion
//!
//! JavaScript-facing wrappers around `merged_form_gloss`. Records cross the
//! boundary either as JS objects (`serde-wasm-bindgen`) or as a JSON string.
//! The JSON helpers are plain Rust and also usable natively.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::convert::merged_form_gloss_with;
use crate::error::ConversionError;
use crate::models::rules::NotationRules;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("failed to encode records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert and encode the records as a JSON array
pub fn records_json(ur: &str, gl: &str, rules: &NotationRules) -> Result<String, ExportError> {
    let records = merged_form_gloss_with(ur, gl, rules)?;
    Ok(serde_json::to_string(&records)?)
}

// ============================================================================
// Serialization Helpers
// ============================================================================

fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Rules from JS: `undefined`/`null` means the defaults
fn rules_from_js(rules: JsValue) -> Result<NotationRules, JsValue> {
    if rules.is_undefined() || rules.is_null() {
        return Ok(NotationRules::default());
    }
    let rules: NotationRules = deserialize(rules, "Invalid notation rules")?;
    rules.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(rules)
}

// ============================================================================
// Exports
// ============================================================================

/// Convert a form and gloss into an array of `{char, tag, op, span, gloss}`
#[wasm_bindgen(js_name = mergedFormGloss)]
pub fn merged_form_gloss_js(ur: &str, gl: &str, rules: JsValue) -> Result<JsValue, JsValue> {
    let rules = rules_from_js(rules)?;
    let records = merged_form_gloss_with(ur, gl, &rules).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serialize(&records, "Failed to serialize records")
}

#[wasm_bindgen(js_name = mergedFormGlossJson)]
pub fn merged_form_gloss_json_js(ur: &str, gl: &str, rules: JsValue) -> Result<String, JsValue> {
    let rules = rules_from_js(rules)?;
    records_json(ur, gl, &rules).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default notation rules as a JS object
#[wasm_bindgen(js_name = defaultRules)]
pub fn default_rules_js() -> Result<JsValue, JsValue> {
    serialize(&NotationRules::default(), "Failed to serialize rules")
}
