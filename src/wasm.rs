//! JavaScript bindings.
//!
//! Inputs and outputs cross the boundary as plain JS objects with
//! camelCase fields, matching the serde derives on the model types.

use wasm_bindgen::prelude::*;

use crate::allocation::{self, Strategy};
use crate::eligibility::EligibilityFilter;
use crate::models::{Candidate, RunResult, SlotType};
use crate::report::{preference_demand, RunSummary};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `allocate(candidates, slotTypes, strategy)` where strategy is `"greedy"` or `"stable"`.
#[wasm_bindgen(js_name = allocate)]
pub fn allocate_js(
    candidates: JsValue,
    slot_types: JsValue,
    strategy: &str,
) -> Result<JsValue, JsValue> {
    let strategy: Strategy = strategy.parse().map_err(to_js_error)?;
    let candidates: Vec<Candidate> = serde_wasm_bindgen::from_value(candidates)?;
    let slot_types: Vec<SlotType> = serde_wasm_bindgen::from_value(slot_types)?;

    let result = allocation::allocate(&candidates, &slot_types, strategy);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Aggregate statistics of a result returned by `allocate`.
#[wasm_bindgen(js_name = summarize)]
pub fn summarize_js(result: JsValue) -> Result<JsValue, JsValue> {
    let result: RunResult = serde_wasm_bindgen::from_value(result)?;
    Ok(serde_wasm_bindgen::to_value(&RunSummary::from_result(&result))?)
}

/// Explains whether one candidate qualifies for one slot type.
#[wasm_bindgen(js_name = checkEligibility)]
pub fn check_eligibility_js(candidate: JsValue, slot_type: JsValue) -> Result<JsValue, JsValue> {
    let candidate: Candidate = serde_wasm_bindgen::from_value(candidate)?;
    let slot_type: SlotType = serde_wasm_bindgen::from_value(slot_type)?;

    let verdict = EligibilityFilter::check(&candidate, &slot_type, slot_type.usable_capacity());
    Ok(serde_wasm_bindgen::to_value(&verdict)?)
}

/// Per-slot-type demand within the first `depth` preferences.
#[wasm_bindgen(js_name = preferenceDemand)]
pub fn preference_demand_js(
    candidates: JsValue,
    slot_types: JsValue,
    depth: usize,
) -> Result<JsValue, JsValue> {
    let candidates: Vec<Candidate> = serde_wasm_bindgen::from_value(candidates)?;
    let slot_types: Vec<SlotType> = serde_wasm_bindgen::from_value(slot_types)?;

    let demand = preference_demand(&candidates, &slot_types, depth);
    Ok(serde_wasm_bindgen::to_value(&demand)?)
}
