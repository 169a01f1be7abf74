use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A step type that can live in a recipe collection.
///
/// `LABEL` names the collection in acknowledgements and log events.
pub trait StepKind: Serialize + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const LABEL: &'static str;
}

/// A recipe exactly as the caller supplied it.
///
/// The JSON document is kept verbatim: integers stay integers, unknown keys
/// survive, and a recipe whose `steps` is not a list is still a recipe. `S`
/// only tags which collection the document belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Recipe<S> {
    raw: Value,
    #[serde(skip)]
    kind: PhantomData<S>,
}

impl<S: StepKind> Recipe<S> {
    /// Well-formed recipe built from typed steps.
    pub fn from_steps(name: impl Into<String>, steps: Vec<S>) -> Self {
        Self::from_value(json!({ "name": name.into(), "steps": steps }))
    }

    pub fn from_value(raw: Value) -> Self {
        Self { raw, kind: PhantomData }
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    /// `name` when it is a string, otherwise empty.
    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Number of entries in `steps` when it is a list.
    pub fn step_count(&self) -> Option<usize> {
        self.raw.get("steps").and_then(Value::as_array).map(Vec::len)
    }
}

/// One mash phase: ramp to `target_temp`, hold, optionally wait for the operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MashStep {
    pub target_temp: f64,
    pub ramp_rate: f64,
    pub hold_time: f64,
    pub manual_pause: bool,
    pub mixing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end_step: Option<bool>,
}

impl MashStep {
    pub fn new(target_temp: f64, ramp_rate: f64, hold_time: f64, manual_pause: bool) -> Self {
        Self {
            target_temp,
            ramp_rate,
            hold_time,
            manual_pause,
            mixing: true,
            is_end_step: None,
        }
    }

    /// Terminal marker: signals completion rather than a controllable phase.
    pub fn end() -> Self {
        Self { is_end_step: Some(true), ..Self::default() }
    }
}

impl StepKind for MashStep {
    const LABEL: &'static str = "Mash";
}

/// One boil checkpoint; `duration` is minutes remaining when it applies.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoilStep {
    pub duration: f64,
    pub evaporation: f64,
    pub add_hop: bool,
}

impl BoilStep {
    pub fn new(duration: f64, evaporation: f64, add_hop: bool) -> Self {
        Self { duration, evaporation, add_hop }
    }
}

impl StepKind for BoilStep {
    const LABEL: &'static str = "Boil";
}

pub type MashRecipe = Recipe<MashStep>;
pub type BoilRecipe = Recipe<BoilStep>;
