use super::input::ConversionError;
use super::{convert, convert_value, Case};
use rayon::prelude::*;
use serde_json::Value;

/// Convert every input in parallel. Output order matches input order.
pub fn convert_all<S>(case: Case, inputs: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(%case, count = inputs.len(), "converting batch");
    inputs
        .par_iter()
        .map(|input| convert(case, input.as_ref()))
        .collect()
}

pub fn convert_all_values(case: Case, values: &[Value]) -> Vec<Result<String, ConversionError>> {
    tracing::debug!(%case, count = values.len(), "converting value batch");
    values
        .par_iter()
        .map(|value| convert_value(case, value))
        .collect()
}
