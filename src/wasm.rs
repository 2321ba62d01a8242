//! WebAssembly bindings for the `coordsparser` crate.

use crate::{Coordinate, Error, Notation};
use wasm_bindgen::prelude::*;

/// Convert the result of a parse into something that can be handed to JavaScript. Coordinates
/// are serialized as `{ latitude, longitude }` objects and errors as strings.
fn to_js(result: Result<Coordinate, Error>) -> Result<JsValue, JsValue> {
    match result {
        Ok(coord) => match JsValue::from_serde(&coord) {
            Ok(v) => Ok(v),
            Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
        },
        Err(e) => Err(JsValue::from_str(&format!("Unable to parse coordinates: {}", e))),
    }
}

/// Parse a coordinate string in any of the supported notations.
#[wasm_bindgen]
pub fn parse_coordinates(s: &str) -> Result<JsValue, JsValue> {
    to_js(crate::parse(s))
}

/// Parse a coordinate string in the given notation (`D`, `HD`, `HDM` or `HDMS`).
#[wasm_bindgen]
pub fn parse_coordinates_as(notation: &str, s: &str) -> Result<JsValue, JsValue> {
    match notation.parse::<Notation>() {
        Ok(notation) => to_js(notation.parse(s)),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}
