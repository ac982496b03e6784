//! Follow Graph Decoding

use wasm_bindgen::JsValue;

use super::codec;
use crate::error::ClientResult;
use crate::models::UserSummary;

pub fn decode_user_summary(value: &JsValue) -> ClientResult<UserSummary> {
    Ok(UserSummary {
        id: codec::principal_field(value, "id")?,
        username: codec::text_field(value, "username")?,
    })
}

pub fn decode_user_summaries(value: &JsValue) -> ClientResult<Vec<UserSummary>> {
    codec::vec(value, decode_user_summary)
}
