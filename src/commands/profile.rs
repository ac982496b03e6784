//! Profile Decoding

use wasm_bindgen::JsValue;

use super::codec;
use crate::error::ClientResult;
use crate::models::Profile;

pub fn decode_profile(value: &JsValue) -> ClientResult<Profile> {
    let id = match codec::field(value, "id") {
        Ok(id) => Some(codec::principal(&id)?),
        Err(_) => None,
    };
    Ok(Profile {
        id,
        username: codec::text_field(value, "username")?,
        bio: codec::text_field(value, "bio")?,
    })
}

/// `opt Profile`
pub fn decode_opt_profile(value: &JsValue) -> ClientResult<Option<Profile>> {
    codec::opt(value).map(|p| decode_profile(&p)).transpose()
}
