//! Post and Comment Decoding

use wasm_bindgen::JsValue;

use super::codec;
use crate::error::ClientResult;
use crate::models::{Comment, Post};

pub fn decode_comment(value: &JsValue) -> ClientResult<Comment> {
    Ok(Comment {
        id: codec::nat_field(value, "id")?,
        author: codec::principal_field(value, "author")?,
        content: codec::text_field(value, "content")?,
    })
}

pub fn decode_post(value: &JsValue) -> ClientResult<Post> {
    // A post without a comment list renders with none
    let comments = match codec::field(value, "comments") {
        Ok(list) => codec::vec(&list, decode_comment)?,
        Err(_) => Vec::new(),
    };
    Ok(Post {
        id: codec::nat_field(value, "id")?,
        author: codec::principal_field(value, "author")?,
        content: codec::text_field(value, "content")?,
        timestamp: codec::nat_field(value, "timestamp")?,
        comments,
    })
}

pub fn decode_posts(value: &JsValue) -> ClientResult<Vec<Post>> {
    codec::vec(value, decode_post)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::{Array, BigInt, Object, Reflect};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn set(record: &Object, name: &str, value: JsValue) {
        Reflect::set(record, &name.into(), &value).unwrap();
    }

    fn post_record() -> Object {
        let record = Object::new();
        set(&record, "id", BigInt::from(3u64).into());
        set(&record, "author", "2vxsx-fae".into());
        set(&record, "content", "first".into());
        set(&record, "timestamp", BigInt::from(1_700_000_000_000_000_000u64).into());
        record
    }

    #[wasm_bindgen_test]
    fn test_decode_post_without_comments() {
        let post = decode_post(&post_record().into()).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.author, "2vxsx-fae");
        assert_eq!(post.timestamp, 1_700_000_000_000_000_000);
        assert!(post.comments.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_decode_post_with_comments() {
        let comment = Object::new();
        set(&comment, "id", BigInt::from(9u64).into());
        set(&comment, "author", "aaaaa-aa".into());
        set(&comment, "content", "nice".into());
        let record = post_record();
        set(&record, "comments", Array::of1(&comment).into());

        let posts = decode_posts(&Array::of1(&record).into()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].comments.len(), 1);
        assert_eq!(posts[0].comments[0].id, 9);
        assert_eq!(posts[0].comments[0].content, "nice");
    }

    #[wasm_bindgen_test]
    fn test_decode_post_bad_comment_fails() {
        let record = post_record();
        set(&record, "comments", Array::of1(&"oops".into()).into());
        assert!(decode_post(&record.into()).is_err());
    }
}
