//! Backend Actor Bindings
//!
//! Typed wrapper over the canister actor built by the page's JS bridge
//! (`window.socialIc`, backed by `@dfinity/agent`), organized by domain.

mod codec;
mod follow;
mod post;
mod profile;

use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::backend::SocialBackend;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Post, Profile, UserSummary};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "socialIc"], js_name = createActor)]
    fn create_actor(canister_id: &str, host: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "socialIc"], js_name = principalFromText)]
    fn principal_from_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Handle bound to the backend canister
///
/// `createActor` resolves only once the agent is usable (on a local replica,
/// after the root key is fetched), so every call awaits `ready` first.
#[derive(Clone, Debug)]
pub struct CanisterActor {
    ready: Promise,
}

impl CanisterActor {
    /// Start building the actor for the configured backend canister
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let pending = create_actor(&config.backend_canister_id, &config.host)
            .map_err(|e| ClientError::Bridge(codec::describe(&e)))?;
        log::info!("Actor bound to canister {} via {}", config.backend_canister_id, config.host);
        Ok(Self::from_pending(Promise::resolve(&pending)))
    }

    /// Actor backed by a promise of the JS actor object
    pub(crate) fn from_pending(ready: Promise) -> Self {
        Self { ready }
    }

    async fn handle(&self) -> ClientResult<JsValue> {
        let handle = JsFuture::from(self.ready.clone())
            .await
            .map_err(|e| ClientError::Bridge(codec::describe(&e)))?;
        if handle.is_null() || handle.is_undefined() {
            return Err(ClientError::Bridge("createActor returned nothing".to_string()));
        }
        Ok(handle)
    }

    /// Invoke `method` with positional candid arguments and await the reply
    pub async fn call(&self, method: &'static str, args: Array) -> ClientResult<JsValue> {
        let handle = self.handle().await?;
        log::debug!("-> {} ({} args)", method, args.length());
        let func = Reflect::get(&handle, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ClientError::call(method, "method not exposed by actor"))?;
        let pending = func
            .apply(&handle, &args)
            .map_err(|e| ClientError::call(method, codec::describe(&e)))?;
        let reply = JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|e| ClientError::call(method, codec::describe(&e)))?;
        log::debug!("<- {}", method);
        Ok(reply)
    }

    fn principal_arg(&self, text: &str) -> ClientResult<JsValue> {
        principal_from_text(text)
            .map_err(|e| ClientError::Encode(format!("`{}` is not a principal: {}", text, codec::describe(&e))))
    }
}

#[async_trait(?Send)]
impl SocialBackend for CanisterActor {
    // ========================
    // Profiles
    // ========================

    async fn create_profile(&self, username: &str, bio: &str) -> ClientResult<bool> {
        let args = Array::of2(&codec::text_arg(username), &codec::text_arg(bio));
        codec::bool(&self.call("createProfile", args).await?)
    }

    async fn get_my_profile(&self) -> ClientResult<Option<Profile>> {
        profile::decode_opt_profile(&self.call("getMyProfile", Array::new()).await?)
    }

    async fn get_profile(&self, user: &str) -> ClientResult<Option<Profile>> {
        let args = Array::of1(&self.principal_arg(user)?);
        profile::decode_opt_profile(&self.call("getProfile", args).await?)
    }

    // ========================
    // Posts
    // ========================

    async fn create_post(&self, content: &str) -> ClientResult<()> {
        self.call("createPost", Array::of1(&codec::text_arg(content))).await?;
        Ok(())
    }

    async fn get_all_posts(&self) -> ClientResult<Vec<Post>> {
        post::decode_posts(&self.call("getAllPosts", Array::new()).await?)
    }

    async fn edit_post(&self, post_id: u64, content: &str) -> ClientResult<()> {
        let args = Array::of2(&codec::nat_arg(post_id), &codec::text_arg(content));
        self.call("editPost", args).await?;
        Ok(())
    }

    async fn delete_post(&self, post_id: u64) -> ClientResult<()> {
        self.call("deletePost", Array::of1(&codec::nat_arg(post_id))).await?;
        Ok(())
    }

    // ========================
    // Comments
    // ========================

    async fn add_comment(&self, post_id: u64, content: &str) -> ClientResult<()> {
        let args = Array::of2(&codec::nat_arg(post_id), &codec::text_arg(content));
        self.call("addComment", args).await?;
        Ok(())
    }

    async fn edit_comment(&self, post_id: u64, comment_id: u64, content: &str) -> ClientResult<()> {
        let args = Array::of3(&codec::nat_arg(post_id), &codec::nat_arg(comment_id), &codec::text_arg(content));
        self.call("editComment", args).await?;
        Ok(())
    }

    async fn delete_comment(&self, post_id: u64, comment_id: u64) -> ClientResult<()> {
        let args = Array::of2(&codec::nat_arg(post_id), &codec::nat_arg(comment_id));
        self.call("deleteComment", args).await?;
        Ok(())
    }

    // ========================
    // Follow graph
    // ========================

    async fn follow_user(&self, target: &str) -> ClientResult<()> {
        self.call("followUser", Array::of1(&self.principal_arg(target)?)).await?;
        Ok(())
    }

    async fn unfollow_user(&self, target: &str) -> ClientResult<()> {
        self.call("unfollowUser", Array::of1(&self.principal_arg(target)?)).await?;
        Ok(())
    }

    async fn is_following(&self, target: &str) -> ClientResult<bool> {
        let reply = self.call("isFollowing", Array::of1(&self.principal_arg(target)?)).await?;
        codec::bool(&reply)
    }

    async fn accept_follow_request(&self, follower: &str) -> ClientResult<()> {
        self.call("acceptFollowRequest", Array::of1(&self.principal_arg(follower)?)).await?;
        Ok(())
    }

    async fn get_followers(&self) -> ClientResult<Vec<UserSummary>> {
        follow::decode_user_summaries(&self.call("getFollowers", Array::new()).await?)
    }

    async fn get_followees(&self) -> ClientResult<Vec<UserSummary>> {
        follow::decode_user_summaries(&self.call("getFollowees", Array::new()).await?)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn actor_with(method: &str, body: &str) -> Object {
        let actor = Object::new();
        Reflect::set(&actor, &method.into(), &Function::new_no_args(body)).unwrap();
        actor
    }

    #[wasm_bindgen_test]
    async fn test_call_waits_for_actor() {
        let actor = actor_with("getFollowers", "return Promise.resolve([]);");
        // Resolves on a later tick, as when the root key is still being fetched
        let delayed = Promise::new(&mut |resolve, _| {
            let later = Function::new_with_args("resolve, actor", "setTimeout(() => resolve(actor), 0);");
            later.call2(&JsValue::NULL, &resolve, &actor).unwrap();
        });
        let backend = CanisterActor::from_pending(delayed);

        let followers = backend.get_followers().await.unwrap();
        assert!(followers.is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_failed_actor_setup_is_bridge_error() {
        let backend = CanisterActor::from_pending(Promise::reject(&"root key unavailable".into()));
        let err = backend.get_my_profile().await.unwrap_err();
        assert!(matches!(err, ClientError::Bridge(ref m) if m == "root key unavailable"));
    }

    #[wasm_bindgen_test]
    async fn test_missing_method_is_call_error() {
        let backend = CanisterActor::from_pending(Promise::resolve(&Object::new()));
        let err = backend.get_all_posts().await.unwrap_err();
        assert!(matches!(err, ClientError::Call { method: "getAllPosts", .. }));
    }

    #[wasm_bindgen_test]
    async fn test_rejected_reply_is_call_error() {
        let actor = actor_with("createPost", "return Promise.reject(new Error('not registered'));");
        let backend = CanisterActor::from_pending(Promise::resolve(&actor));
        let err = backend.create_post("hi").await.unwrap_err();
        assert!(matches!(err, ClientError::Call { ref message, .. } if message == "not registered"));
    }
}
