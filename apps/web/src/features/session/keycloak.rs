//! `keycloak-js` bindings. The adapter script is loaded by `index.html` and exposes
//! a global `Keycloak` constructor; this module wraps it as an [`IdentityProvider`].

use super::store::{IdentityProvider, InitOptions};
use crate::app_lib::{AppConfig, AppError};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Keycloak)]
    type KeycloakJs;

    #[wasm_bindgen(constructor, js_class = "Keycloak", catch)]
    fn new(config: &JsValue) -> Result<KeycloakJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Keycloak", catch)]
    fn init(this: &KeycloakJs, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_class = "Keycloak", catch)]
    fn login(this: &KeycloakJs) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_class = "Keycloak", catch)]
    fn logout(this: &KeycloakJs) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, getter, js_class = "Keycloak")]
    fn token(this: &KeycloakJs) -> Option<String>;

    #[wasm_bindgen(method, js_class = "Keycloak", js_name = createAccountUrl, catch)]
    fn create_account_url(this: &KeycloakJs) -> Result<String, JsValue>;
}

pub struct KeycloakProvider {
    inner: KeycloakJs,
}

impl KeycloakProvider {
    /// Instantiates the adapter for the configured realm and client.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let settings = object(&[
            ("url", JsValue::from_str(&config.auth_url)),
            ("realm", JsValue::from_str(&config.auth_realm)),
            ("clientId", JsValue::from_str(&config.auth_client_id)),
        ])?;

        let inner = KeycloakJs::new(&settings).map_err(|err| {
            AppError::Config(format!("Identity provider is unavailable: {}", describe(&err)))
        })?;
        Ok(Self { inner })
    }
}

impl IdentityProvider for KeycloakProvider {
    async fn init(&self, options: &InitOptions) -> Result<bool, AppError> {
        let on_load = if options.require_login {
            "login-required"
        } else {
            "check-sso"
        };
        let mut entries = vec![
            ("onLoad", JsValue::from_str(on_load)),
            ("checkLoginIframe", JsValue::from_bool(options.check_login_iframe)),
        ];
        if let Some(method) = options.pkce_method {
            entries.push(("pkceMethod", JsValue::from_str(method)));
        }

        let promise = self.inner.init(&object(&entries)?).map_err(handshake_error)?;
        let authenticated = JsFuture::from(promise).await.map_err(handshake_error)?;
        Ok(authenticated.as_bool().unwrap_or(false))
    }

    async fn login(&self) -> Result<(), AppError> {
        let promise = self.inner.login().map_err(handshake_error)?;
        JsFuture::from(promise).await.map_err(handshake_error)?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), AppError> {
        let promise = self.inner.logout().map_err(handshake_error)?;
        JsFuture::from(promise).await.map_err(handshake_error)?;
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    fn account_url(&self) -> Option<String> {
        self.inner.create_account_url().ok()
    }
}

fn object(entries: &[(&str, JsValue)]) -> Result<JsValue, AppError> {
    let target = Object::new();
    for (key, value) in entries {
        Reflect::set(&target, &JsValue::from_str(key), value).map_err(|err| {
            AppError::Config(format!(
                "Failed to build identity provider options: {}",
                describe(&err)
            ))
        })?;
    }
    Ok(target.into())
}

fn handshake_error(err: JsValue) -> AppError {
    AppError::Handshake(describe(&err))
}

fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("error"))
                .ok()
                .and_then(|inner| inner.as_string())
        })
        .unwrap_or_else(|| "identity provider error".to_string())
}
