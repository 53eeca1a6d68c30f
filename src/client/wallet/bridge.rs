//! Bindings to the EIP-1193 provider MetaMask injects as `window.ethereum`.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use dioxus_logger::tracing;

use crate::client::{
    error::WalletError,
    wallet::provider::{AccountsFuture, Subscription, WalletProvider},
};

/// Silently lists accounts the site is already authorized for.
const ETH_ACCOUNTS: &str = "eth_accounts";
/// Prompts the user to authorize the site.
const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
const ACCOUNTS_CHANGED: &str = "accountsChanged";

fn property(target: &JsValue, name: &str) -> Result<JsValue, WalletError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| WalletError::UnexpectedResponse(describe(&e)))
}

fn method(target: &JsValue, name: &str) -> Result<Function, WalletError> {
    property(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::UnexpectedResponse(format!("provider.{} is not a function", name)))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn provider() -> Result<Object, WalletError> {
    let window = web_sys::window().ok_or(WalletError::NoWindow)?;
    let ethereum = property(&window, "ethereum")?;

    if ethereum.is_undefined() || ethereum.is_null() {
        return Err(WalletError::ProviderMissing);
    }

    ethereum
        .dyn_into::<Object>()
        .map_err(|_| WalletError::ProviderMissing)
}

/// Converts a rejected `request` promise into a [`WalletError`].
fn rejection(error: JsValue) -> WalletError {
    let code = property(&error, "code").ok().and_then(|code| code.as_f64());

    match code {
        Some(code) => WalletError::Rejected {
            code: code as i64,
            message: describe(&error),
        },
        None => WalletError::UnexpectedResponse(describe(&error)),
    }
}

fn accounts_from(value: &JsValue) -> Result<Vec<String>, WalletError> {
    if !Array::is_array(value) {
        return Err(WalletError::UnexpectedResponse(format!(
            "expected an account list, got {:?}",
            value
        )));
    }

    Ok(Array::from(value)
        .iter()
        .filter_map(|account| account.as_string())
        .collect())
}

async fn request_accounts_with(rpc_method: &str) -> Result<Vec<String>, WalletError> {
    let provider = provider()?;
    let request = method(&provider, "request")?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(rpc_method))
        .map_err(|e| WalletError::UnexpectedResponse(describe(&e)))?;

    let promise = request
        .call1(&provider, &args)
        .map_err(rejection)?
        .dyn_into::<Promise>()
        .map_err(|_| WalletError::UnexpectedResponse("request did not return a promise".to_string()))?;

    let result = JsFuture::from(promise).await.map_err(rejection)?;

    accounts_from(&result)
}

/// The provider MetaMask injects as `window.ethereum`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetaMask;

impl WalletProvider for MetaMask {
    fn accounts(&self) -> AccountsFuture {
        Box::pin(request_accounts_with(ETH_ACCOUNTS))
    }

    fn request_accounts(&self) -> AccountsFuture {
        Box::pin(request_accounts_with(ETH_REQUEST_ACCOUNTS))
    }

    fn subscribe(
        &self,
        mut handler: Box<dyn FnMut(Vec<String>)>,
    ) -> Result<Subscription, WalletError> {
        let provider = provider()?;
        let on = method(&provider, "on")?;
        let event = JsValue::from_str(ACCOUNTS_CHANGED);

        let listener = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            handler(accounts_from(&value).unwrap_or_default());
        });

        on.call2(&provider, &event, listener.as_ref())
            .map_err(|e| WalletError::UnexpectedResponse(describe(&e)))?;

        Ok(Subscription::new(move || {
            let removed = method(&provider, "removeListener").and_then(|remove| {
                remove
                    .call2(&provider, &event, listener.as_ref())
                    .map_err(|e| WalletError::UnexpectedResponse(describe(&e)))
            });

            if let Err(e) = removed {
                tracing::warn!("Failed to remove wallet account listener: {}", e);
            }
        }))
    }
}
