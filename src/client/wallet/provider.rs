use futures::future::LocalBoxFuture;

use crate::client::error::WalletError;

pub type AccountsFuture = LocalBoxFuture<'static, Result<Vec<String>, WalletError>>;

/// Handle to an `accountsChanged` listener, removing it when dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// A browser wallet speaking the EIP-1193 account methods.
///
/// [`MetaMask`](crate::client::wallet::bridge::MetaMask) is used unless an
/// `Rc<dyn WalletProvider>` is found in context.
pub trait WalletProvider {
    /// Accounts already authorized for this site, without showing a prompt
    fn accounts(&self) -> AccountsFuture;

    /// Asks the user to connect, resolving once the prompt is answered
    fn request_accounts(&self) -> AccountsFuture;

    /// Calls `handler` with the new account list whenever the user switches or disconnects accounts.
    fn subscribe(&self, handler: Box<dyn FnMut(Vec<String>)>) -> Result<Subscription, WalletError>;
}
