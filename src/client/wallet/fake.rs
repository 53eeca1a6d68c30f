//! In-memory wallet for rendering wallet-aware components in tests.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::client::{
    error::WalletError,
    wallet::provider::{AccountsFuture, Subscription, WalletProvider},
};

type Listener = Box<dyn FnMut(Vec<String>)>;

pub struct FakeWallet {
    authorized: Result<Vec<String>, WalletError>,
    prompt: Result<Vec<String>, WalletError>,
    prompts: Cell<usize>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl FakeWallet {
    /// # Arguments
    /// - `authorized` - Answer to the silent `eth_accounts` status check
    /// - `prompt` - Answer to every connection prompt
    pub fn new(
        authorized: Result<Vec<String>, WalletError>,
        prompt: Result<Vec<String>, WalletError>,
    ) -> Rc<Self> {
        Rc::new(Self {
            authorized,
            prompt,
            prompts: Cell::new(0),
            listener: Rc::new(RefCell::new(None)),
        })
    }

    /// Number of connection prompts opened so far
    pub fn prompts(&self) -> usize {
        self.prompts.get()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Delivers an `accountsChanged` event, returning whether anyone was listening.
    pub fn emit(&self, accounts: Vec<String>) -> bool {
        match self.listener.borrow_mut().as_mut() {
            Some(listener) => {
                listener(accounts);
                true
            }
            None => false,
        }
    }
}

impl WalletProvider for FakeWallet {
    fn accounts(&self) -> AccountsFuture {
        let answer = self.authorized.clone();
        Box::pin(async move { answer })
    }

    fn request_accounts(&self) -> AccountsFuture {
        self.prompts.set(self.prompts.get() + 1);
        let answer = self.prompt.clone();
        Box::pin(async move { answer })
    }

    fn subscribe(&self, handler: Listener) -> Result<Subscription, WalletError> {
        *self.listener.borrow_mut() = Some(handler);

        let listener = self.listener.clone();
        Ok(Subscription::new(move || {
            listener.borrow_mut().take();
        }))
    }
}
