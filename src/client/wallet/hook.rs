use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    error::WalletError,
    wallet::{bridge::MetaMask, WalletProvider, WalletStatus},
};

/// Handle returned by [`use_connect`], cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct UseConnect {
    status: Signal<WalletStatus>,
    error: Signal<Option<WalletError>>,
    provider: CopyValue<Rc<dyn WalletProvider>>,
}

impl UseConnect {
    pub fn status(&self) -> WalletStatus {
        self.status.read().clone()
    }

    pub fn connected(&self) -> bool {
        self.status.read().is_connected()
    }

    pub fn account(&self) -> Option<String> {
        self.status.read().account().map(str::to_string)
    }

    /// The last connection failure, cleared when a new attempt starts
    pub fn error(&self) -> Option<WalletError> {
        self.error.read().clone()
    }

    /// Opens the wallet's connection prompt unless one is already pending.
    pub fn connect(&self) {
        let mut status = self.status;
        let mut error = self.error;
        let provider = Rc::clone(&self.provider.read());

        if *status.peek() == WalletStatus::Connecting {
            return;
        }

        status.set(WalletStatus::Connecting);
        error.set(None);

        spawn(async move {
            match provider.request_accounts().await {
                Ok(accounts) => {
                    let connected = WalletStatus::from_accounts(&accounts);
                    tracing::info!("Wallet connection finished: {:?}", connected);
                    status.set(connected);
                }
                Err(e) => {
                    if e.is_user_rejection() {
                        tracing::info!("Wallet connection declined by user");
                    } else {
                        tracing::error!("Failed to connect wallet: {}", e);
                    }
                    error.set(Some(e));
                    status.set(WalletStatus::Disconnected);
                }
            }
        });
    }
}

/// Tracks the wallet account of this page.
///
/// The wallet is probed once on mount without prompting the user and then
/// followed through `accountsChanged` events until the component unmounts.
/// An `Rc<dyn WalletProvider>` in context replaces MetaMask.
pub fn use_connect() -> UseConnect {
    let mut status = use_signal(|| WalletStatus::Unknown);
    let error = use_signal(|| None::<WalletError>);
    let provider = use_hook(|| {
        let provider = try_consume_context::<Rc<dyn WalletProvider>>()
            .unwrap_or_else(|| Rc::new(MetaMask) as Rc<dyn WalletProvider>);
        CopyValue::new(provider)
    });

    let subscription = use_hook(move || {
        let handler = move |accounts: Vec<String>| {
            status.set(WalletStatus::from_accounts(&accounts));
        };

        let subscribed = match provider.read().subscribe(Box::new(handler)) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                tracing::warn!("Not listening for wallet account changes: {}", e);
                None
            }
        };

        Rc::new(RefCell::new(subscribed))
    });

    use_drop(move || {
        drop(subscription.borrow_mut().take());
    });

    use_future(move || async move {
        let probe = provider.read().accounts();
        let probed = match probe.await {
            Ok(accounts) => WalletStatus::from_accounts(&accounts),
            Err(e) => {
                tracing::warn!("Wallet status probe failed: {}", e);
                WalletStatus::Disconnected
            }
        };

        // A prompt opened while probing owns the status now
        if *status.peek() == WalletStatus::Unknown {
            status.set(probed);
        }
    });

    UseConnect {
        status,
        error,
        provider,
    }
}
