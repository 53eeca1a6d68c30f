//! Blocks the CV screens until MetaMask reports a connected account.

use dioxus::prelude::*;

use crate::{
    client::{
        components::{Button, ButtonHeight, ButtonStyle, ButtonWidth},
        i18n::wallet::{CONNECT, CONNECTING},
        util::use_persistent_state,
        wallet::{use_connect, UseConnect, WalletStatus},
    },
    config::WALLET_CONNECTED_KEY,
};

/// Next step for the gate after the wallet status changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalletAction {
    /// Status is still settling
    Wait,
    /// Store whether the wallet is connected for the next visit
    Remember(bool),
    /// Reopen the connection prompt for a wallet connected on an earlier visit
    AutoConnect,
}

/// Reconciles the live wallet status with the flag remembered from earlier visits.
///
/// # Arguments
/// - `previously_connected` - Flag persisted in local storage
/// - `auto_attempted` - Whether this visit already tried reconnecting on its own
/// - `status` - Current wallet status
pub fn reconcile(
    previously_connected: bool,
    auto_attempted: bool,
    status: &WalletStatus,
) -> WalletAction {
    match status {
        WalletStatus::Unknown | WalletStatus::Connecting => WalletAction::Wait,
        WalletStatus::Connected(_) => WalletAction::Remember(true),
        WalletStatus::Disconnected if previously_connected && !auto_attempted => {
            WalletAction::AutoConnect
        }
        WalletStatus::Disconnected => WalletAction::Remember(false),
    }
}

#[component]
pub fn WalletGate(children: Element) -> Element {
    let wallet = use_connect();
    let mut connected_before = use_persistent_state(WALLET_CONNECTED_KEY, || false);
    let mut auto_attempted = use_signal(|| false);

    use_context_provider::<UseConnect>(|| wallet);

    use_effect(move || {
        let status = wallet.status();
        let previously_connected = *connected_before.peek();
        let attempted = *auto_attempted.peek();

        match reconcile(previously_connected, attempted, &status) {
            WalletAction::Wait => {}
            WalletAction::Remember(connected) => {
                if connected != previously_connected {
                    connected_before.set(connected);
                }
            }
            WalletAction::AutoConnect => {
                auto_attempted.set(true);
                wallet.connect();
            }
        }
    });

    if wallet.connected() {
        return rsx!({ children });
    }

    let pending = matches!(
        wallet.status(),
        WalletStatus::Unknown | WalletStatus::Connecting
    );
    let error = wallet
        .error()
        .filter(|e| !e.is_user_rejection())
        .map(|e| e.to_string());

    rsx!(
        div { class: "min-h-screen pt-[64px] flex flex-col items-center justify-center gap-4",
            if pending {
                p { class: "text-sm", "{CONNECTING}" }
            }
            Button {
                text: CONNECT,
                width: ButtonWidth::Auto,
                height: ButtonHeight::Big,
                variant: ButtonStyle::Filled,
                loading: pending,
                onclick: move |_| wallet.connect(),
            }
            if let Some(message) = error {
                p { class: "text-error text-sm", "{message}" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> WalletStatus {
        WalletStatus::Connected("0x5aeda56215b167893e80b4fe645ba6d5bab767de".to_string())
    }

    mod reconcile {
        use super::*;

        /// Expected: `Wait` while probing or prompting, whatever was remembered
        #[test]
        fn waits_while_status_settles() {
            for previously in [false, true] {
                assert_eq!(
                    reconcile(previously, false, &WalletStatus::Unknown),
                    WalletAction::Wait
                );
                assert_eq!(
                    reconcile(previously, true, &WalletStatus::Connecting),
                    WalletAction::Wait
                );
            }
        }

        /// Verifies a connected wallet is remembered.
        #[test]
        fn remembers_connection() {
            assert_eq!(
                reconcile(false, false, &connected()),
                WalletAction::Remember(true)
            );
        }

        /// Verifies a wallet connected on an earlier visit is reconnected once.
        #[test]
        fn auto_connects_once() {
            assert_eq!(
                reconcile(true, false, &WalletStatus::Disconnected),
                WalletAction::AutoConnect
            );
            assert_eq!(
                reconcile(true, true, &WalletStatus::Disconnected),
                WalletAction::Remember(false)
            );
        }

        /// Expected: a never-connected wallet stays disconnected without prompting
        #[test]
        fn never_connected_stays_disconnected() {
            assert_eq!(
                reconcile(false, false, &WalletStatus::Disconnected),
                WalletAction::Remember(false)
            );
        }
    }

    mod wallet_gate {
        use std::{rc::Rc, time::Duration};

        use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

        use super::*;
        use crate::client::{
            error::WalletError,
            util::persistence::{KeyValueStore, MemoryStore},
            wallet::{fake::FakeWallet, WalletProvider},
        };

        const ACCOUNT: &str = "0x5aeda56215b167893e80b4fe645ba6d5bab767de";

        fn GatedPage() -> Element {
            rsx!(
                WalletGate {
                    p { "CV list" }
                }
            )
        }

        fn mount(wallet: &Rc<FakeWallet>, store: &Rc<MemoryStore>) -> VirtualDom {
            let mut dom = VirtualDom::new(GatedPage)
                .with_root_context(wallet.clone() as Rc<dyn WalletProvider>)
                .with_root_context(store.clone() as Rc<dyn KeyValueStore>);
            dom.rebuild_in_place();
            dom
        }

        /// Runs effects, futures and spawned tasks until nothing is left to do.
        async fn settle(dom: &mut VirtualDom) {
            for _ in 0..20 {
                let _ = tokio::time::timeout(Duration::from_millis(5), dom.wait_for_work()).await;
                dom.render_immediate(&mut NoOpMutations);
            }
        }

        fn remembered(store: &MemoryStore) -> Option<String> {
            store.get(WALLET_CONNECTED_KEY)
        }

        /// Expected: a wallet remembered from an earlier visit but not authorized
        /// now gets exactly one prompt, and the flag survives the reconnect
        #[tokio::test]
        async fn reconnects_remembered_wallet_once() {
            let wallet = FakeWallet::new(Ok(vec![]), Ok(vec![ACCOUNT.to_string()]));
            let store = Rc::new(MemoryStore::default());
            store.set(WALLET_CONNECTED_KEY, "true").unwrap();

            let mut dom = mount(&wallet, &store);
            settle(&mut dom).await;

            assert_eq!(wallet.prompts(), 1);
            assert_eq!(remembered(&store).as_deref(), Some("true"));
        }

        /// Expected: declining the automatic prompt forgets the wallet instead of prompting again
        #[tokio::test]
        async fn forgets_wallet_after_declined_reconnect() {
            let declined = WalletError::Rejected {
                code: crate::client::error::wallet::USER_REJECTED_REQUEST,
                message: "User rejected the request.".to_string(),
            };
            let wallet = FakeWallet::new(Ok(vec![]), Err(declined));
            let store = Rc::new(MemoryStore::default());
            store.set(WALLET_CONNECTED_KEY, "true").unwrap();

            let mut dom = mount(&wallet, &store);
            settle(&mut dom).await;

            assert_eq!(wallet.prompts(), 1);
            assert_eq!(remembered(&store).as_deref(), Some("false"));
        }

        /// Expected: no prompt opens for a wallet that was never connected
        #[tokio::test]
        async fn never_prompts_unknown_wallet() {
            let wallet = FakeWallet::new(Ok(vec![]), Ok(vec![ACCOUNT.to_string()]));
            let store = Rc::new(MemoryStore::default());

            let mut dom = mount(&wallet, &store);
            settle(&mut dom).await;

            assert_eq!(wallet.prompts(), 0);
            assert_eq!(remembered(&store).as_deref(), Some("false"));
        }

        /// Expected: an already authorized wallet is remembered without a prompt
        #[tokio::test]
        async fn remembers_authorized_wallet() {
            let wallet = FakeWallet::new(Ok(vec![ACCOUNT.to_string()]), Ok(vec![]));
            let store = Rc::new(MemoryStore::default());

            let mut dom = mount(&wallet, &store);
            settle(&mut dom).await;

            assert_eq!(wallet.prompts(), 0);
            assert_eq!(remembered(&store).as_deref(), Some("true"));
        }

        /// Expected: account changes reach the gate while mounted, and the
        /// listener is removed once the gate unmounts
        #[tokio::test]
        async fn stops_listening_after_unmount() {
            let wallet = FakeWallet::new(Ok(vec![]), Ok(vec![]));
            let store = Rc::new(MemoryStore::default());

            let mut dom = mount(&wallet, &store);
            settle(&mut dom).await;
            assert!(wallet.has_listener());

            assert!(dom.in_runtime(|| wallet.emit(vec![ACCOUNT.to_string()])));
            settle(&mut dom).await;
            assert_eq!(remembered(&store).as_deref(), Some("true"));

            drop(dom);

            assert!(!wallet.has_listener());
            assert!(!wallet.emit(vec![]));
        }
    }
}
