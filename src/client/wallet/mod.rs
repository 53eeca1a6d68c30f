//! MetaMask connection state for the CV screens.

pub mod bridge;
#[cfg(test)]
pub mod fake;
pub mod hook;
pub mod provider;

pub use hook::{use_connect, UseConnect};
pub use provider::WalletProvider;

/// Connection state of the browser wallet.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletStatus {
    /// Not yet probed
    #[default]
    Unknown,
    Disconnected,
    /// Waiting for the user to approve the connection prompt
    Connecting,
    Connected(String),
}

impl WalletStatus {
    /// Status from the account list a wallet reported, the first account is active.
    pub fn from_accounts(accounts: &[String]) -> Self {
        match accounts.first() {
            Some(account) => WalletStatus::Connected(account.clone()),
            None => WalletStatus::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn account(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(account) => Some(account),
            _ => None,
        }
    }
}
