use thiserror::Error;

/// EIP-1193 code for a request the user declined in the wallet popup.
pub const USER_REJECTED_REQUEST: i64 = 4001;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("No browser window is available")]
    NoWindow,
    #[error("No wallet extension found, install MetaMask to continue")]
    ProviderMissing,
    #[error("Wallet rejected request with code {code}: {message}")]
    Rejected { code: i64, message: String },
    #[error("Unexpected response from wallet: {0}")]
    UnexpectedResponse(String),
}

impl WalletError {
    /// Whether the user dismissed the connection prompt themselves.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::Rejected { code, .. } if *code == USER_REJECTED_REQUEST)
    }
}
