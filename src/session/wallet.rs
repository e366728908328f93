use std::fmt::Write as _;
use std::time::Duration;

use rand::Rng;
use tracing::info;

/// Produce a random Ethereum-style address: `0x` followed by 40 hex digits.
/// The address is a display value only and belongs to no real chain.
pub fn generate_wallet_address<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 20] = rng.gen();
    let mut address = String::with_capacity(42);
    address.push_str("0x");
    for b in bytes {
        let _ = write!(address, "{b:02x}");
    }
    address
}

/// Shorten an address for display, e.g. `0x1234…abcd`.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
}

/// Simulated wallet connection behind the "Connect wallet" button.
#[derive(Debug, Clone)]
pub struct WalletSession {
    state: WalletState,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            state: WalletState::Disconnected,
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn address(&self) -> Option<&str> {
        match &self.state {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// "Connect" after `delay`, returning a freshly generated address.
    /// Connecting an already connected session returns the existing address.
    pub async fn connect(&mut self, delay: Duration) -> String {
        if let WalletState::Connected { address } = &self.state {
            return address.clone();
        }
        self.state = WalletState::Connecting;
        tokio::time::sleep(delay).await;

        let address = generate_wallet_address(&mut rand::thread_rng());
        info!(address = %short_address(&address), "wallet connected");
        self.state = WalletState::Connected {
            address: address.clone(),
        };
        address
    }

    pub fn disconnect(&mut self) {
        self.state = WalletState::Disconnected;
    }
}
