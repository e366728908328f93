//! Simulated client-side effects: wallet connection and whitepaper upload.

mod upload;
mod wallet;

pub use upload::{upload_whitepaper, UploadPolicy};
pub use wallet::{generate_wallet_address, short_address, WalletSession, WalletState};
