//! Wallet module - service wiring suppliers to the display pipeline.

mod wallet_service;
mod wallet_traits;


pub use wallet_service::WalletViewService;
pub use wallet_traits::WalletViewServiceTrait;
