// Native NFT Ledger Engine
// This crate provides the accounting core of an NFT contract: a token
// registry, a per-token balance ledger and a creator index behind one
// concurrent `Ledger` type.
//
// Features:
// - Token creation with optional lifetime mint ceiling
// - Mint / burn / transfer of fungible-like units per token id
// - Opaque, byte-identical metadata round-trip
// - Per-token atomicity: rejected operations leave no partial state
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Token, TokenId, Address)
// - operations: Per-token state machine (create, mint, burn, transfer)
// - ledger: Concurrent registry and the host-facing operation surface
// - api: Boundary serialization views

mod api;
mod error;
mod ledger;
pub mod operations;
mod types;

pub use api::*;
pub use error::*;
pub use ledger::*;
pub use types::*;
