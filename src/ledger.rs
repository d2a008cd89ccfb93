// Concurrent NFT Ledger
// Per-token locking via DashMap + one RwLock per record: mutations on
// different tokens never block each other, while each operation on a
// single token runs its whole read-check-write sequence under that
// token's write lock. Registry structural changes only take the narrow
// creation-order index lock.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use dashmap::DashMap;
use log::{debug, trace};

use crate::error::{NftError, NftResult};
use crate::operations;
use crate::types::{Address, Token, TokenId};

pub use crate::operations::CreateParams;

/// Shared registry of token records.
///
/// Callers construct and own an instance; there is no ambient global
/// state. All operations are synchronous and either fully commit or fully
/// fail, leaving the ledger identical to its pre-call state on error.
pub struct Ledger {
    /// Token records, one lock per record
    tokens: DashMap<TokenId, Arc<RwLock<Token>>>,

    /// Token ids in creation order, for snapshot listings
    index: Mutex<Vec<TokenId>>,

    /// Creation nonce folded into id derivation, so repeated creations
    /// with identical inputs still get distinct ids
    nonce: AtomicU64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
            index: Mutex::new(Vec::new()),
            nonce: AtomicU64::new(0),
        }
    }

    // ========================================
    // Registry Operations
    // ========================================

    /// Create a new token
    ///
    /// Allocates a unique id, seeds one unit to the owner (creation counts
    /// as the first mint) and publishes the record. On success the token
    /// is immediately visible to `get_nft` and `get_nfts`.
    pub fn create_nft(&self, params: CreateParams) -> NftResult<Token> {
        // Step 1: Validate before allocating an id
        params.validate()?;

        // Step 2: Derive a unique id. The nonce makes collisions
        // unreachable in practice; re-derive if one ever occurs.
        let mut id = self.derive_token_id(&params);
        while self.tokens.contains_key(&id) {
            id = self.derive_token_id(&params);
        }

        // Step 3: Build the record
        let token = operations::create(id, params)?;

        // Step 4: Publish. The map insert comes first so the index never
        // references a missing record.
        self.tokens.insert(id, Arc::new(RwLock::new(token.clone())));
        lock_index(&self.index).push(id);

        debug!("created token {} ({})", id, token.name);
        Ok(token)
    }

    /// Get a snapshot of a token record
    pub fn get_nft(&self, id: &TokenId) -> NftResult<Token> {
        let lock = self.token_lock(id)?;
        let token = read_token(&lock);
        Ok(token.clone())
    }

    /// Get snapshots of all tokens, in creation order.
    ///
    /// Re-derived from current state on every call; not a live view.
    pub fn get_nfts(&self) -> Vec<Token> {
        // Snapshot the order first, then read records outside the index lock
        let ids: Vec<TokenId> = lock_index(&self.index).clone();

        ids.iter()
            .filter_map(|id| {
                self.tokens
                    .get(id)
                    .map(|entry| read_token(entry.value()).clone())
            })
            .collect()
    }

    /// Check if a token id is registered
    pub fn exists(&self, id: &TokenId) -> bool {
        self.tokens.contains_key(id)
    }

    /// Number of registered tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // ========================================
    // Balance Operations
    // ========================================

    /// Mint one unit of a token to a recipient
    pub fn mint(&self, id: &TokenId, to: &Address) -> NftResult<Token> {
        let lock = self.token_lock(id)?;
        let mut token = write_token(&lock);
        operations::mint(&mut token, to)?;

        trace!("minted 1 unit of token {} to {}", id, to);
        Ok(token.clone())
    }

    /// Burn one unit of a token from a holder
    pub fn burn(&self, id: &TokenId, from: &Address) -> NftResult<Token> {
        let lock = self.token_lock(id)?;
        let mut token = write_token(&lock);
        operations::burn(&mut token, from)?;

        trace!("burned 1 unit of token {} from {}", id, from);
        Ok(token.clone())
    }

    /// Transfer one unit of a token between two addresses
    pub fn transfer(&self, id: &TokenId, from: &Address, to: &Address) -> NftResult<Token> {
        let lock = self.token_lock(id)?;
        let mut token = write_token(&lock);
        operations::transfer(&mut token, from, to)?;

        trace!("transferred 1 unit of token {} from {} to {}", id, from, to);
        Ok(token.clone())
    }

    /// Get the quantity of a token held by an address (0 if never seen)
    pub fn balance_of(&self, id: &TokenId, address: &Address) -> NftResult<u64> {
        let lock = self.token_lock(id)?;
        let token = read_token(&lock);
        Ok(token.balance_of(address))
    }

    // ========================================
    // Creator Index
    // ========================================

    /// Get the address that created a token.
    ///
    /// Recorded at creation and never mutated afterwards, regardless of
    /// subsequent transfers, mints or burns.
    pub fn creator_of(&self, id: &TokenId) -> NftResult<Address> {
        let lock = self.token_lock(id)?;
        let token = read_token(&lock);
        Ok(token.creator.clone())
    }

    /// Get the (minted, burned) counters of a token
    pub fn supply(&self, id: &TokenId) -> NftResult<(u64, u64)> {
        let lock = self.token_lock(id)?;
        let token = read_token(&lock);
        Ok((token.minted, token.burned))
    }

    // ========================================
    // Internals
    // ========================================

    /// Look up the lock of a token record.
    /// The Arc is cloned out so the registry shard is released before the
    /// record lock is taken.
    fn token_lock(&self, id: &TokenId) -> NftResult<Arc<RwLock<Token>>> {
        self.tokens
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(NftError::NotFound)
    }

    /// Derive a token id from the creation inputs and the next nonce
    fn derive_token_id(&self, params: &CreateParams) -> TokenId {
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);

        let mut hasher = blake3::Hasher::new();
        hasher.update(params.owner.as_str().as_bytes());
        hasher.update(params.name.as_bytes());
        hasher.update(params.symbol.as_bytes());
        hasher.update(&nonce.to_le_bytes());

        TokenId::new(hasher.finalize().into())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned lock only means another thread panicked mid-read or with a
// consistent record state (operations never unwind between writes), so
// recover the guard instead of wedging the ledger.

fn lock_index(index: &Mutex<Vec<TokenId>>) -> MutexGuard<'_, Vec<TokenId>> {
    match index.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn read_token(lock: &RwLock<Token>) -> RwLockReadGuard<'_, Token> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_token(lock: &RwLock<Token>) -> RwLockWriteGuard<'_, Token> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
