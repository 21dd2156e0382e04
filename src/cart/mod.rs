//! Cart ledger - the ordered list of cart entries and its derived totals.
//!
//! Each add appends one entry, so the same product may appear several times.
//! Every mutation is written through to the key/value store under
//! [`keys::CART`](crate::persistence::keys::CART). Write failures are logged
//! and never roll back the in-memory ledger.

mod ledger;

pub use ledger::CartLedger;
