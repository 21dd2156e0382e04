//! Storefront session - the catalog, cart and theme of one shopper session.
//!
//! A [`Storefront`] is constructed once per session with its collaborators
//! injected: a key/value store shared by the cart and the theme, a product
//! gateway, and the color-scheme host. User-facing outcomes are published as
//! [`Notice`]s through an in-process event emitter.

mod notice;
mod session;

pub use notice::{Notice, NoticeLevel, NOTICE_EVENT};
pub use session::{RefreshOutcome, Storefront};
