//! Records persisted in the local store.
//!
//! Each record has an explicit schema. Records that fail to decode are
//! replaced by their defaults when read (see [`crate::store::Store::read`]).

pub mod cart;
pub mod session;
pub mod user;

pub use cart::{CartLine, badge_count};
pub use session::{Session, UserSummary};
pub use user::User;
