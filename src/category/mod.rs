//! Capability traits for an ambient category: [`Arrow`] for composition and
//! identities, plus the limit and colimit operations ([`HasInitial`],
//! [`HasPullbacks`], [`HasPushouts`]) that the subobject algebra is computed
//! from.
pub mod limits;
pub mod traits;

pub use limits::*;
pub use traits::*;
