//! Client-side authentication state.
//!
//! - [`session`]: the [`AuthSession`] store (user, token, authenticated flag)
//!   with explicit `restore` / `persist` against the credential slots.
//! - [`provider`]: the OAuth [`Provider`] name carried by the callback URL.

pub mod provider;
pub mod session;

pub use provider::{callback_params, Provider};
pub use session::{AuthSession, AuthState};
