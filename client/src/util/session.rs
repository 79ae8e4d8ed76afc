//! Session token persistence in `localStorage`.
//!
//! The token lives under a single key and survives reloads. Requires a
//! browser environment; on the server nothing is ever stored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use roster::{ApiError, TokenStore};

pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, ApiError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| ApiError::Storage("localStorage is unavailable".to_owned()))
}

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|_| ApiError::Storage("could not write token".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|_| ApiError::Storage("could not remove token".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
