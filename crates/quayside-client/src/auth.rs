//! Outbound request authentication.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::token_store::TokenStore;

/// Attaches `Authorization: Bearer <token>` when the store holds a token.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    tokens: TokenStore,
}

impl RequestAuthenticator {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }

    /// Set the authorization header on `headers`.
    ///
    /// Without a token the headers are left untouched. Never fails: a token
    /// that is not a valid header value is skipped. Returns whether a header
    /// was set.
    pub fn authenticate(&self, headers: &mut HeaderMap) -> bool {
        let Some(token) = self.tokens.token() else {
            return false;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
                true
            }
            Err(_) => {
                tracing::warn!("stored token is not a valid header value; sending unauthenticated");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_token_leaves_headers() {
        let auth = RequestAuthenticator::new(TokenStore::in_memory());
        let mut headers = HeaderMap::new();
        assert!(!auth.authenticate(&mut headers));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_bearer_header() {
        let store = TokenStore::in_memory();
        store.set_token("abc.def").unwrap();
        let auth = RequestAuthenticator::new(store);

        let mut headers = HeaderMap::new();
        assert!(auth.authenticate(&mut headers));
        assert_eq!(headers[AUTHORIZATION], "Bearer abc.def");
    }

    #[test]
    fn test_invalid_token_skipped() {
        let store = TokenStore::in_memory();
        store.set_token("bad\ntoken").unwrap();
        let auth = RequestAuthenticator::new(store);

        let mut headers = HeaderMap::new();
        assert!(!auth.authenticate(&mut headers));
        assert!(headers.get(AUTHORIZATION).is_none());
    }
}
