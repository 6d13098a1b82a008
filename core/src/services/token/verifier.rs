//! Token verifier: structure, algorithm allow-list, signature and expiry checks

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::token::{Claims, SigningDomain};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Header algorithms accepted for verification (HMAC family only)
///
/// Checked against the raw header string before any MAC comparison, so
/// `none` and asymmetric algorithms never reach key handling.
pub const ACCEPTED_ALGORITHMS: &[(&str, Algorithm)] = &[
    ("HS256", Algorithm::HS256),
    ("HS384", Algorithm::HS384),
    ("HS512", Algorithm::HS512),
];

/// Only `alg` is read from the header; key hints are ignored.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Verifies credentials against the secret of their signing domain
#[derive(Clone)]
pub struct TokenVerifier {
    access_secret: Vec<u8>,
    refresh_secret: Vec<u8>,
}

impl TokenVerifier {
    /// Creates a verifier for both signing domains
    ///
    /// # Returns
    ///
    /// The verifier, or a validation error for an empty secret
    pub fn new(config: &TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self {
            access_secret: config.secret_for(SigningDomain::Access).to_vec(),
            refresh_secret: config.secret_for(SigningDomain::Refresh).to_vec(),
        })
    }

    /// Verifies `token` as a credential of `domain`
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and not expired
    /// * `Err(TokenError::Malformed)` - Not a three-part token or unreadable header/claims
    /// * `Err(TokenError::AlgorithmMismatch)` - Header declares a non-HMAC algorithm
    /// * `Err(TokenError::SignatureMismatch)` - MAC does not match the domain secret
    /// * `Err(TokenError::Expired)` - `exp` is in the past
    pub fn verify(&self, token: &str, domain: SigningDomain) -> Result<Claims, TokenError> {
        let secret = match domain {
            SigningDomain::Access => &self.access_secret,
            SigningDomain::Refresh => &self.refresh_secret,
        };
        verify_token(token, secret).map_err(|e| {
            debug!("Rejected {} token: {}", domain, e);
            e
        })
    }
}

/// Verifies `token` against a raw domain secret
///
/// An empty secret never verifies anything and reports `SignatureMismatch`.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let algorithm = accepted_algorithm(token)?;
    if secret.is_empty() {
        return Err(TokenError::SignatureMismatch);
    }

    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch {
                algorithm: format!("{:?}", algorithm),
            },
            _ => TokenError::Malformed,
        })
}

/// Reads the header's declared algorithm and checks it against the allow-list
fn accepted_algorithm(token: &str) -> Result<Algorithm, TokenError> {
    let mut segments = token.split('.');
    let parts = (segments.next(), segments.next(), segments.next(), segments.next());
    let (header, payload) = match parts {
        (Some(header), Some(payload), Some(_signature), None)
            if !header.is_empty() && !payload.is_empty() =>
        {
            (header, payload)
        }
        _ => return Err(TokenError::Malformed),
    };
    if URL_SAFE_NO_PAD.decode(payload).is_err() {
        return Err(TokenError::Malformed);
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| TokenError::Malformed)?;
    let raw: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;

    ACCEPTED_ALGORITHMS
        .iter()
        .find(|(name, _)| *name == raw.alg)
        .map(|(_, alg)| *alg)
        .ok_or(TokenError::AlgorithmMismatch { algorithm: raw.alg })
}

/// Extracts the credential from an `Authorization` header value
///
/// The header must be exactly two whitespace-separated parts; the first
/// (the scheme) is ignored and the second returned.
pub fn extract_bearer(header: &str) -> Result<&str, TokenError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_scheme), Some(token), None) => Ok(token),
        _ => Err(TokenError::MissingToken),
    }
}
