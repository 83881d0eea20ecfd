use std::collections::HashSet;

use anyhow::{anyhow, Result};
use jwt_service::JwtService;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::core::prelude::*;

/// The identity that a token has been issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The id of the user
    sub: String,
    email: String,
    /// The role at the time of login
    role: String,
    /// Issue time as Unix timestamp
    iat: i64,
    /// Expiry time as Unix timestamp
    exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    pub fn email(&self) -> Option<EmailAddress> {
        self.email.parse().ok()
    }

    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    /// A token only stands for the account it has been issued for
    /// as long as its role did not change.
    pub fn matches(&self, user: &User) -> bool {
        self.sub == user.id.as_str()
            && self.email == user.email.as_str()
            && self.role() == Some(user.role)
    }
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(time_valid: Duration) -> Self {
        Self {
            jwt_service: JwtService::new(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = usize::try_from((now + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.as_str().to_owned(),
            role: user.role.to_string(),
            iat: now.unix_timestamp(),
            exp,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        self.jwt_service.decode(token)
    }

    /// Invalidates a token before it expires, e.g. on logout.
    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway.
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new(Duration::days(1))
    }
}

#[cfg(feature = "jwt")]
mod jwt_service {
    use super::{Claims, Result};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    fn generate_secret() -> String {
        STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        pub fn new(secret: &str) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_ref()),
                decoding_key: DecodingKey::from_secret(secret.as_ref()),
            }
        }

        pub fn random() -> Self {
            Self::new(&generate_secret())
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new() -> Self {
            Self { key: Key::random() }
        }

        pub fn encode(&self, claims: &Claims) -> Result<String> {
            Ok(encode(&Header::default(), claims, &self.key.encoding_key)?)
        }

        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(token_data.claims)
        }
    }
}

#[cfg(not(feature = "jwt"))]
mod jwt_service {
    use super::{Claims, Result};
    use anyhow::anyhow;

    pub struct JwtService;

    impl JwtService {
        pub fn new() -> Self {
            Self
        }

        pub fn encode(&self, _claims: &Claims) -> Result<String> {
            Err(anyhow!("JWT support is disabled"))
        }

        pub fn decode(&self, _token: &str) -> Result<Claims> {
            Err(anyhow!("JWT support is disabled"))
        }
    }
}
