//! Account identity and classification.
//!
//! This module provides the types for the accounts a brief is built over:
//! - [`Account`]: an email address paired with its classification
//! - [`AccountKind`]: the personal/work tag derived from the address domain
//! - [`classify`]: the domain-based classification function

use serde::{Deserialize, Serialize};

/// Consumer mail domains whose accounts classify as personal.
///
/// Fixed at compile time; never mutated after initialization.
pub const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "naver.com",
    "daum.net",
    "hanmail.net",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "kakao.com",
    "nate.com",
];

/// The personal/work classification of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// An account on a consumer mail domain.
    Personal,
    /// Any other account.
    Work,
}

impl AccountKind {
    /// Returns the wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
        }
    }
}

/// A resolved account to query.
///
/// Created once per invocation from explicit flags, discovery, or the
/// config file; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's email address.
    pub email: String,
    /// The account's classification.
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

impl Account {
    /// Creates an account with an explicit classification.
    pub fn new(email: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            email: email.into(),
            kind,
        }
    }

    /// Creates an account classified from its own domain.
    pub fn classified(email: impl Into<String>) -> Self {
        let email = email.into();
        let kind = classify(&email);
        Self { email, kind }
    }
}

/// Classifies an email address by its domain part.
///
/// The domain is compared case-insensitively against [`PERSONAL_DOMAINS`].
/// Addresses without a domain part classify as work rather than failing.
pub fn classify(email: &str) -> AccountKind {
    let Some((_, domain)) = email.split_once('@') else {
        return AccountKind::Work;
    };
    if PERSONAL_DOMAINS.iter().any(|d| domain.eq_ignore_ascii_case(d)) {
        AccountKind::Personal
    } else {
        AccountKind::Work
    }
}
