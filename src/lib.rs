//! # Canopy SDK
//!
//! A Rust client SDK for the Canopy content-graph protocol: user-initiated
//! mutations signed off-chain and submitted through a gasless relay, with a
//! direct on-chain fallback.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, signing and contract types,
//!    unified errors
//! 2. **HTTP API** — `CanopyHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `CanopyClient` with session state (nonce
//!    tracking, in-flight guards) and nested sub-clients
//!
//! The wallet ([`TypedDataSigner`](signing::TypedDataSigner)) and node
//! ([`HubContract`](contract::HubContract)) are trait seams implemented by
//! the embedding application.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use canopy_sdk::prelude::*;
//!
//! let client = CanopyClient::builder()
//!     .base_url("https://api.canopy.social")
//!     .build()?;
//!
//! let receipt = client
//!     .profiles()
//!     .set_profile_image(&profile, "ipfs://bafy...", &wallet, &hub)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Typed-data payloads, the wallet seam, signature splitting.
pub mod signing;

/// Direct hub-contract interaction: call input shapes, the node seam.
pub mod contract;

/// Publication translation: offer gate, markdown stripping, provider client.
pub mod translate;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Session state: nonce bookkeeping, in-flight submission guard.
pub mod session;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CanopyClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{LanguageTag, ProfileId, TxHash};

    // Domain types — profile
    pub use crate::domain::profile::{
        Dispatcher, MutationReceipt, Profile, SubmissionPath, UpdateProfileImageRequest,
    };

    // Domain types — relay, tokens
    pub use crate::domain::relay::{RelayError, RelayErrorReason, RelayResult, RelayerResult};
    pub use crate::domain::tokens::AllowedToken;

    // Signing + contract seams
    pub use crate::contract::{
        HubContract, SetProfileImageUriWithSigInput, SigParts,
    };
    pub use crate::signing::{
        SetProfileImageData, Signature, SignatureComponents, TypedData, TypedDataDomain,
        TypedDataField, TypedDataSigner, TypedDataTypes,
    };

    // Translation
    pub use crate::translate::{
        should_offer_translation, strip_markdown, TranslationResult,
    };

    // Errors
    pub use crate::error::{ContractError, HttpError, SdkError, SignError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TRANSLATE_URL};

    // Session
    pub use crate::session::{NonceReservation, NonceTracker};

    // HTTP client + sub-clients
    pub use crate::client::{
        CanopyClient, CanopyClientBuilder, ProfilesClient, TokensClient, TranslateClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
