//! Authentication types for the MoySklad API SDK.
//!
//! A client authenticates every request with a single [`AuthCredential`]:
//!
//! - [`AuthCredential::Basic`]: login and password, sent as
//!   `Authorization: Basic <base64(login:password)>`
//! - [`AuthCredential::Token`]: an access token, sent as
//!   `Authorization: Bearer <token>`
//!
//! Credentials are immutable once the client is built.

mod credential;

pub use credential::AuthCredential;
