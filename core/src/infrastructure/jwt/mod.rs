pub mod hs256_verifier;

pub use hs256_verifier::HsJwtVerifier;
