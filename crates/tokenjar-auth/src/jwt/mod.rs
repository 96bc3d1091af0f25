//! Session token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::SessionClaims;
pub use decoder::{SessionTokenDecoder, TokenRejection};
pub use encoder::SessionTokenEncoder;
