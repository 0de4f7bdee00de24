mod identity_client;

pub use identity_client::{IdentityProvider, IdentitySession, IdentityToolkitClient};
