use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use crate::ProvideCredential;
use crate::Result;
use crate::SignRequest;
use crate::SigningCredential;

/// Signer is the main struct used to sign the request.
///
/// It composes a credential provider with a request signer and caches the
/// provided credential for as long as it stays valid.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// `expires_in` selects query signing, `None` selects header signing.
    pub fn sign(
        &self,
        req: &mut http::request::Parts,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            let cred = self.provider.provide_credential()?;
            *self.credential.lock().expect("lock poisoned") = cred.clone();
            cred
        };

        self.builder.sign_request(req, cred.as_ref(), expires_in)
    }
}
