use std::fmt::Debug;
use std::time::Duration;

use crate::Result;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to obtain the credential
/// to sign with.
///
/// Services may require different credentials: AWS style services require an
/// access key and a secret key, token based services require a bearer token.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Provide the credential to sign with.
    fn provide_credential(&self) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign a request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Credential
    ///
    /// Signing without a usable credential is an error: implementations must
    /// fail with a config error instead of passing the request through
    /// unsigned.
    ///
    /// ## Expires In
    ///
    /// `expires_in` selects query signing (a presigned URL valid for the
    /// given duration). `None` selects header signing. Implementations that
    /// do not support presigning should return an error when it is set.
    fn sign_request(
        &self,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()>;
}
