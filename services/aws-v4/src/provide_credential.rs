use crate::Credential;
use s3auth_core::{ProvideCredential, Result};

/// StaticCredentialProvider provides static AWS credentials.
///
/// This provider is used when you have the access key ID and secret access key
/// directly and want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key ID and secret access key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: None,
        }
    }

    /// Set the session token.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            session_token: self.session_token.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestSigner;
    use s3auth_core::{Signer, SigningCredential};

    #[test]
    fn test_static_credential_provider() -> anyhow::Result<()> {
        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key");
        let cred = provider.provide_credential()?.expect("must be some");
        assert!(cred.is_valid());
        assert_eq!(cred.access_key_id, "test_access_key");
        assert!(cred.session_token.is_none());

        let provider = StaticCredentialProvider::new("ak", "sk").with_session_token("token");
        let cred = provider.provide_credential()?.expect("must be some");
        assert_eq!(cred.session_token.as_deref(), Some("token"));

        Ok(())
    }

    #[test]
    fn test_signer_with_static_provider() -> anyhow::Result<()> {
        let signer = Signer::new(
            StaticCredentialProvider::new("access_key_id", "secret_access_key"),
            RequestSigner::new("s3", "us-east-1"),
        );

        let mut parts = http::Request::builder()
            .method("GET")
            .uri("https://s3.us-east-1.amazonaws.com/bucket/object")
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0;
        signer.sign(&mut parts, None)?;

        let authorization = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .expect("authorization must be present")
            .to_str()?;
        assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=access_key_id/"));
        assert!(parts.headers.contains_key("x-amz-date"));
        Ok(())
    }
}
