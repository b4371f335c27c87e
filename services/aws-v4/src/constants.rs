use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in aws services.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub const X_AMZ_DECODED_CONTENT_LENGTH: &str = "x-amz-decoded-content-length";

/// Payload hash sentinel for requests whose body is not signed.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Payload hash sentinel for chunked streaming uploads.
pub const STREAMING_PAYLOAD: &str = "STREAMING-AWS4-HMAC-SHA256-PAYLOAD";

/// Content encoding value announcing chunk framing.
pub const AWS_CHUNKED: &str = "aws-chunked";

/// Prefix of every chunk string to sign.
pub const CHUNK_STRING_TO_SIGN_PREFIX: &str = "AWS4-HMAC-SHA256-PAYLOAD";

/// Separator between the chunk length and its signature in a frame.
pub const CHUNK_SIGNATURE_HEADER: &str = ";chunk-signature=";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Literal '/' in the path stays as is.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query: '/' is percent-encoded like every other reserved byte.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::utf8_percent_encode;
    use test_case::test_case;

    #[test_case("a b/c", "a%20b/c"; "uri set keeps path slash")]
    fn test_uri_encode_set(input: &str, expected: &str) {
        assert_eq!(
            utf8_percent_encode(input, &AWS_URI_ENCODE_SET).to_string(),
            expected
        );
    }

    #[test_case("a b/c", "a%20b%2Fc"; "query set encodes slash")]
    #[test_case("key=value", "key%3Dvalue"; "query set encodes equals")]
    #[test_case("AZaz09-._~", "AZaz09-._~"; "unreserved bytes pass through")]
    fn test_query_encode_set(input: &str, expected: &str) {
        assert_eq!(
            utf8_percent_encode(input, &AWS_QUERY_ENCODE_SET).to_string(),
            expected
        );
    }

    #[test]
    fn test_escapes_are_uppercase_hex() {
        assert_eq!(
            utf8_percent_encode("№", &AWS_QUERY_ENCODE_SET).to_string(),
            "%E2%84%96"
        );
    }
}
