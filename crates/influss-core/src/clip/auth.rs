use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Build the `Authorization` header value for HTTP Basic auth.
///
/// Always `"Basic " + base64(username + ":" + password)`, also when either
/// part is empty.
pub fn basic_authorization(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", STANDARD.encode(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_username_and_password() {
        assert_eq!(
            basic_authorization("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn empty_password_keeps_separator() {
        assert_eq!(basic_authorization("alice", ""), "Basic YWxpY2U6");
    }

    #[test]
    fn empty_username_keeps_separator() {
        assert_eq!(basic_authorization("", "secret"), "Basic OnNlY3JldA==");
    }

    #[test]
    fn both_empty_encode_the_bare_colon() {
        assert_eq!(basic_authorization("", ""), "Basic Og==");
    }

    #[test]
    fn non_ascii_credentials_are_encoded_as_utf8() {
        let header = basic_authorization("jürgen", "pässword");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();

        assert_eq!(String::from_utf8(decoded).unwrap(), "jürgen:pässword");
    }
}
