use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Credentials for logging into the server. Captured transiently from the
/// user, encoded once for a single request, and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// Who are you?
    pub username: String,

    /// Plaintext password. Never persisted.
    pub password: String,
}

impl Req {
    /// The value for the `Authorization` header: `Basic base64(user:pass)`.
    pub fn basic_auth(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));

        format!("Basic {encoded}")
    }
}

/// Where the login endpoint lives. Success is any status below 400; the
/// session rides on the JWT cookie the server sets.
pub const PATH: &str = "/auth/login";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_auth_encodes_user_and_password() {
        let req = Req {
            username: "admin".to_owned(),
            password: "admin".to_owned(),
        };

        assert_eq!(req.basic_auth(), "Basic YWRtaW46YWRtaW4=");
    }
}
