use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried inside a signed token.
///
/// Exactly what the service needs: the asserted subject plus the token's
/// time bounds as Unix timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (login) the token asserts
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring `ttl` from now.
    pub fn for_subject(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Expiry as a UTC timestamp, or `None` when `exp` is out of the
    /// representable range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject_sets_time_bounds() {
        let claims = Claims::for_subject("alice", Duration::minutes(5));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_expires_at_round_trips_exp() {
        let claims = Claims::for_subject("alice", Duration::seconds(30));
        let expires_at = claims.expires_at().unwrap();
        assert_eq!(expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn test_expires_at_out_of_range() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert!(claims.expires_at().is_none());
    }
}
