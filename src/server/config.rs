use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3001";

/// Work factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

pub struct Config {
    pub database_url: String,

    /// Symmetric secret used to sign and verify access tokens.
    pub jwt_secret: String,
    /// bcrypt work factor applied when hashing new passwords.
    pub bcrypt_cost: u32,

    pub port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::EmptySigningSecret);
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            bcrypt_cost: checked_bcrypt_cost(parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?)?,
            port: parse_or("PORT", DEFAULT_PORT)?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
        })
    }
}

/// Rejects costs bcrypt would refuse, so a bad value fails at startup instead of on
/// every registration.
fn checked_bcrypt_cost(cost: u32) -> Result<u32, ConfigError> {
    if BCRYPT_COST_RANGE.contains(&cost) {
        Ok(cost)
    } else {
        Err(ConfigError::InvalidValue {
            name: "BCRYPT_COST".to_string(),
            value: cost.to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => {
            value.parse().map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bcrypt_cost_bounds() {
        assert_eq!(checked_bcrypt_cost(4).unwrap(), 4);
        assert_eq!(checked_bcrypt_cost(bcrypt::DEFAULT_COST).unwrap(), bcrypt::DEFAULT_COST);
        assert_eq!(checked_bcrypt_cost(31).unwrap(), 31);
    }

    #[test]
    fn rejects_bcrypt_cost_out_of_range() {
        for cost in [0, 3, 32, 100] {
            let err = checked_bcrypt_cost(cost).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref name, ref value }
                    if name == "BCRYPT_COST" && *value == cost.to_string()
            ));
        }
    }
}
