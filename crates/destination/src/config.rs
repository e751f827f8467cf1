//! Connection configuration, parsed from the string map carried on every rpc.

use std::collections::HashMap;

use surreal_client::Credentials;

use crate::error::Error;

/// Truthy values accepted for boolean environment toggles.
const TRUTHY: &[&str] = &["1", "true", "yes", "on"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Websocket endpoint of the store's rpc interface.
    pub url: String,
    /// Namespace all of this connector's databases live under.
    pub namespace: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn from_map(map: &HashMap<String, String>) -> Result<Config, Error> {
        let url = require(map, "url")?;
        let namespace = require(map, "ns")?;

        let user = get(map, "user");
        let pass = get(map, "pass");
        let token = get(map, "token");

        let credentials = match (user, pass, token) {
            (None, None, Some(token)) => Credentials::Token(token.to_string()),
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
                return Err(Error::Config(
                    "token auth is mutually exclusive with user/pass".to_string(),
                ))
            }
            (Some(user), Some(pass), None) => match get(map, "auth_level") {
                None | Some("root") => Credentials::Root {
                    username: user.to_string(),
                    password: pass.to_string(),
                },
                Some("namespace") => Credentials::Namespace {
                    namespace: namespace.to_string(),
                    username: user.to_string(),
                    password: pass.to_string(),
                },
                Some(other) => {
                    return Err(Error::Config(format!(
                        "auth_level must be 'root' or 'namespace', got {other:?}"
                    )))
                }
            },
            _ => {
                return Err(Error::Config(
                    "either token or both user and pass must be set".to_string(),
                ))
            }
        };

        Ok(Config {
            url: url.to_string(),
            namespace: namespace.to_string(),
            credentials,
        })
    }
}

fn get<'m>(map: &'m HashMap<String, String>, key: &str) -> Option<&'m str> {
    map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn require<'m>(map: &'m HashMap<String, String>, key: &str) -> Result<&'m str, Error> {
    get(map, key).ok_or_else(|| Error::Config(format!("missing required field {key:?}")))
}

/// Whether the `SURREAL_FIVETRAN_DEBUG` toggle asks for debug verbosity.
pub fn debug_enabled() -> bool {
    std::env::var("SURREAL_FIVETRAN_DEBUG")
        .map(|v| TRUTHY.contains(&v.trim().to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_root_user_pass() {
        let config = Config::from_map(&map(&[
            ("url", "ws://localhost:8000/rpc"),
            ("ns", "fivetran"),
            ("user", "root"),
            ("pass", "secret"),
        ]))
        .unwrap();
        assert!(matches!(config.credentials, Credentials::Root { .. }));
        assert_eq!(config.namespace, "fivetran");
    }

    #[test]
    fn parses_namespace_scope() {
        let config = Config::from_map(&map(&[
            ("url", "ws://localhost:8000/rpc"),
            ("ns", "fivetran"),
            ("auth_level", "namespace"),
            ("user", "ingest"),
            ("pass", "secret"),
        ]))
        .unwrap();
        match config.credentials {
            Credentials::Namespace { namespace, .. } => assert_eq!(namespace, "fivetran"),
            other => panic!("unexpected credentials: {other:?}"),
        }
    }

    #[test]
    fn parses_token() {
        let config = Config::from_map(&map(&[
            ("url", "ws://localhost:8000/rpc"),
            ("ns", "fivetran"),
            ("token", "jwt"),
        ]))
        .unwrap();
        assert!(matches!(config.credentials, Credentials::Token(_)));
    }

    #[test]
    fn rejects_conflicting_auth() {
        let err = Config::from_map(&map(&[
            ("url", "ws://localhost:8000/rpc"),
            ("ns", "fivetran"),
            ("user", "root"),
            ("pass", "secret"),
            ("token", "jwt"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn rejects_missing_url_and_auth() {
        assert!(Config::from_map(&map(&[("ns", "fivetran")])).is_err());
        assert!(Config::from_map(&map(&[
            ("url", "ws://localhost:8000/rpc"),
            ("ns", "fivetran"),
        ]))
        .is_err());
        // Blank values count as missing.
        assert!(Config::from_map(&map(&[
            ("url", "  "),
            ("ns", "fivetran"),
            ("token", "jwt"),
        ]))
        .is_err());
    }
}
