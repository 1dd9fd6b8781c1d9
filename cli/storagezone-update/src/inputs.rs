// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Action inputs
//!
//! Every input can be passed as a flag or through the `INPUT_<NAME>`
//! variable the GitHub Actions runner sets for `with:` values. Values are
//! kept as raw strings here and interpreted with the runner's own rules in
//! [`Inputs::into_config`].

use bunny_storage_api::DEFAULT_BASE_URL;
use clap::Parser;
use secrecy::SecretString;
use tracing::warn;

use crate::config::Config;
use crate::error::UpdateError;

#[derive(Parser, Debug, Default)]
#[command(
    name = "storagezone-update",
    version,
    about = "Update a bunny.net storage zone",
    long_about = "Update the replication zones and 404 handling of a bunny.net storage zone.\n\n\
                  Inputs may also be given as INPUT_<NAME> environment variables, \
                  as set by the GitHub Actions runner."
)]
pub struct Inputs {
    /// Id of the storage zone to update
    #[arg(long, env = "INPUT_STORAGEZONEID")]
    pub storage_zone_id: Option<String>,

    /// Comma-separated replication zones (e.g. "DE,NY")
    #[arg(long, env = "INPUT_REPLICATIONZONES")]
    pub replication_zones: Option<String>,

    /// Deprecated name for --replication-zones
    #[arg(long, env = "INPUT_REPLICATIONREGIONS", hide = true)]
    pub replication_regions: Option<String>,

    /// Rewrite 404 responses to 200 (true or false)
    #[arg(long = "rewrite-404-to-200", env = "INPUT_REWRITE404TO200")]
    pub rewrite_404_to_200: Option<String>,

    /// Path of a custom 404 page inside the storage zone
    #[arg(long = "custom-404-file-path", env = "INPUT_CUSTOM404FILEPATH")]
    pub custom_404_file_path: Option<String>,

    /// bunny.net account access key
    #[arg(long, env = "INPUT_ACCESSKEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Management API base URL
    #[arg(long, env = "BUNNY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

impl Inputs {
    /// Resolve the raw inputs into a [`Config`]
    ///
    /// A missing or unusable `storageZoneId` is not an error here; it becomes
    /// zero and the updater refuses it before sending anything.
    pub fn into_config(self) -> Result<Config, UpdateError> {
        let access_key = input(self.access_key.as_deref())
            .ok_or_else(|| UpdateError::input_required("accessKey"))?;

        let zones = match (
            input(self.replication_zones.as_deref()),
            input(self.replication_regions.as_deref()),
        ) {
            (Some(zones), Some(_)) => {
                warn!(
                    "Both replicationZones and replicationRegions are set, using replicationZones"
                );
                Some(zones)
            }
            (Some(zones), None) => Some(zones),
            (None, Some(regions)) => {
                warn!("replicationRegions is deprecated, use replicationZones instead");
                Some(regions)
            }
            (None, None) => None,
        };

        Ok(Config {
            storage_zone_id: parse_storage_zone_id(self.storage_zone_id.as_deref()),
            replication_zones: zones.map(parse_list).unwrap_or_default(),
            rewrite_404_to_200: parse_boolean(
                "rewrite404To200",
                self.rewrite_404_to_200.as_deref(),
            )?,
            custom_404_file_path: input(self.custom_404_file_path.as_deref())
                .unwrap_or_default()
                .to_string(),
            access_key: SecretString::from(access_key.to_string()),
            api_url: self.api_url,
        })
    }
}

/// Trimmed input value; blank counts as not supplied
fn input(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Storage zone id, or 0 when missing, zero, negative or not a number
pub fn parse_storage_zone_id(value: Option<&str>) -> u64 {
    input(value)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Split a comma-separated list, trimming items and dropping empty ones
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Boolean input using the YAML 1.2 core schema; blank means false
pub fn parse_boolean(name: &str, value: Option<&str>) -> Result<bool, UpdateError> {
    match input(value) {
        None => Ok(false),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some("false" | "False" | "FALSE") => Ok(false),
        Some(_) => Err(UpdateError::invalid_boolean(name)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use secrecy::ExposeSecret;
    use test_case::test_case;

    fn inputs() -> Inputs {
        Inputs {
            storage_zone_id: Some("42".to_string()),
            access_key: Some("k".to_string()),
            api_url: DEFAULT_BASE_URL.to_string(),
            ..Default::default()
        }
    }

    #[test_case(Some("42"), 42 ; "plain")]
    #[test_case(Some("  42 "), 42 ; "surrounding whitespace")]
    #[test_case(Some("0"), 0 ; "zero")]
    #[test_case(Some("-3"), 0 ; "negative")]
    #[test_case(Some("zone"), 0 ; "not a number")]
    #[test_case(Some(""), 0 ; "empty")]
    #[test_case(None, 0 ; "absent")]
    fn test_parse_storage_zone_id(value: Option<&str>, expected: u64) {
        assert_eq!(parse_storage_zone_id(value), expected);
    }

    #[test_case("DE,NY", &["DE", "NY"] ; "simple")]
    #[test_case(" DE , NY ,", &["DE", "NY"] ; "whitespace and trailing comma")]
    #[test_case("UK", &["UK"] ; "single")]
    #[test_case("", &[] ; "empty")]
    #[test_case(" , ", &[] ; "only separators")]
    fn test_parse_list(value: &str, expected: &[&str]) {
        assert_eq!(parse_list(value), expected);
    }

    #[test_case(None, false ; "absent")]
    #[test_case(Some(""), false ; "empty")]
    #[test_case(Some("true"), true ; "lowercase true")]
    #[test_case(Some("True"), true ; "capitalized true")]
    #[test_case(Some("TRUE"), true ; "uppercase true")]
    #[test_case(Some(" false "), false ; "padded false")]
    #[test_case(Some("FALSE"), false ; "uppercase false")]
    fn test_parse_boolean(value: Option<&str>, expected: bool) {
        assert_eq!(parse_boolean("flag", value).unwrap(), expected);
    }

    #[test_case("yes" ; "yes")]
    #[test_case("1" ; "one")]
    #[test_case("tRUE" ; "mixed case")]
    fn test_parse_boolean_rejects_other_values(value: &str) {
        let err = parse_boolean("rewrite404To200", Some(value)).unwrap_err();
        assert!(matches!(err, UpdateError::Configuration(_)));
        assert!(err.to_string().contains("rewrite404To200"));
    }

    #[test]
    fn test_into_config() {
        let config = Inputs {
            replication_zones: Some("DE, NY".to_string()),
            rewrite_404_to_200: Some("true".to_string()),
            custom_404_file_path: Some(" /404.html ".to_string()),
            ..inputs()
        }
        .into_config()
        .unwrap();

        assert_eq!(config.storage_zone_id, 42);
        assert_eq!(config.replication_zones, ["DE", "NY"]);
        assert!(config.rewrite_404_to_200);
        assert_eq!(config.custom_404_file_path, "/404.html");
        assert_eq!(config.access_key.expose_secret(), "k");
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_access_key() {
        let err = Inputs {
            access_key: Some("   ".to_string()),
            ..inputs()
        }
        .into_config()
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Input required and not supplied: accessKey"
        );
    }

    #[test]
    fn test_missing_zone_id_is_deferred_to_the_updater() {
        let config = Inputs {
            storage_zone_id: None,
            ..inputs()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.storage_zone_id, 0);
    }

    #[test]
    fn test_replication_regions_alias() {
        let config = Inputs {
            replication_regions: Some("SG,SYD".to_string()),
            ..inputs()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.replication_zones, ["SG", "SYD"]);

        let config = Inputs {
            replication_zones: Some("DE".to_string()),
            replication_regions: Some("SG".to_string()),
            ..inputs()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.replication_zones, ["DE"]);
    }

    #[test]
    fn test_flags_parse() {
        let inputs = Inputs::try_parse_from([
            "storagezone-update",
            "--storage-zone-id",
            "7",
            "--rewrite-404-to-200",
            "false",
            "--access-key",
            "k",
        ])
        .unwrap();

        assert_eq!(inputs.storage_zone_id.as_deref(), Some("7"));
        assert_eq!(inputs.rewrite_404_to_200.as_deref(), Some("false"));
    }
}
