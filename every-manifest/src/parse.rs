//! Feature extraction from manifest content.

use cargo_every_core::FeatureSet;
use serde::Deserialize;
use toml::{Spanned, Value};

use crate::{Result, SourceContext};

/// The only part of a Cargo manifest this crate cares about.
#[derive(Debug, Deserialize)]
struct RawManifest {
    features: Option<Spanned<Value>>,
}

/// Extract the feature set from manifest content.
///
/// `filename` is only used for error reporting.
pub fn parse_features(content: &str, filename: &str) -> Result<FeatureSet> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let Some(features) = raw.features else {
        return Err(source_ctx.missing_features_error());
    };

    let span = features.span();
    match features.into_inner() {
        Value::Table(table) => {
            let set = FeatureSet::new(table.into_iter().map(|(name, _)| name));
            tracing::debug!(filename, features = %set, "extracted features");
            Ok(set)
        }
        other => Err(source_ctx.invalid_features_error(other.type_str(), span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn names(set: &FeatureSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_two_features() {
        let set = parse_features(
            r#"
            [features]
            beta = []
            alpha = []
            "#,
            "Cargo.toml",
        )
        .unwrap();
        assert_eq!(names(&set), ["alpha", "beta"]);
    }

    #[test]
    fn test_default_is_ignored() {
        let set = parse_features(
            r#"
            [features]
            default = ["alpha"]
            alpha = []
            beta = ["alpha"]
            "#,
            "Cargo.toml",
        )
        .unwrap();
        assert_eq!(names(&set), ["alpha", "beta"]);
    }

    #[test]
    fn test_empty_features_table() {
        let set = parse_features("[features]\n", "Cargo.toml").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.combinations().count(), 1);
    }

    #[test]
    fn test_only_default() {
        let set = parse_features("[features]\ndefault = []\n", "Cargo.toml").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_package_manifest() {
        let set = parse_features(
            r#"
            [package]
            name = "nonogrid"
            version = "0.7.3"
            edition = "2018"

            [dependencies]
            log = "0.4"
            clap = { version = "2", optional = true }

            [features]
            default = ["args", "colors"]
            args = ["clap"]
            colors = []   # terminal colors
            sat = []
            threaded = []

            [dev-dependencies]
            env_logger = "0.7"
            "#,
            "Cargo.toml",
        )
        .unwrap();
        assert_eq!(names(&set), ["args", "colors", "sat", "threaded"]);
    }

    #[test]
    fn test_missing_features_table() {
        let err = parse_features("[package]\nname = \"x\"\n", "x/Cargo.toml").unwrap_err();
        assert!(matches!(*err, Error::MissingFeatures { .. }));
        assert_eq!(err.to_string(), "'x/Cargo.toml' has no [features] table");
    }

    #[test]
    fn test_features_not_a_table() {
        let err = parse_features("features = 3\n", "Cargo.toml").unwrap_err();
        match *err {
            Error::InvalidFeatures { found, span, .. } => {
                assert_eq!(found, "integer");
                assert_eq!(span.offset(), "features = ".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_features("[features\nalpha = []\n", "Cargo.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
