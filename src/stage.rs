//! Shader stage resolution from file extensions.
//!
//! The validator compiles a file for a single pipeline stage. The stage is
//! taken from the configured extension map; when no extension matches the
//! validator is run without a stage hint, and when several match the
//! result is ambiguous and no guess is made.

use std::collections::BTreeMap;
use std::path::Path;

/// Outcome of resolving a file's shader stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageResolution {
    /// Exactly one extension matched.
    Known(String),
    /// No extension matched.
    Unknown,
    /// Two or more distinct extensions matched.
    Ambiguous {
        /// The matching extensions, sorted.
        candidates: Vec<String>,
    },
}

impl StageResolution {
    /// Stage to pass to the validator, if one was determined.
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::Known(stage) => Some(stage),
            Self::Unknown | Self::Ambiguous { .. } => None,
        }
    }

    /// Whether this resolution should be reported to the user as a warning.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// User-facing warning text for an ambiguous resolution.
    pub fn warning(&self, path: &Path) -> Option<String> {
        match self {
            Self::Ambiguous { candidates } => Some(format!(
                "{}: shader stage is ambiguous (matches {}); running validator without a stage",
                path.display(),
                candidates.join(", ")
            )),
            _ => None,
        }
    }
}

/// Resolve the shader stage for `path` from an extension → stage map.
///
/// Matching is a case-sensitive suffix test against the path's full text.
pub fn resolve_stage(path: &Path, stages: &BTreeMap<String, String>) -> StageResolution {
    let text = path.to_string_lossy();

    let matches: Vec<(&String, &String)> = stages
        .iter()
        .filter(|(extension, _)| !extension.is_empty() && text.ends_with(extension.as_str()))
        .collect();

    match matches.as_slice() {
        [] => StageResolution::Unknown,
        [(_, stage)] => StageResolution::Known((*stage).clone()),
        many => {
            // BTreeMap iteration is already sorted by extension
            let candidates = many.iter().map(|(ext, _)| (*ext).clone()).collect();
            tracing::debug!(path = %path.display(), ?candidates, "ambiguous shader stage");
            StageResolution::Ambiguous { candidates }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn single_match_returns_stage() {
        let stages = map(&[(".vert", "vert"), (".frag", "frag")]);
        assert_eq!(
            resolve_stage(Path::new("a.vert"), &stages),
            StageResolution::Known("vert".into())
        );
    }

    #[test]
    fn no_match_is_unknown() {
        let stages = map(&[(".vert", "vert"), (".frag", "frag")]);
        let resolution = resolve_stage(Path::new("shader.glsl"), &stages);
        assert_eq!(resolution, StageResolution::Unknown);
        assert!(resolution.stage().is_none());
        assert!(!resolution.is_ambiguous());
    }

    #[test]
    fn empty_map_is_unknown_without_warning() {
        let resolution = resolve_stage(Path::new("a.vert"), &BTreeMap::new());
        assert_eq!(resolution, StageResolution::Unknown);
        assert!(resolution.warning(Path::new("a.vert")).is_none());
    }

    #[test]
    fn two_distinct_matches_are_ambiguous() {
        let stages = map(&[(".vert", "vert"), (".frag.vert", "frag")]);
        let resolution = resolve_stage(Path::new("lighting.frag.vert"), &stages);

        assert!(resolution.is_ambiguous());
        assert!(resolution.stage().is_none());
        let warning = resolution.warning(Path::new("lighting.frag.vert")).unwrap();
        assert!(warning.contains(".frag.vert, .vert"));
    }

    #[test]
    fn distinct_extensions_with_same_stage_are_still_ambiguous() {
        let stages = map(&[("vert", "vert"), (".vert", "vert")]);
        assert!(resolve_stage(Path::new("a.vert"), &stages).is_ambiguous());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let stages = map(&[(".vert", "vert")]);
        assert_eq!(
            resolve_stage(Path::new("A.VERT"), &stages),
            StageResolution::Unknown
        );
    }

    #[test]
    fn matches_against_full_path() {
        let stages = map(&[(".comp", "comp")]);
        assert_eq!(
            resolve_stage(Path::new("shaders/compute/blur.comp"), &stages),
            StageResolution::Known("comp".into())
        );
    }

    #[test]
    fn empty_extension_never_matches() {
        let stages = map(&[("", "frag")]);
        assert_eq!(
            resolve_stage(Path::new("a.frag"), &stages),
            StageResolution::Unknown
        );
    }
}
