pub mod placeholder;
pub mod store;
mod synonyms;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use placeholder::{substitute, PlaceholderLayout, Variant};
pub use store::TemplateStore;

/// An OSI approved license, identified by its SPDX short identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum License {
    /// No license selected.
    ///
    /// This is absence rather than a nameable license: its canonical ID is
    /// `"None"`, but [`resolve`] only produces it for an empty string and
    /// rejects the literal `"None"`.
    #[default]
    None,
    Apache20,
    Bsd2Clause,
    Bsd3Clause,
    Gpl20,
    Gpl30,
    Lgpl20,
    Lgpl21,
    Lgpl30,
    Mit,
    Mpl20,
}

impl License {
    /// Every selectable license, in declaration order.
    pub const ALL: [License; 10] = [
        License::Apache20,
        License::Bsd2Clause,
        License::Bsd3Clause,
        License::Gpl20,
        License::Gpl30,
        License::Lgpl20,
        License::Lgpl21,
        License::Lgpl30,
        License::Mit,
        License::Mpl20,
    ];

    /// The SPDX short identifier, or `"None"`.
    pub fn canonical_id(self) -> &'static str {
        match self {
            License::None => "None",
            License::Apache20 => "Apache-2.0",
            License::Bsd2Clause => "BSD-2-Clause",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Gpl20 => "GPL-2.0",
            License::Gpl30 => "GPL-3.0",
            License::Lgpl20 => "LGPL-2.0",
            License::Lgpl21 => "LGPL-2.1",
            License::Lgpl30 => "LGPL-3.0",
            License::Mit => "MIT",
            License::Mpl20 => "MPL-2.0",
        }
    }

    /// Full name as published in the SPDX license list.
    pub fn name(self) -> &'static str {
        match self {
            License::None => "No license",
            License::Apache20 => "Apache License 2.0",
            License::Bsd2Clause => "BSD 2-Clause \"Simplified\" License",
            License::Bsd3Clause => "BSD 3-Clause \"New\" or \"Revised\" License",
            License::Gpl20 => "GNU General Public License v2.0 only",
            License::Gpl30 => "GNU General Public License v3.0 only",
            License::Lgpl20 => "GNU Library General Public License v2 only",
            License::Lgpl21 => "GNU Lesser General Public License v2.1 only",
            License::Lgpl30 => "GNU Lesser General Public License v3.0 only",
            License::Mit => "MIT License",
            License::Mpl20 => "Mozilla Public License 2.0",
        }
    }

    /// Lower-cased canonical ID; license template files are named after it.
    pub fn file_stem(self) -> String {
        self.canonical_id().to_lowercase()
    }

    pub fn is_none(self) -> bool {
        self == License::None
    }

    /// All strings the resolver accepts for this license, upper-cased.
    pub fn synonyms(self) -> impl Iterator<Item = &'static str> {
        synonyms::SYNONYMS
            .iter()
            .filter(move |(_, license)| *license == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

impl FromStr for License {
    type Err = UnsupportedLicense;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

/// A license name that matches none of the supported licenses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported license: {input}")]
pub struct UnsupportedLicense {
    /// The rejected input, exactly as given.
    pub input: String,
}

/// Resolve a license from its full name or SPDX short identifier.
///
/// Matching is exact after upper-casing. Variants of the short identifier
/// that drop the punctuation and/or the trailing `0` are accepted, as are
/// full names without quotes, e.g. `BSD-2-Clause Simplified License`.
///
/// An empty string resolves to [`License::None`] and is not an error.
pub fn resolve(input: &str) -> Result<License, UnsupportedLicense> {
    if input.is_empty() {
        return Ok(License::None);
    }

    synonyms::lookup(&input.to_uppercase()).ok_or_else(|| UnsupportedLicense {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Apache License 2.0", License::Apache20)]
    #[case("Apache license 2.0", License::Apache20)]
    #[case("Apache License 2", License::Apache20)]
    #[case("Apache-2.0", License::Apache20)]
    #[case("Apache-2", License::Apache20)]
    #[case("Apache20", License::Apache20)]
    #[case("apache2", License::Apache20)]
    #[case("BSD-2-clause license", License::Bsd2Clause)]
    #[case("BSD-2-Clause Simplified License", License::Bsd2Clause)]
    #[case("BSD2Clause", License::Bsd2Clause)]
    #[case("BSD-2", License::Bsd2Clause)]
    #[case("bsd2", License::Bsd2Clause)]
    #[case("BSD-3-Clause New or Revised License", License::Bsd3Clause)]
    #[case("BSD-3-clause license", License::Bsd3Clause)]
    #[case("BSD3Clause", License::Bsd3Clause)]
    #[case("bsd3", License::Bsd3Clause)]
    #[case("GNU GENERAL PUBLIC LICENSE V2.0 ONLY", License::Gpl20)]
    #[case("Gnu General Public License V2 Only", License::Gpl20)]
    #[case("General Public License V2", License::Gpl20)]
    #[case("GPL-2.0", License::Gpl20)]
    #[case("GPL-20", License::Gpl20)]
    #[case("GPL2", License::Gpl20)]
    #[case("Gnu General Public License V3.0", License::Gpl30)]
    #[case("General Public License V3 Only", License::Gpl30)]
    #[case("GPL-30", License::Gpl30)]
    #[case("gpl3", License::Gpl30)]
    #[case("gnu lesser general public license v2.0 only", License::Lgpl20)]
    #[case("Lesser General Public License V2", License::Lgpl20)]
    #[case("LGPL-2", License::Lgpl20)]
    #[case("LGPL2", License::Lgpl20)]
    #[case("GNU Lesser General Public License V2.1", License::Lgpl21)]
    #[case("Lesser General Public License V2.1 Only", License::Lgpl21)]
    #[case("LGPL21", License::Lgpl21)]
    #[case("GNU Lesser General Public License V3 Only", License::Lgpl30)]
    #[case("LGPL-3", License::Lgpl30)]
    #[case("lgpl30", License::Lgpl30)]
    #[case("MIT License", License::Mit)]
    #[case("mit", License::Mit)]
    #[case("Mit", License::Mit)]
    #[case("Mozilla Public License 2", License::Mpl20)]
    #[case("MPL-2", License::Mpl20)]
    #[case("mpl20", License::Mpl20)]
    fn resolves_synonyms(#[case] input: &str, #[case] expected: License) {
        assert_eq!(resolve(input), Ok(expected));
    }

    #[test]
    fn empty_input_is_no_license() {
        assert_eq!(resolve(""), Ok(License::None));
    }

    #[rstest]
    #[case("fdas")]
    #[case("Gen Public License")]
    #[case("None")]
    #[case("GPL")]
    #[case(" MIT")]
    fn rejects_unknown_names(#[case] input: &str) {
        let err = resolve(input).unwrap_err();
        assert_eq!(err.input, input);
        assert_eq!(err.to_string(), format!("unsupported license: {input}"));
    }

    #[test]
    fn error_keeps_original_case() {
        let err = resolve("Not A License").unwrap_err();
        assert_eq!(err.input, "Not A License");
    }

    #[test]
    fn canonical_ids_resolve_to_themselves() {
        for license in License::ALL {
            assert_eq!(resolve(license.canonical_id()), Ok(license), "{license}");
        }
    }

    #[rstest]
    #[case(License::None, "None", "none")]
    #[case(License::Apache20, "Apache-2.0", "apache-2.0")]
    #[case(License::Bsd2Clause, "BSD-2-Clause", "bsd-2-clause")]
    #[case(License::Bsd3Clause, "BSD-3-Clause", "bsd-3-clause")]
    #[case(License::Gpl20, "GPL-2.0", "gpl-2.0")]
    #[case(License::Gpl30, "GPL-3.0", "gpl-3.0")]
    #[case(License::Lgpl20, "LGPL-2.0", "lgpl-2.0")]
    #[case(License::Lgpl21, "LGPL-2.1", "lgpl-2.1")]
    #[case(License::Lgpl30, "LGPL-3.0", "lgpl-3.0")]
    #[case(License::Mit, "MIT", "mit")]
    #[case(License::Mpl20, "MPL-2.0", "mpl-2.0")]
    fn canonical_id_and_file_stem(
        #[case] license: License,
        #[case] id: &str,
        #[case] stem: &str,
    ) {
        assert_eq!(license.canonical_id(), id);
        assert_eq!(license.to_string(), id);
        assert_eq!(license.file_stem(), stem);
    }

    #[test]
    fn from_str_matches_resolve() {
        assert_eq!("gpl-2".parse::<License>(), Ok(License::Gpl20));
        assert!("nope".parse::<License>().is_err());
    }

    #[test]
    fn default_is_none() {
        assert!(License::default().is_none());
        assert_eq!(License::None.synonyms().count(), 0);
    }
}
