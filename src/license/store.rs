use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::{License, Variant};
use crate::error::{QuineError, Result};

/// Where license templates are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateStore {
    /// The license texts compiled into the binary.
    #[default]
    Builtin,
    /// A directory of license files named by [`Variant::file_name`].
    Directory(PathBuf),
}

static BUILTIN: &[(License, Variant, &[u8])] = &[
    (License::Apache20, Variant::Full, include_bytes!("../../licenses/apache-2.0")),
    (License::Apache20, Variant::Header, include_bytes!("../../licenses/apache-2.0.slh")),
    (License::Bsd2Clause, Variant::Full, include_bytes!("../../licenses/bsd-2-clause")),
    (License::Bsd3Clause, Variant::Full, include_bytes!("../../licenses/bsd-3-clause")),
    (License::Gpl20, Variant::Full, include_bytes!("../../licenses/gpl-2.0")),
    (License::Gpl20, Variant::Header, include_bytes!("../../licenses/gpl-2.0.slh")),
    (License::Gpl30, Variant::Full, include_bytes!("../../licenses/gpl-3.0")),
    (License::Gpl30, Variant::Header, include_bytes!("../../licenses/gpl-3.0.slh")),
    (License::Lgpl20, Variant::Full, include_bytes!("../../licenses/lgpl-2.0")),
    (License::Lgpl20, Variant::Header, include_bytes!("../../licenses/lgpl-2.0.slh")),
    (License::Lgpl21, Variant::Full, include_bytes!("../../licenses/lgpl-2.1")),
    (License::Lgpl21, Variant::Header, include_bytes!("../../licenses/lgpl-2.1.slh")),
    (License::Lgpl30, Variant::Full, include_bytes!("../../licenses/lgpl-3.0")),
    (License::Mit, Variant::Full, include_bytes!("../../licenses/mit")),
    (License::Mpl20, Variant::Full, include_bytes!("../../licenses/mpl-2.0")),
    (License::Mpl20, Variant::Header, include_bytes!("../../licenses/mpl-2.0.slh")),
];

/// The license text compiled into the binary, if one ships for `variant`.
pub fn builtin(license: License, variant: Variant) -> Option<&'static [u8]> {
    BUILTIN
        .iter()
        .find(|(l, v, _)| *l == license && *v == variant)
        .map(|(_, _, bytes)| *bytes)
}

impl TemplateStore {
    /// Load a license template.
    ///
    /// Returns `Ok(None)` for [`License::None`] and for a header that does not
    /// exist; not every license has one. A missing full text in a license
    /// directory is an error.
    pub fn load(
        &self,
        license: License,
        variant: Variant,
    ) -> Result<Option<Cow<'static, [u8]>>> {
        if license.is_none() {
            return Ok(None);
        }

        match self {
            TemplateStore::Builtin => Ok(builtin(license, variant).map(Cow::Borrowed)),
            TemplateStore::Directory(dir) => {
                let path = dir.join(variant.file_name(license));
                match std::fs::read(&path) {
                    Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
                    Err(e)
                        if e.kind() == std::io::ErrorKind::NotFound
                            && variant == Variant::Header =>
                    {
                        Ok(None)
                    }
                    Err(e) => Err(QuineError::Io {
                        context: format!("reading {}", path.display()),
                        source: e,
                    }),
                }
            }
        }
    }

    /// Where a template comes from, for messages.
    pub fn location(&self, license: License, variant: Variant) -> PathBuf {
        match self {
            TemplateStore::Builtin => Path::new("<builtin>").join(variant.file_name(license)),
            TemplateStore::Directory(dir) => dir.join(variant.file_name(license)),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TemplateStore::Builtin)
    }
}
