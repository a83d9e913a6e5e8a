//! Copyright owner and year substitution for the shipped license texts.
//!
//! Each license text that carries placeholders has a [`PlaceholderLayout`]:
//! the byte spans of its year token and its owner token. The spans are tied
//! to the exact wording of the files in `licenses/`; when that wording
//! changes the spans have to be re-derived (the tests below catch drift).
//!
//! Substitution must always start from the pristine template. Running it
//! over already substituted text splices at stale offsets.

use std::borrow::Cow;
use std::ops::Range;

use super::License;

/// Which shipped text of a license a template holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The complete license text, written out as `LICENSE`.
    Full,
    /// The short license header embedded as a source comment.
    Header,
}

impl Variant {
    /// File name of this variant of `license` inside a license directory.
    pub fn file_name(self, license: License) -> String {
        match self {
            Variant::Full => license.file_stem(),
            Variant::Header => format!("{}.slh", license.file_stem()),
        }
    }
}

/// Byte spans of the year and owner placeholder tokens in a template.
///
/// The year token always precedes the owner token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderLayout {
    pub year: Range<usize>,
    pub owner: Range<usize>,
}

// `Copyright (c) <year> <owner> All rights reserved.`
static BSD_2_CLAUSE: PlaceholderLayout = PlaceholderLayout {
    year: 14..20,
    owner: 21..28,
};

// `Copyright (c) <year> <owner> . All rights reserved.`; the owner span
// takes the space before the period with it.
static BSD_3_CLAUSE: PlaceholderLayout = PlaceholderLayout {
    year: 14..20,
    owner: 21..29,
};

// `Copyright (c) <year> <copyright holders>`
static MIT: PlaceholderLayout = PlaceholderLayout {
    year: 14..20,
    owner: 21..40,
};

// `Copyright [yyyy] [name of copyright owner]`
static APACHE_2_0_HEADER: PlaceholderLayout = PlaceholderLayout {
    year: 10..16,
    owner: 17..42,
};

// Second line, after the program description placeholder:
// `Copyright (C) <year>  <name of author>`
static GPL_2_0_HEADER: PlaceholderLayout = PlaceholderLayout {
    year: 86..92,
    owner: 94..110,
};

static GPL_3_0_HEADER: PlaceholderLayout = PlaceholderLayout {
    year: 86..92,
    owner: 94..110,
};

// LGPL-2.0 and LGPL-2.1 headers are identical up to the owner token.
static LGPL_2_X_HEADER: PlaceholderLayout = PlaceholderLayout {
    year: 86..92,
    owner: 94..110,
};

/// The placeholder layout of a license text, if it has placeholders.
pub fn layout(license: License, variant: Variant) -> Option<&'static PlaceholderLayout> {
    match (license, variant) {
        (License::Bsd2Clause, Variant::Full) => Some(&BSD_2_CLAUSE),
        (License::Bsd3Clause, Variant::Full) => Some(&BSD_3_CLAUSE),
        (License::Mit, Variant::Full) => Some(&MIT),
        (License::Apache20, Variant::Header) => Some(&APACHE_2_0_HEADER),
        (License::Gpl20, Variant::Header) => Some(&GPL_2_0_HEADER),
        (License::Gpl30, Variant::Header) => Some(&GPL_3_0_HEADER),
        (License::Lgpl20 | License::Lgpl21, Variant::Header) => Some(&LGPL_2_X_HEADER),
        _ => None,
    }
}

impl PlaceholderLayout {
    /// Whether both spans fit in `template` and each holds a bracketed token.
    ///
    /// Use this to vet templates that did not ship with quine before
    /// handing them to [`substitute`].
    pub fn matches(&self, template: &[u8]) -> bool {
        is_token(template.get(self.year.clone())) && is_token(template.get(self.owner.clone()))
    }

    fn splice(&self, template: &[u8], owner: &str, year: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(template.len() + owner.len() + year.len());
        out.extend_from_slice(&template[..self.year.start]);
        if year.is_empty() {
            out.extend_from_slice(&template[self.year.clone()]);
        } else {
            out.extend_from_slice(year.as_bytes());
        }
        out.push(b' ');
        if owner.is_empty() {
            out.extend_from_slice(&template[self.owner.clone()]);
        } else {
            out.extend_from_slice(owner.as_bytes());
        }
        out.extend_from_slice(&template[self.owner.end..]);
        out
    }
}

fn is_token(span: Option<&[u8]>) -> bool {
    let Some(span) = span else {
        return false;
    };
    let end = span
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    matches!(
        (span.first(), span[..end].last()),
        (Some(b'<'), Some(b'>')) | (Some(b'['), Some(b']'))
    )
}

/// Fill the copyright `owner` and `year` into a license template.
///
/// With both values empty, or for a text without placeholders, the template
/// is returned as is. Otherwise the result is the template up to the year
/// token, the year, one space, the owner, and the template after the owner
/// token. An empty value leaves its original token in place.
///
/// # Panics
///
/// Panics if `template` is shorter than the layout of `license`, which means
/// the shipped text and its layout disagree.
pub fn substitute<'a>(
    license: License,
    variant: Variant,
    template: &'a [u8],
    owner: &str,
    year: &str,
) -> Cow<'a, [u8]> {
    if owner.is_empty() && year.is_empty() {
        return Cow::Borrowed(template);
    }
    let Some(layout) = layout(license, variant) else {
        return Cow::Borrowed(template);
    };
    assert!(
        template.len() >= layout.owner.end,
        "{license} {variant:?} template is shorter than its placeholder layout ({} < {} bytes)",
        template.len(),
        layout.owner.end,
    );
    Cow::Owned(layout.splice(template, owner, year))
}
