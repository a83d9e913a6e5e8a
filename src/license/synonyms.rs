use super::License;

/// Every accepted spelling, upper-cased, and the license it names.
pub(super) static SYNONYMS: &[(&str, License)] = &[
    ("APACHE LICENSE 2.0", License::Apache20),
    ("APACHE LICENSE 2", License::Apache20),
    ("APACHE-2.0", License::Apache20),
    ("APACHE-2", License::Apache20),
    ("APACHE20", License::Apache20),
    ("APACHE2", License::Apache20),
    ("BSD-2-CLAUSE LICENSE", License::Bsd2Clause),
    ("BSD-2-CLAUSE SIMPLIFIED LICENSE", License::Bsd2Clause),
    ("BSD-2-CLAUSE", License::Bsd2Clause),
    ("BSD2CLAUSE", License::Bsd2Clause),
    ("BSD-2", License::Bsd2Clause),
    ("BSD2", License::Bsd2Clause),
    ("BSD-3-CLAUSE LICENSE", License::Bsd3Clause),
    ("BSD-3-CLAUSE NEW OR REVISED LICENSE", License::Bsd3Clause),
    ("BSD-3-CLAUSE", License::Bsd3Clause),
    ("BSD3CLAUSE", License::Bsd3Clause),
    ("BSD-3", License::Bsd3Clause),
    ("BSD3", License::Bsd3Clause),
    ("GNU GENERAL PUBLIC LICENSE V2.0 ONLY", License::Gpl20),
    ("GNU GENERAL PUBLIC LICENSE V2 ONLY", License::Gpl20),
    ("GNU GENERAL PUBLIC LICENSE V2.0", License::Gpl20),
    ("GNU GENERAL PUBLIC LICENSE V2", License::Gpl20),
    ("GENERAL PUBLIC LICENSE V2.0 ONLY", License::Gpl20),
    ("GENERAL PUBLIC LICENSE V2.0", License::Gpl20),
    ("GENERAL PUBLIC LICENSE V2 ONLY", License::Gpl20),
    ("GENERAL PUBLIC LICENSE V2", License::Gpl20),
    ("GPL-2.0", License::Gpl20),
    ("GPL-2", License::Gpl20),
    ("GPL-20", License::Gpl20),
    ("GPL20", License::Gpl20),
    ("GPL2", License::Gpl20),
    ("GNU GENERAL PUBLIC LICENSE V3.0 ONLY", License::Gpl30),
    ("GNU GENERAL PUBLIC LICENSE V3 ONLY", License::Gpl30),
    ("GNU GENERAL PUBLIC LICENSE V3.0", License::Gpl30),
    ("GNU GENERAL PUBLIC LICENSE V3", License::Gpl30),
    ("GENERAL PUBLIC LICENSE V3.0 ONLY", License::Gpl30),
    ("GENERAL PUBLIC LICENSE V3.0", License::Gpl30),
    ("GENERAL PUBLIC LICENSE V3 ONLY", License::Gpl30),
    ("GENERAL PUBLIC LICENSE V3", License::Gpl30),
    ("GPL-3.0", License::Gpl30),
    ("GPL-3", License::Gpl30),
    ("GPL-30", License::Gpl30),
    ("GPL30", License::Gpl30),
    ("GPL3", License::Gpl30),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2.0 ONLY", License::Lgpl20),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2 ONLY", License::Lgpl20),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2.0", License::Lgpl20),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2", License::Lgpl20),
    ("LESSER GENERAL PUBLIC LICENSE V2.0 ONLY", License::Lgpl20),
    ("LESSER GENERAL PUBLIC LICENSE V2 ONLY", License::Lgpl20),
    ("LESSER GENERAL PUBLIC LICENSE V2.0", License::Lgpl20),
    ("LESSER GENERAL PUBLIC LICENSE V2", License::Lgpl20),
    ("LGPL-2.0", License::Lgpl20),
    ("LGPL-2", License::Lgpl20),
    ("LGPL20", License::Lgpl20),
    ("LGPL2", License::Lgpl20),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2.1 ONLY", License::Lgpl21),
    ("GNU LESSER GENERAL PUBLIC LICENSE V2.1", License::Lgpl21),
    ("LESSER GENERAL PUBLIC LICENSE V2.1 ONLY", License::Lgpl21),
    ("LESSER GENERAL PUBLIC LICENSE V2.1", License::Lgpl21),
    ("LGPL-2.1", License::Lgpl21),
    ("LGPL21", License::Lgpl21),
    ("GNU LESSER GENERAL PUBLIC LICENSE V3.0 ONLY", License::Lgpl30),
    ("GNU LESSER GENERAL PUBLIC LICENSE V3 ONLY", License::Lgpl30),
    ("GNU LESSER GENERAL PUBLIC LICENSE V3.0", License::Lgpl30),
    ("GNU LESSER GENERAL PUBLIC LICENSE V3", License::Lgpl30),
    ("LESSER GENERAL PUBLIC LICENSE V3.0 ONLY", License::Lgpl30),
    ("LESSER GENERAL PUBLIC LICENSE V3 ONLY", License::Lgpl30),
    ("LESSER GENERAL PUBLIC LICENSE V3.0", License::Lgpl30),
    ("LESSER GENERAL PUBLIC LICENSE V3", License::Lgpl30),
    ("LGPL-3.0", License::Lgpl30),
    ("LGPL-3", License::Lgpl30),
    ("LGPL30", License::Lgpl30),
    ("LGPL3", License::Lgpl30),
    ("MIT LICENSE", License::Mit),
    ("MIT", License::Mit),
    ("MOZILLA PUBLIC LICENSE 2.0", License::Mpl20),
    ("MOZILLA PUBLIC LICENSE 2", License::Mpl20),
    ("MPL-2.0", License::Mpl20),
    ("MPL-2", License::Mpl20),
    ("MPL20", License::Mpl20),
    ("MPL2", License::Mpl20),
];

/// Exact lookup; `key` must already be upper-cased.
pub(super) fn lookup(key: &str) -> Option<License> {
    SYNONYMS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, license)| *license)
}
