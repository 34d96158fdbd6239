//! Kind tags discriminating satellite rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// The schema a satellite row follows, identified by its MIME-type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Given / family name
    StructuredName,
    /// Phone number
    Phone,
    /// Email address
    Email,
    /// Dated event (birthday, anniversary, ...)
    Event,
    /// Company name and job title
    Organization,
    /// Website URL
    Website,
    /// Free-form note
    Note,
    /// Postal address
    StructuredPostal,
}

impl Kind {
    /// All known kinds
    pub const ALL: [Kind; 8] = [
        Kind::StructuredName,
        Kind::Phone,
        Kind::Email,
        Kind::Event,
        Kind::Organization,
        Kind::Website,
        Kind::Note,
        Kind::StructuredPostal,
    ];

    /// Get the tag stored in the `mimetype` column
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::StructuredName => "vnd.android.cursor.item/name",
            Self::Phone => "vnd.android.cursor.item/phone_v2",
            Self::Email => "vnd.android.cursor.item/email_v2",
            Self::Event => "vnd.android.cursor.item/contact_event",
            Self::Organization => "vnd.android.cursor.item/organization",
            Self::Website => "vnd.android.cursor.item/website",
            Self::Note => "vnd.android.cursor.item/note",
            Self::StructuredPostal => "vnd.android.cursor.item/postal-address_v2",
        }
    }

    /// Resolve a tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Kind> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(Kind::from_tag("vnd.android.cursor.item/sip_address"), None);
    }
}
