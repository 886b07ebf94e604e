use std::fmt;

/// Prefix shared by every schema identifier on the feed.
pub const SCHEMA_BASE: &str = "http://schemas.elite-markets.net/eddn/";

/// Suffix uploaders append to mark non-production traffic.
pub const TEST_SUFFIX: &str = "/test";

/// Payload families carried on the feed.
///
/// A family groups every version of one payload shape. Routing is done on
/// the full identifier string, not on the family; this enum exists so
/// errors and diagnostics can name the family without string juggling.
///
/// ```text
/// ┌─────────────┬────────────────────────────────────┐
/// │ Family      │ Payload                            │
/// ├─────────────┼────────────────────────────────────┤
/// │ commodity   │ Market snapshot for one station    │
/// │ journal     │ Player journal event (polymorphic) │
/// │ outfitting  │ Modules sold at one station        │
/// │ blackmarket │ One black-market sale              │
/// │ shipyard    │ Ships sold at one station          │
/// └─────────────┴────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaFamily {
  Commodity,
  Journal,
  Outfitting,
  Blackmarket,
  Shipyard,
}

impl SchemaFamily {
  /// The family name as it appears in the identifier path.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Commodity => "commodity",
      Self::Journal => "journal",
      Self::Outfitting => "outfitting",
      Self::Blackmarket => "blackmarket",
      Self::Shipyard => "shipyard",
    }
  }

  /// Look up a family by its path segment. Unknown names yield `None`.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "commodity" => Some(Self::Commodity),
      "journal" => Some(Self::Journal),
      "outfitting" => Some(Self::Outfitting),
      "blackmarket" => Some(Self::Blackmarket),
      "shipyard" => Some(Self::Shipyard),
      _ => None,
    }
  }
}

impl fmt::Display for SchemaFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A structured view over a schema identifier string.
///
/// Identifiers have the shape `<SCHEMA_BASE><family>/<version>[/test]`.
/// This view is for diagnostics only (CLI output, log fields). The router
/// never consults it: dispatch is an exact-string lookup so that an
/// identifier that merely *looks* valid cannot slip through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemaRef<'a> {
  /// Family path segment, kept as text so unknown families still parse.
  pub family: &'a str,
  pub version: u32,
  pub test: bool,
}

impl<'a> SchemaRef<'a> {
  /// Split an identifier into family, version and test flag.
  ///
  /// Returns `None` when the string is not under [`SCHEMA_BASE`] or the
  /// version segment is not a number.
  pub fn parse(raw: &'a str) -> Option<Self> {
    let path = raw.strip_prefix(SCHEMA_BASE)?;
    let (path, test) = match path.strip_suffix(TEST_SUFFIX) {
      Some(stripped) => (stripped, true),
      None => (path, false),
    };
    let (family, version) = path.split_once('/')?;
    if family.is_empty() {
      return None;
    }
    let version = version.parse().ok()?;
    Some(Self { family, version, test })
  }

  /// The known family for this identifier, if any.
  pub fn known_family(&self) -> Option<SchemaFamily> {
    SchemaFamily::from_name(self.family)
  }
}

/// Returns true when the identifier carries the test-traffic suffix.
pub fn is_test_traffic(raw: &str) -> bool {
  raw.ends_with(TEST_SUFFIX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_production_identifier() {
    let parsed = SchemaRef::parse("http://schemas.elite-markets.net/eddn/commodity/3").unwrap();
    assert_eq!(parsed.family, "commodity");
    assert_eq!(parsed.version, 3);
    assert!(!parsed.test);
    assert_eq!(parsed.known_family(), Some(SchemaFamily::Commodity));
  }

  #[test]
  fn parses_test_identifier() {
    let parsed =
      SchemaRef::parse("http://schemas.elite-markets.net/eddn/journal/1/test").unwrap();
    assert_eq!(parsed.family, "journal");
    assert_eq!(parsed.version, 1);
    assert!(parsed.test);
  }

  #[test]
  fn unknown_family_still_parses() {
    let parsed = SchemaRef::parse("http://schemas.elite-markets.net/eddn/navroute/1").unwrap();
    assert_eq!(parsed.known_family(), None);
  }

  #[test]
  fn rejects_foreign_or_garbled_identifiers() {
    assert!(SchemaRef::parse("https://eddn.edcd.io/schemas/commodity/3").is_none());
    assert!(SchemaRef::parse("http://schemas.elite-markets.net/eddn/commodity").is_none());
    assert!(SchemaRef::parse("http://schemas.elite-markets.net/eddn/commodity/three").is_none());
    assert!(SchemaRef::parse("http://schemas.elite-markets.net/eddn//3").is_none());
  }

  #[test]
  fn family_names_roundtrip() {
    for family in [
      SchemaFamily::Commodity,
      SchemaFamily::Journal,
      SchemaFamily::Outfitting,
      SchemaFamily::Blackmarket,
      SchemaFamily::Shipyard,
    ] {
      assert_eq!(SchemaFamily::from_name(family.as_str()), Some(family));
    }
  }

  #[test]
  fn detects_test_suffix() {
    assert!(is_test_traffic("http://schemas.elite-markets.net/eddn/shipyard/2/test"));
    assert!(!is_test_traffic("http://schemas.elite-markets.net/eddn/shipyard/2"));
  }
}
