use serde::{Deserialize, Serialize};

/// Event name of a hyperspace jump.
pub const FSD_JUMP: &str = "FSDJump";
/// Event name of a docking.
pub const DOCKED: &str = "Docked";
/// Event name shared by star and planet scans.
pub const SCAN: &str = "Scan";
/// Key only present on star scans; its presence splits `Scan` events.
pub const STAR_TYPE_KEY: &str = "StarType";

/// A resolved journal event.
///
/// Journal payloads carry their own type tag in the `event` key. Three
/// tags are recognised, and `Scan` fans out into two variants depending
/// on whether the scanned body is a star:
///
/// ```text
/// ┌──────────────────┬──────────────────────┬─────────────┐
/// │ event            │ discriminator        │ Variant     │
/// ├──────────────────┼──────────────────────┼─────────────┤
/// │ "FSDJump"        │ —                    │ FsdJump     │
/// │ "Docked"         │ —                    │ Docked      │
/// │ "Scan"           │ "StarType" present   │ ScanStar    │
/// │ "Scan"           │ "StarType" absent    │ ScanPlanet  │
/// └──────────────────┴──────────────────────┴─────────────┘
/// ```
///
/// The journal is written incrementally by the game and uploaders strip
/// personal fields before relaying, so every event field other than
/// `event` itself is optional. A field that is present with the wrong
/// JSON type still fails the decode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum JournalEvent {
  FsdJump(FsdJump),
  Docked(Docked),
  ScanStar(ScanStar),
  ScanPlanet(ScanPlanet),
}

impl JournalEvent {
  /// The `event` tag this variant was decoded from.
  pub fn event_name(&self) -> &str {
    match self {
      Self::FsdJump(e) => &e.event,
      Self::Docked(e) => &e.event,
      Self::ScanStar(e) => &e.event,
      Self::ScanPlanet(e) => &e.event,
    }
  }
}

/// Arrival in a new star system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FsdJump {
  #[serde(rename = "timestamp")]
  pub timestamp: Option<String>,
  #[serde(rename = "event")]
  pub event: String,
  pub star_system: Option<String>,
  pub system_address: Option<u64>,
  pub star_pos: Option<[f64; 3]>,
  pub system_allegiance: Option<String>,
  pub system_economy: Option<String>,
  pub system_second_economy: Option<String>,
  pub system_government: Option<String>,
  pub system_security: Option<String>,
  pub population: Option<u64>,
  pub powers: Option<Vec<String>>,
  pub powerplay_state: Option<String>,
  pub factions: Option<Vec<Faction>>,
  pub system_faction: Option<String>,
  pub faction_state: Option<String>,
}

/// Minor faction present in a system, as listed in `FSDJump`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Faction {
  pub name: String,
  pub faction_state: Option<String>,
  pub government: Option<String>,
  pub influence: Option<f64>,
  pub allegiance: Option<String>,
}

/// Docking at a station or outpost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Docked {
  #[serde(rename = "timestamp")]
  pub timestamp: Option<String>,
  #[serde(rename = "event")]
  pub event: String,
  pub station_name: Option<String>,
  pub station_type: Option<String>,
  pub star_system: Option<String>,
  pub star_pos: Option<[f64; 3]>,
  #[serde(rename = "MarketID")]
  pub market_id: Option<u64>,
  pub station_faction: Option<String>,
  pub faction_state: Option<String>,
  pub station_government: Option<String>,
  pub station_allegiance: Option<String>,
  pub station_economy: Option<String>,
  #[serde(rename = "DistFromStarLS")]
  pub dist_from_star_ls: Option<f64>,
  pub station_services: Option<Vec<String>>,
}

/// Detailed scan of a star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanStar {
  #[serde(rename = "timestamp")]
  pub timestamp: Option<String>,
  #[serde(rename = "event")]
  pub event: String,
  pub star_system: Option<String>,
  pub star_pos: Option<[f64; 3]>,
  pub body_name: Option<String>,
  #[serde(rename = "DistanceFromArrivalLS")]
  pub distance_from_arrival_ls: Option<f64>,
  /// Stellar class, e.g. `K` or `DA`. The key is what marks a star scan;
  /// an explicit `null` value decodes as `None`.
  pub star_type: Option<String>,
  pub subclass: Option<u8>,
  pub stellar_mass: Option<f64>,
  pub radius: Option<f64>,
  pub absolute_magnitude: Option<f64>,
  #[serde(rename = "Age_MY")]
  pub age_my: Option<u64>,
  pub surface_temperature: Option<f64>,
  pub luminosity: Option<String>,
  pub semi_major_axis: Option<f64>,
  pub eccentricity: Option<f64>,
  pub orbital_inclination: Option<f64>,
  pub periapsis: Option<f64>,
  pub orbital_period: Option<f64>,
  pub rotation_period: Option<f64>,
  pub rings: Option<Vec<Ring>>,
}

/// Detailed scan of a planet or moon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanPlanet {
  #[serde(rename = "timestamp")]
  pub timestamp: Option<String>,
  #[serde(rename = "event")]
  pub event: String,
  pub star_system: Option<String>,
  pub star_pos: Option<[f64; 3]>,
  pub body_name: Option<String>,
  #[serde(rename = "DistanceFromArrivalLS")]
  pub distance_from_arrival_ls: Option<f64>,
  pub tidal_lock: Option<bool>,
  pub terraform_state: Option<String>,
  pub planet_class: Option<String>,
  pub atmosphere: Option<String>,
  pub atmosphere_type: Option<String>,
  pub volcanism: Option<String>,
  #[serde(rename = "MassEM")]
  pub mass_em: Option<f64>,
  pub radius: Option<f64>,
  pub surface_gravity: Option<f64>,
  pub surface_temperature: Option<f64>,
  pub surface_pressure: Option<f64>,
  pub landable: Option<bool>,
  pub materials: Option<Vec<Material>>,
  pub semi_major_axis: Option<f64>,
  pub eccentricity: Option<f64>,
  pub orbital_inclination: Option<f64>,
  pub periapsis: Option<f64>,
  pub orbital_period: Option<f64>,
  pub rotation_period: Option<f64>,
  pub rings: Option<Vec<Ring>>,
}

/// Ring or belt around a scanned body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ring {
  pub name: String,
  pub ring_class: Option<String>,
  #[serde(rename = "MassMT")]
  pub mass_mt: Option<f64>,
  pub inner_rad: Option<f64>,
  pub outer_rad: Option<f64>,
}

/// Surface material and its share of the body's composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Material {
  pub name: String,
  pub percent: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fsd_jump_reads_pascal_case_keys() {
    let jump: FsdJump = serde_json::from_str(
      r#"{"timestamp": "2017-03-01T12:00:00Z", "event": "FSDJump",
          "StarSystem": "Sol", "StarPos": [0.0, 0.0, 0.0], "Population": 22780919531,
          "Factions": [{"Name": "Mother Gaia", "Influence": 0.27}]}"#,
    )
    .unwrap();
    assert_eq!(jump.star_system.as_deref(), Some("Sol"));
    assert_eq!(jump.star_pos, Some([0.0, 0.0, 0.0]));
    assert_eq!(jump.population, Some(22_780_919_531));
    assert_eq!(jump.factions.unwrap()[0].name, "Mother Gaia");
  }

  #[test]
  fn docked_reads_irregular_keys() {
    let docked: Docked = serde_json::from_str(
      r#"{"event": "Docked", "MarketID": 128016640, "DistFromStarLS": 505.5}"#,
    )
    .unwrap();
    assert_eq!(docked.market_id, Some(128_016_640));
    assert_eq!(docked.dist_from_star_ls, Some(505.5));
    assert_eq!(docked.station_name, None);
  }

  #[test]
  fn star_scan_accepts_null_star_type() {
    let star: ScanStar =
      serde_json::from_str(r#"{"event": "Scan", "StarType": null, "Subclass": 4}"#).unwrap();
    assert_eq!(star.star_type, None);
    assert_eq!(star.subclass, Some(4));
  }

  #[test]
  fn planet_scan_reads_materials() {
    let planet: ScanPlanet = serde_json::from_str(
      r#"{"event": "Scan", "BodyName": "Earth", "MassEM": 1.0, "Landable": false,
          "Materials": [{"Name": "iron", "Percent": 21.5}]}"#,
    )
    .unwrap();
    assert_eq!(planet.mass_em, Some(1.0));
    assert_eq!(planet.materials.unwrap()[0].name, "iron");
  }

  #[test]
  fn wrong_type_for_present_field_fails() {
    let result: Result<ScanPlanet, _> =
      serde_json::from_str(r#"{"event": "Scan", "Landable": "yes"}"#);
    assert!(result.is_err());
  }

  #[test]
  fn event_name_reports_tag() {
    let event = JournalEvent::Docked(
      serde_json::from_str(r#"{"event": "Docked"}"#).unwrap(),
    );
    assert_eq!(event.event_name(), DOCKED);
  }
}
