use serde::{Deserialize, Serialize};

/// Modules offered by a station's outfitting service (`outfitting/2`).
///
/// Module names are the internal symbol names the game uses, e.g.
/// `Hpt_PulseLaser_Fixed_Small`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfitting {
  pub system_name: String,
  pub station_name: String,
  pub timestamp: String,
  pub modules: Vec<String>,
}
