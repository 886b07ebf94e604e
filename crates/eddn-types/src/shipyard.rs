use serde::{Deserialize, Serialize};

/// Ships for sale at a station's shipyard (`shipyard/2`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipyard {
  pub system_name: String,
  pub station_name: String,
  pub timestamp: String,
  pub ships: Vec<String>,
}
