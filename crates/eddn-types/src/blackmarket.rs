use serde::{Deserialize, Serialize};

/// A single commodity sold on a station's black market (`blackmarket/1`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blackmarket {
  pub system_name: String,
  pub station_name: String,
  pub timestamp: String,
  pub name: String,
  pub sell_price: u64,
  /// Whether the commodity is illegal at this station.
  pub prohibited: bool,
}
