use serde::{Deserialize, Serialize};

/// Market snapshot for a single station (`commodity/3`).
///
/// `systemName`, `stationName`, `timestamp` and `commodities` are required;
/// a payload missing any of them fails to decode. `economies` and
/// `prohibited` were optional additions to the v3 schema and stay `None`
/// when the uploader omits them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
  pub system_name: String,
  pub station_name: String,
  pub timestamp: String,
  pub commodities: Vec<CommodityItem>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub economies: Option<Vec<Economy>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub prohibited: Option<Vec<String>>,
}

/// One line of a station market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityItem {
  pub name: String,
  pub mean_price: u64,
  pub buy_price: u64,
  pub stock: u64,
  pub stock_bracket: Bracket,
  pub sell_price: u64,
  pub demand: u64,
  pub demand_bracket: Bracket,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status_flags: Option<Vec<String>>,
}

/// Supply or demand bracket.
///
/// The game reports brackets as `0..=3`, but the schema also allows an
/// empty string when the bracket is unknown (typically for rare goods).
/// Both forms are kept verbatim so the record re-serializes unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bracket {
  Level(u8),
  Blank(String),
}

impl Bracket {
  /// The numeric level, or `None` for the blank form.
  pub fn level(&self) -> Option<u8> {
    match self {
      Self::Level(level) => Some(*level),
      Self::Blank(_) => None,
    }
  }
}

/// Share of a station's economy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Economy {
  pub name: String,
  pub proportion: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_full_snapshot() {
    let commodity: Commodity = serde_json::from_str(
      r#"{
        "systemName": "Eranin",
        "stationName": "Azeban City",
        "timestamp": "2017-03-01T12:00:00Z",
        "commodities": [{
          "name": "Gold",
          "meanPrice": 9401,
          "buyPrice": 9012,
          "stock": 120,
          "stockBracket": 2,
          "sellPrice": 8900,
          "demand": 0,
          "demandBracket": "",
          "statusFlags": ["Rare"]
        }],
        "economies": [{"name": "Agri", "proportion": 1.0}],
        "prohibited": ["Slaves"]
      }"#,
    )
    .unwrap();

    assert_eq!(commodity.system_name, "Eranin");
    let gold = &commodity.commodities[0];
    assert_eq!(gold.stock_bracket.level(), Some(2));
    assert_eq!(gold.demand_bracket, Bracket::Blank(String::new()));
    assert_eq!(gold.status_flags.as_deref(), Some(&["Rare".to_string()][..]));
    assert_eq!(commodity.prohibited.as_ref().map(Vec::len), Some(1));
  }

  #[test]
  fn missing_station_is_an_error() {
    let result: Result<Commodity, _> = serde_json::from_str(
      r#"{"systemName": "Eranin", "timestamp": "t", "commodities": []}"#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn price_must_be_numeric() {
    let result: Result<CommodityItem, _> = serde_json::from_str(
      r#"{"name": "Gold", "meanPrice": "cheap", "buyPrice": 1, "stock": 1,
          "stockBracket": 1, "sellPrice": 1, "demand": 1, "demandBracket": 1}"#,
    );
    assert!(result.is_err());
  }
}
