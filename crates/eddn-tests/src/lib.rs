//! Fixture builders for the EDDN integration tests and benches.
//!
//! Messages on the feed are zlib-compressed JSON envelopes. These helpers
//! build envelopes from `serde_json` values and compress them the same
//! way a relay would, so tests can talk about payloads instead of bytes.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use serde_json::{Value, json};

/// Schema identifier prefix used by every fixture.
pub const SCHEMA_BASE: &str = "http://schemas.elite-markets.net/eddn/";

/// Full identifier for a `family/version[/test]` path.
#[must_use]
pub fn schema(path: &str) -> String {
    format!("{SCHEMA_BASE}{path}")
}

/// zlib-compress a byte slice at the default level.
///
/// # Panics
///
/// Never in practice: writes go to an in-memory buffer.
#[must_use]
pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).expect("in-memory write");
    enc.finish().expect("in-memory finish")
}

/// A header as an uploader would send it.
#[must_use]
pub fn header() -> Value {
    json!({
        "uploaderID": "Cmdr Jameson",
        "softwareName": "E:D Market Connector",
        "softwareVersion": "2.3.0",
        "gatewayTimestamp": "2017-03-01T12:00:00.123456Z"
    })
}

/// Envelope JSON for `schema_path` carrying `message`.
#[must_use]
pub fn envelope(schema_path: &str, message: &Value) -> Value {
    json!({
        "$schemaRef": schema(schema_path),
        "header": header(),
        "message": message,
    })
}

/// Compressed message bytes, ready for the decoder.
#[must_use]
pub fn message(schema_path: &str, payload: &Value) -> Vec<u8> {
    deflate(envelope(schema_path, payload).to_string().as_bytes())
}

/// A valid `commodity/3` payload.
#[must_use]
pub fn commodity_payload() -> Value {
    json!({
        "systemName": "Eranin",
        "stationName": "Azeban City",
        "timestamp": "2017-03-01T12:00:00Z",
        "commodities": [
            {
                "name": "Gold",
                "meanPrice": 9401,
                "buyPrice": 9012,
                "stock": 120,
                "stockBracket": 2,
                "sellPrice": 8900,
                "demand": 1,
                "demandBracket": "",
                "statusFlags": ["Rare"]
            },
            {
                "name": "Hydrogen Fuel",
                "meanPrice": 110,
                "buyPrice": 105,
                "stock": 30000,
                "stockBracket": 3,
                "sellPrice": 101,
                "demand": 0,
                "demandBracket": 0
            }
        ],
        "prohibited": ["Slaves", "Imperial Slaves"]
    })
}

/// A valid `outfitting/2` payload.
#[must_use]
pub fn outfitting_payload() -> Value {
    json!({
        "systemName": "Sol",
        "stationName": "Galileo",
        "timestamp": "2017-03-01T12:00:00Z",
        "modules": ["Hpt_PulseLaser_Fixed_Small", "Int_Engine_Size2_Class1"]
    })
}

/// A valid `blackmarket/1` payload.
#[must_use]
pub fn blackmarket_payload() -> Value {
    json!({
        "systemName": "Lave",
        "stationName": "Lave Station",
        "timestamp": "2017-03-01T12:00:00Z",
        "name": "Slaves",
        "sellPrice": 14000,
        "prohibited": true
    })
}

/// A valid `shipyard/2` payload.
#[must_use]
pub fn shipyard_payload() -> Value {
    json!({
        "systemName": "Shinrarta Dezhra",
        "stationName": "Jameson Memorial",
        "timestamp": "2017-03-01T12:00:00Z",
        "ships": ["Anaconda", "Python", "Asp"]
    })
}

/// A journal `FSDJump` payload.
#[must_use]
pub fn fsd_jump_payload() -> Value {
    json!({
        "timestamp": "2017-03-01T12:00:00Z",
        "event": "FSDJump",
        "StarSystem": "Sol",
        "SystemAddress": 10477373803u64,
        "StarPos": [0.0, 0.0, 0.0],
        "SystemAllegiance": "Federation",
        "SystemEconomy": "$economy_Refinery;",
        "SystemGovernment": "$government_Democracy;",
        "SystemSecurity": "$SYSTEM_SECURITY_high;",
        "Population": 22780919531u64,
        "Powers": ["Zachary Hudson"],
        "PowerplayState": "Controlled",
        "SystemFaction": "Mother Gaia",
        "Factions": [
            {"Name": "Mother Gaia", "FactionState": "Boom", "Government": "Democracy",
             "Influence": 0.27, "Allegiance": "Federation"}
        ]
    })
}

/// A journal `Docked` payload.
#[must_use]
pub fn docked_payload() -> Value {
    json!({
        "timestamp": "2017-03-01T12:00:00Z",
        "event": "Docked",
        "StationName": "Galileo",
        "StationType": "Orbis",
        "StarSystem": "Sol",
        "StarPos": [0.0, 0.0, 0.0],
        "MarketID": 128016640u64,
        "StationFaction": "Mother Gaia",
        "StationGovernment": "$government_Democracy;",
        "StationAllegiance": "Federation",
        "StationEconomy": "$economy_Refinery;",
        "DistFromStarLS": 505.5,
        "StationServices": ["Dock", "Autodock", "Commodities"]
    })
}
