use serde::Serialize;

use crate::blackmarket::Blackmarket;
use crate::commodity::Commodity;
use crate::header::Header;
use crate::journal::JournalEvent;
use crate::outfitting::Outfitting;
use crate::schema::SchemaFamily;
use crate::shipyard::Shipyard;

/// A fully decoded EDDN message.
///
/// This is what the decoder hands back for every successful decode:
/// the identifier it was routed on, the sender header exactly as it
/// arrived, and exactly one typed payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecodedMessage {
  pub schema_ref: String,
  pub header: Header,
  pub payload: Payload,
}

/// The typed payload of a message, one variant per supported schema.
///
/// ```text
/// ┌─────────────┬───────────────────────┐
/// │ Variant     │ Schema                │
/// ├─────────────┼───────────────────────┤
/// │ Commodity   │ commodity/3           │
/// │ Journal     │ journal/1             │
/// │ Outfitting  │ outfitting/2          │
/// │ Blackmarket │ blackmarket/1         │
/// │ Shipyard    │ shipyard/2            │
/// └─────────────┴───────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Payload {
  Commodity(Commodity),
  Journal(JournalEvent),
  Outfitting(Outfitting),
  Blackmarket(Blackmarket),
  Shipyard(Shipyard),
}

impl Payload {
  pub fn family(&self) -> SchemaFamily {
    match self {
      Self::Commodity(_) => SchemaFamily::Commodity,
      Self::Journal(_) => SchemaFamily::Journal,
      Self::Outfitting(_) => SchemaFamily::Outfitting,
      Self::Blackmarket(_) => SchemaFamily::Blackmarket,
      Self::Shipyard(_) => SchemaFamily::Shipyard,
    }
  }
}
