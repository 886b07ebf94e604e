#![warn(clippy::pedantic)]

pub mod header;
pub mod schema;
pub mod commodity;
pub mod outfitting;
pub mod blackmarket;
pub mod shipyard;
pub mod journal;
pub mod payload;

pub use blackmarket::Blackmarket;
pub use commodity::{Bracket, Commodity, CommodityItem, Economy};
pub use header::Header;
pub use journal::{Docked, Faction, FsdJump, JournalEvent, Material, Ring, ScanPlanet, ScanStar};
pub use outfitting::Outfitting;
pub use payload::{DecodedMessage, Payload};
pub use schema::{SchemaFamily, SchemaRef};
pub use shipyard::Shipyard;
