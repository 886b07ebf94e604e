use serde::{Deserialize, Serialize};

/// Sender metadata attached to every EDDN message.
///
/// The header is opaque to routing: the decoder copies it from the
/// envelope into the [`DecodedMessage`](crate::DecodedMessage) untouched.
/// Fields missing on the wire default to empty strings, since uploaders
/// are not consistent about what they send.
///
/// ```text
/// ┌──────────────────┬───────────────────────────────────────────┐
/// │ Wire key         │ Meaning                                   │
/// ├──────────────────┼───────────────────────────────────────────┤
/// │ gatewayTimestamp │ Set by the relay on receipt (optional)    │
/// │ softwareName     │ Uploading tool, e.g. "E:D Market Connector"│
/// │ softwareVersion  │ Version string of the uploading tool      │
/// │ uploaderID       │ Anonymised uploader identity              │
/// └──────────────────┴───────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Header {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gateway_timestamp: Option<String>,
  pub software_name: String,
  pub software_version: String,
  #[serde(rename = "uploaderID")]
  pub uploader_id: String,
}
