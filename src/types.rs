//! Core types for the RCA topic drill-down engine.

/// GrievanceId: opaque identifier of an underlying grievance record.
///
/// The engine never interprets these; it only carries them from leaf nodes to
/// the caller, which fetches full record details through its own channel.
pub type GrievanceId = String;

/// Extra: open passthrough map for server-supplied fields outside the
/// required node schema.
pub type Extra = serde_json::Map<String, serde_json::Value>;
