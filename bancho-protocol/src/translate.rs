//! Packet id translation between logical ids and per-build raw wire ids.
//!
//! Each build's remap is an affine shift plus a handful of explicit swaps.
//! The rules are evaluated once at codec construction and materialized into
//! two dense lookup tables, so the per-packet hot path is a pair of array
//! indexes. Ids beyond the tables pass through unchanged.

use crate::packet;

const TABLE_LEN: usize = packet::MAX_PACKET_ID as usize + 17;

/// Bidirectional id remap for one client build.
#[derive(Clone)]
pub struct IdTranslation {
    to_raw: Box<[u16]>,
    to_logical: Box<[u16]>,
}

impl IdTranslation {
    /// Materializes the remap rules into lookup tables.
    pub fn from_rules(logical_to_raw: fn(u16) -> u16, raw_to_logical: fn(u16) -> u16) -> Self {
        Self {
            to_raw: (0..TABLE_LEN as u16).map(logical_to_raw).collect(),
            to_logical: (0..TABLE_LEN as u16).map(raw_to_logical).collect(),
        }
    }

    /// Remap used by a build with no renumbering at all.
    pub fn identity() -> Self {
        Self::from_rules(|id| id, |id| id)
    }

    pub fn logical_to_raw(&self, id: u16) -> u16 {
        self.to_raw.get(id as usize).copied().unwrap_or(id)
    }

    pub fn raw_to_logical(&self, id: u16) -> u16 {
        self.to_logical.get(id as usize).copied().unwrap_or(id)
    }
}

impl std::fmt::Debug for IdTranslation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdTranslation")
            .field("entries", &self.to_raw.len())
            .finish()
    }
}
