//! Snapshot/restore of the tick-derived gesture state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use openmotion_gesture::{ShakeState, SwingState, TiltState};

/// Errors from snapshot encode/restore.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot bytes do not decode to a gesture-state triple.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
    /// Encoding the gesture state failed.
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}

/// Exactly the state captured across save/rewind: the three gesture states
/// and nothing else.
///
/// The calibration block and configuration stay out on purpose — they are
/// reset-derived and reproducible, not history-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSnapshot {
    /// Tilt state.
    pub tilt: TiltState,
    /// Swing state.
    pub swing: SwingState,
    /// Shake state.
    pub shake: ShakeState,
}

impl GestureSnapshot {
    /// Serialize to the opaque snapshot byte sequence.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serde::encode_to_vec(self, bincode::config::legacy())?)
    }

    /// Decode a snapshot byte sequence produced by [`Self::to_bytes`].
    ///
    /// # Errors
    /// Returns [`SnapshotError::CorruptSnapshot`] when the bytes fail to
    /// decode or carry trailing garbage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let (snapshot, consumed): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::legacy())
                .map_err(|err| SnapshotError::CorruptSnapshot(err.to_string()))?;
        if consumed != bytes.len() {
            return Err(SnapshotError::CorruptSnapshot(format!(
                "{} trailing bytes",
                bytes.len() - consumed
            )));
        }
        Ok(snapshot)
    }
}
