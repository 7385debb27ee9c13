//! Persisted form of a stateful stream.
//!
//! A snapshot is the generator kind plus its 64-bit state. The persisted
//! schema around it belongs to the caller; this type only guarantees that a
//! snapshot is never restored into a generator of a different kind.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::source::StatefulSource;

/// A stateful source that can be named in a [`SourceSnapshot`].
pub trait SnapshotSource: StatefulSource + Sized {
    /// Stable identifier written into snapshots. Renaming it orphans every
    /// snapshot already saved.
    const KIND: &'static str;

    /// Builds a source that behaves exactly like one given `state` through
    /// [`StatefulSource::set_state`].
    fn from_state(state: u64) -> Self;
}

/// Serializable capture of a source's kind and state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// The [`SnapshotSource::KIND`] of the captured generator.
    pub kind: String,
    /// The captured state.
    pub state: u64,
}

impl SourceSnapshot {
    /// Captures `source` without advancing it.
    #[must_use]
    pub fn capture<S: SnapshotSource>(source: &S) -> Self {
        let state = source.state();
        tracing::debug!(kind = S::KIND, state, "captured source snapshot");
        Self {
            kind: S::KIND.to_owned(),
            state,
        }
    }

    /// Builds a fresh source positioned where the captured one was.
    ///
    /// # Errors
    ///
    /// Returns `RngError::SnapshotKindMismatch` if the snapshot was taken from
    /// a different kind of generator.
    pub fn restore<S: SnapshotSource>(&self) -> Result<S, RngError> {
        self.check_kind::<S>()?;
        tracing::debug!(kind = S::KIND, state = self.state, "restored source");
        Ok(S::from_state(self.state))
    }

    /// Repositions an existing source where the captured one was.
    ///
    /// # Errors
    ///
    /// Returns `RngError::SnapshotKindMismatch` if the snapshot was taken from
    /// a different kind of generator. `target` is left untouched.
    pub fn restore_into<S: SnapshotSource>(&self, target: &mut S) -> Result<(), RngError> {
        self.check_kind::<S>()?;
        target.set_state(self.state);
        tracing::debug!(kind = S::KIND, state = self.state, "restored source in place");
        Ok(())
    }

    fn check_kind<S: SnapshotSource>(&self) -> Result<(), RngError> {
        if self.kind == S::KIND {
            return Ok(());
        }
        tracing::warn!(
            expected = S::KIND,
            found = %self.kind,
            "rejected snapshot restore"
        );
        Err(RngError::SnapshotKindMismatch {
            expected: S::KIND.to_owned(),
            found: self.kind.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SnapshotSource, SourceSnapshot};
    use crate::error::RngError;
    use crate::source::{BitSource, StatefulSource};

    #[derive(Debug)]
    struct Step {
        state: u64,
    }

    impl BitSource for Step {
        fn next_u32(&mut self) -> u32 {
            self.state = self.state.wrapping_mul(0x5851_F42D_4C95_7F2D).wrapping_add(1);
            #[allow(clippy::cast_possible_truncation)]
            let word = (self.state >> 32) as u32;
            word
        }
    }

    impl StatefulSource for Step {
        fn state(&self) -> u64 {
            self.state
        }

        fn set_state(&mut self, state: u64) {
            self.state = state;
        }

        fn fork(&self) -> Self {
            Self { state: self.state }
        }
    }

    impl SnapshotSource for Step {
        const KIND: &'static str = "step";

        fn from_state(state: u64) -> Self {
            Self { state }
        }
    }

    #[derive(Debug)]
    struct Other(Step);

    impl BitSource for Other {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }
    }

    impl StatefulSource for Other {
        fn state(&self) -> u64 {
            self.0.state()
        }

        fn set_state(&mut self, state: u64) {
            self.0.set_state(state);
        }

        fn fork(&self) -> Self {
            Self(self.0.fork())
        }
    }

    impl SnapshotSource for Other {
        const KIND: &'static str = "other";

        fn from_state(state: u64) -> Self {
            Self(Step { state })
        }
    }

    #[test]
    fn test_capture_does_not_advance() {
        let source = Step { state: 42 };
        let snapshot = SourceSnapshot::capture(&source);
        assert_eq!(snapshot.kind, "step");
        assert_eq!(snapshot.state, 42);
        assert_eq!(source.state(), 42);
    }

    #[test]
    fn test_restore_resumes_stream() {
        let mut source = Step { state: 9 };
        source.next_u32();
        let snapshot = SourceSnapshot::capture(&source);
        let expected: Vec<u32> = (0..5).map(|_| source.next_u32()).collect();

        let mut restored: Step = snapshot.restore().unwrap();
        let actual: Vec<u32> = (0..5).map(|_| restored.next_u32()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_restore_into_rewinds_existing_source() {
        let mut source = Step { state: 1 };
        let snapshot = SourceSnapshot::capture(&source);
        let first = source.next_u32();
        source.next_u32();

        snapshot.restore_into(&mut source).unwrap();
        assert_eq!(source.next_u32(), first);
    }

    #[test]
    fn test_restore_rejects_other_kind() {
        let snapshot = SourceSnapshot::capture(&Step { state: 3 });
        let result: Result<Other, RngError> = snapshot.restore();
        assert_eq!(
            result.unwrap_err(),
            RngError::SnapshotKindMismatch {
                expected: "other".to_owned(),
                found: "step".to_owned(),
            }
        );
    }

    #[test]
    fn test_restore_into_other_kind_leaves_target_untouched() {
        let snapshot = SourceSnapshot::capture(&Step { state: 3 });
        let mut target = Other(Step { state: 77 });
        assert!(snapshot.restore_into(&mut target).is_err());
        assert_eq!(target.state(), 77);
    }

    #[test]
    fn test_snapshot_serializes_as_plain_fields() {
        let snapshot = SourceSnapshot {
            kind: "step".to_owned(),
            state: u64::MAX,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "step", "state": 18_446_744_073_709_551_615_u64 })
        );
        let back: SourceSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
