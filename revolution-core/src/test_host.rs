//! In-memory host that records every load and release

use heapless::Vec;

use crate::traits::{BitmapHost, HostError, ResourceId, SlotId};

/// Handle returned by [`RecordingHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestBitmap {
    pub resource: ResourceId,
    pub slot: SlotId,
}

/// Host operation log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    Load(SlotId, ResourceId),
    Release(SlotId, ResourceId),
}

#[derive(Default)]
pub struct RecordingHost {
    pub ops: Vec<HostOp, 256>,
    pub live: usize,
    pub fail_loads: bool,
    /// Slot whose releases fail with `HostError::Draw`
    pub fail_release: Option<SlotId>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loads(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Load(..)))
            .count()
    }

    pub fn releases(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, HostOp::Release(..)))
            .count()
    }

    pub fn reset_log(&mut self) {
        self.ops.clear();
    }
}

impl BitmapHost for RecordingHost {
    type Bitmap = TestBitmap;

    fn load(&mut self, resource: ResourceId, slot: SlotId) -> Result<TestBitmap, HostError> {
        if self.fail_loads {
            return Err(HostError::ResourceUnavailable);
        }
        let _ = self.ops.push(HostOp::Load(slot, resource));
        self.live += 1;
        Ok(TestBitmap { resource, slot })
    }

    fn release(&mut self, slot: SlotId, bitmap: &TestBitmap) -> Result<(), HostError> {
        assert_eq!(slot, bitmap.slot, "bitmap released from the wrong slot");
        if self.fail_release == Some(slot) {
            return Err(HostError::Draw);
        }
        let _ = self.ops.push(HostOp::Release(slot, bitmap.resource));
        self.live -= 1;
        Ok(())
    }
}
