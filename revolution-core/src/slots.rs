//! Slot bookkeeping
//!
//! A slot remembers which value it shows together with the bitmap that
//! shows it. Both live in one `Option`, so a slot can never record a value
//! without holding its bitmap, or the other way round.

use crate::traits::{BitmapHost, HostError, SlotId, SlotKind};

struct Shown<B> {
    value: u8,
    bitmap: B,
}

/// A fixed screen position holding one digit or weekday bitmap
pub struct Slot<B> {
    id: SlotId,
    shown: Option<Shown<B>>,
}

impl<B> Slot<B> {
    /// Create an empty slot
    pub const fn new(kind: SlotKind, number: u8) -> Self {
        Self {
            id: SlotId::new(kind, number),
            shown: None,
        }
    }

    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Value currently shown, `None` when empty
    pub fn value(&self) -> Option<u8> {
        self.shown.as_ref().map(|s| s.value)
    }

    /// Bitmap currently loaded, `None` when empty
    pub fn bitmap(&self) -> Option<&B> {
        self.shown.as_ref().map(|s| &s.bitmap)
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_none()
    }

    /// Show `value` in this slot
    ///
    /// Does nothing if the slot already shows `value`, or if `value` is out
    /// of range for the slot kind. Otherwise the old bitmap is released
    /// before the new one is loaded.
    ///
    /// Returns whether the slot changed.
    pub fn show<H>(&mut self, host: &mut H, value: u8) -> Result<bool, HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        let Some(resource) = self.id.kind.resource(value) else {
            return Ok(false);
        };

        if self.value() == Some(value) {
            return Ok(false);
        }

        self.clear(host)?;

        let bitmap = host.load(resource, self.id)?;
        self.shown = Some(Shown { value, bitmap });
        Ok(true)
    }

    /// Release the bitmap, leaving the slot empty
    ///
    /// On a failed release the slot keeps its value and bitmap.
    ///
    /// Returns whether anything was released.
    pub fn clear<H>(&mut self, host: &mut H) -> Result<bool, HostError>
    where
        H: BitmapHost<Bitmap = B>,
    {
        let Some(shown) = &self.shown else {
            return Ok(false);
        };

        // Keep the handle if the host could not free it
        host.release(self.id, &shown.bitmap)?;
        self.shown = None;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::{HostOp, RecordingHost, TestBitmap};
    use crate::traits::ResourceId;
    use crate::time::Weekday;

    #[test]
    fn test_new_slot_is_empty() {
        let slot: Slot<TestBitmap> = Slot::new(SlotKind::Time, 0);
        assert!(slot.is_empty());
        assert_eq!(slot.value(), None);
        assert!(slot.bitmap().is_none());
    }

    #[test]
    fn test_first_show_loads() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Date, 2);

        assert_eq!(slot.show(&mut host, 7), Ok(true));
        assert_eq!(slot.value(), Some(7));
        assert_eq!(
            host.ops.as_slice(),
            &[HostOp::Load(
                SlotId::new(SlotKind::Date, 2),
                ResourceId::DateDigit(7)
            )]
        );
    }

    #[test]
    fn test_same_value_is_noop() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Time, 1);

        slot.show(&mut host, 3).unwrap();
        host.reset_log();

        assert_eq!(slot.show(&mut host, 3), Ok(false));
        assert!(host.ops.is_empty());
        assert_eq!(host.live, 1);
    }

    #[test]
    fn test_change_releases_then_loads() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Year, 1);
        let id = slot.id();

        slot.show(&mut host, 5).unwrap();
        host.reset_log();

        assert_eq!(slot.show(&mut host, 6), Ok(true));
        assert_eq!(
            host.ops.as_slice(),
            &[
                HostOp::Release(id, ResourceId::YearDigit(5)),
                HostOp::Load(id, ResourceId::YearDigit(6)),
            ]
        );
        assert_eq!(host.live, 1);
        assert_eq!(
            slot.bitmap().map(|b| b.resource),
            Some(ResourceId::YearDigit(6))
        );
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Time, 3);

        assert_eq!(slot.show(&mut host, 10), Ok(false));
        assert!(slot.is_empty());

        slot.show(&mut host, 4).unwrap();
        host.reset_log();
        assert_eq!(slot.show(&mut host, 200), Ok(false));
        assert_eq!(slot.value(), Some(4));
        assert!(host.ops.is_empty());
    }

    #[test]
    fn test_day_slot_range() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Day, 0);

        assert_eq!(slot.show(&mut host, 7), Ok(false));
        assert_eq!(slot.show(&mut host, 6), Ok(true));
        assert_eq!(
            slot.bitmap().map(|b| b.resource),
            Some(ResourceId::Day(Weekday::Saturday))
        );
    }

    #[test]
    fn test_clear() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Time, 0);

        assert_eq!(slot.clear(&mut host), Ok(false));

        slot.show(&mut host, 1).unwrap();
        assert_eq!(slot.clear(&mut host), Ok(true));
        assert!(slot.is_empty());
        assert_eq!(host.live, 0);

        // Showing again after a clear loads fresh
        assert_eq!(slot.show(&mut host, 1), Ok(true));
    }

    #[test]
    fn test_failed_load_leaves_slot_empty() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Time, 2);

        slot.show(&mut host, 2).unwrap();
        host.fail_loads = true;

        assert_eq!(
            slot.show(&mut host, 3),
            Err(HostError::ResourceUnavailable)
        );
        assert!(slot.is_empty());
        assert_eq!(host.live, 0);
    }

    #[test]
    fn test_failed_release_keeps_bitmap() {
        let mut host = RecordingHost::new();
        let mut slot = Slot::new(SlotKind::Time, 2);
        slot.show(&mut host, 4).unwrap();

        host.fail_release = Some(slot.id());
        assert_eq!(slot.clear(&mut host), Err(HostError::Draw));
        assert_eq!(slot.value(), Some(4));
        assert_eq!(host.live, 1);

        // A change that cannot release the old bitmap loads nothing
        host.reset_log();
        assert_eq!(slot.show(&mut host, 5), Err(HostError::Draw));
        assert_eq!(slot.value(), Some(4));
        assert!(host.ops.is_empty());

        host.fail_release = None;
        assert_eq!(slot.clear(&mut host), Ok(true));
        assert_eq!(host.live, 0);
    }
}
