use std::ops::RangeInclusive;

use serde::{Serialize, Deserialize};

/// Grid geometry of a guide menu
///
/// A layout fixes the grid size, which slots belong to the decorative
/// header and footer, and where the back control sits. Layouts are
/// validated on construction; an invalid one cannot exist, whether it
/// was built in code or deserialized from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMenuLayout")]
pub struct MenuLayout {
    rows: usize,
    cols: usize,
    header: Vec<usize>,
    footer: Vec<usize>,
    back_slot: usize,
}

/// Unvalidated mirror used as the deserialization target
#[derive(Deserialize)]
struct RawMenuLayout {
    rows: usize,
    cols: usize,
    header: Vec<usize>,
    footer: Vec<usize>,
    back_slot: usize,
}

impl TryFrom<RawMenuLayout> for MenuLayout {
    type Error = LayoutError;

    fn try_from(raw: RawMenuLayout) -> Result<Self, Self::Error> {
        MenuLayout::new(raw.rows, raw.cols, raw.header, raw.footer, raw.back_slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("grid needs at least one row and one column")]
    EmptyGrid,
    #[error("slot {slot} is outside the {size}-slot grid")]
    SlotOutOfRange { slot: usize, size: usize },
    #[error("slot {slot} is listed more than once across header and footer")]
    DuplicateChromeSlot { slot: usize },
    #[error("back slot {slot} must be one of the header or footer slots")]
    BackSlotOutsideChrome { slot: usize },
    #[error("every slot is reserved, leaving no room for content")]
    NoContentSlots,
    #[error("{rows}x{cols} grid does not fit in memory")]
    GridTooLarge { rows: usize, cols: usize },
}

impl MenuLayout {
    /// Rows in the classic chest grid
    pub const ROWS: usize = 6;
    /// Columns in the classic chest grid
    pub const COLS: usize = 9;
    /// Header row of the classic grid
    pub const HEADER: RangeInclusive<usize> = 0..=8;
    /// Footer row of the classic grid
    pub const FOOTER: RangeInclusive<usize> = 45..=53;
    /// Back control slot of the classic grid
    pub const BACK_SLOT: usize = 1;

    /// The classic 6x9 chest layout: header row on top, footer row at
    /// the bottom, back control in the header
    pub fn standard() -> Self {
        Self {
            rows: Self::ROWS,
            cols: Self::COLS,
            header: Self::HEADER.collect(),
            footer: Self::FOOTER.collect(),
            back_slot: Self::BACK_SLOT,
        }
    }

    /// Build a custom layout
    ///
    /// Header and footer slots must fit the grid and not overlap, the
    /// back slot must be one of them, and at least one slot must be
    /// left over for content.
    pub fn new(
        rows: usize,
        cols: usize,
        header: impl IntoIterator<Item = usize>,
        footer: impl IntoIterator<Item = usize>,
        back_slot: usize,
    ) -> Result<Self, LayoutError> {
        let layout = Self {
            rows,
            cols,
            header: header.into_iter().collect(),
            footer: footer.into_iter().collect(),
            back_slot,
        };
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        let size = self
            .rows
            .checked_mul(self.cols)
            .ok_or(LayoutError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            })?;
        let mut reserved = std::collections::BTreeSet::new();
        for &slot in self.header.iter().chain(self.footer.iter()) {
            if slot >= size {
                return Err(LayoutError::SlotOutOfRange { slot, size });
            }
            if !reserved.insert(slot) {
                return Err(LayoutError::DuplicateChromeSlot { slot });
            }
        }
        if self.back_slot >= size {
            return Err(LayoutError::SlotOutOfRange {
                slot: self.back_slot,
                size,
            });
        }
        if !reserved.contains(&self.back_slot) {
            return Err(LayoutError::BackSlotOutsideChrome {
                slot: self.back_slot,
            });
        }
        if reserved.len() == size {
            return Err(LayoutError::NoContentSlots);
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total slot count of the grid
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    pub fn header(&self) -> &[usize] {
        &self.header
    }

    pub fn footer(&self) -> &[usize] {
        &self.footer
    }

    pub fn back_slot(&self) -> usize {
        self.back_slot
    }

    /// Whether a slot is reserved for the header or footer
    pub fn is_chrome(&self, slot: usize) -> bool {
        self.header.contains(&slot) || self.footer.contains(&slot)
    }

    /// Slots available for content, in ascending order
    pub fn content_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(|slot| !self.is_chrome(*slot))
    }

    /// The `index`-th content slot, if the grid has that many
    pub fn content_slot(&self, index: usize) -> Option<usize> {
        self.content_slots().nth(index)
    }

    /// How many entries fit on one screen
    pub fn content_capacity(&self) -> usize {
        self.content_slots().count()
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::standard()
    }
}
