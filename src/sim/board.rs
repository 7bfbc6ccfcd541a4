//! Tooth board model
//!
//! A fixed grid of tooth slots, two rows (upper/lower jaw). Slots are either
//! clean or occupied by one germ. All mutations go through `occupy`/`clear`,
//! which silently refuse invalid transitions.

/// Stable tooth identifier, dense from 0 for the lifetime of a board.
pub type ToothId = usize;

/// Which jaw a tooth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Upper,
    Lower,
}

/// Germ varieties. No ordering semantics; chosen uniformly at random on spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GermKind {
    Microbe,
    Invader,
    Slime,
    Candy,
}

impl GermKind {
    /// All spawnable kinds, for uniform random selection.
    pub const ALL: [GermKind; 4] = [
        GermKind::Microbe,
        GermKind::Invader,
        GermKind::Slime,
        GermKind::Candy,
    ];
}

/// A single tooth slot.
#[derive(Debug, Clone, Copy)]
pub struct Tooth {
    pub id: ToothId,
    pub row: Row,
    pub germ: Option<GermKind>,
}

impl Tooth {
    pub fn is_clean(&self) -> bool {
        self.germ.is_none()
    }
}

/// The full set of tooth slots for one session.
///
/// For a board of size N (teeth per jaw) there are exactly 2N teeth with ids
/// `0..2N-1`; the first N are the upper row. Iteration order is id order.
#[derive(Debug, Clone)]
pub struct Board {
    teeth: Vec<Tooth>,
    per_row: usize,
}

impl Board {
    /// Create a fresh board with `per_row` clean teeth in each jaw.
    pub fn new(per_row: usize) -> Self {
        let teeth = (0..per_row * 2)
            .map(|id| Tooth {
                id,
                row: if id < per_row { Row::Upper } else { Row::Lower },
                germ: None,
            })
            .collect();
        Self { teeth, per_row }
    }

    /// Teeth per jaw.
    pub fn per_row(&self) -> usize {
        self.per_row
    }

    /// Total slot count (both rows).
    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    pub fn get(&self, id: ToothId) -> Option<&Tooth> {
        self.teeth.get(id)
    }

    /// All teeth, ordered by id. Read-only snapshot for the render layer.
    pub fn teeth(&self) -> &[Tooth] {
        &self.teeth
    }

    /// Ids of slots currently holding a germ.
    pub fn occupied_slots(&self) -> Vec<ToothId> {
        self.teeth
            .iter()
            .filter(|t| t.germ.is_some())
            .map(|t| t.id)
            .collect()
    }

    /// Ids of clean slots, the spawner's candidate set.
    pub fn empty_slots(&self) -> Vec<ToothId> {
        self.teeth
            .iter()
            .filter(|t| t.germ.is_none())
            .map(|t| t.id)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.teeth.iter().filter(|t| t.germ.is_some()).count()
    }

    /// Place a germ on a clean slot. Returns false without touching the
    /// board if the slot is already occupied or the id is out of range; an
    /// existing germ is never overwritten.
    pub fn occupy(&mut self, id: ToothId, kind: GermKind) -> bool {
        match self.teeth.get_mut(id) {
            Some(tooth) if tooth.germ.is_none() => {
                tooth.germ = Some(kind);
                true
            }
            _ => false,
        }
    }

    /// Vacate a slot, reporting which germ was removed. Returns None without
    /// side effects if the slot is already clean or the id is out of range.
    pub fn clear(&mut self, id: ToothId) -> Option<GermKind> {
        self.teeth.get_mut(id)?.germ.take()
    }

    /// Share of clean teeth as a rounded percentage in `[0, 100]`.
    pub fn cleanliness_percent(&self) -> u32 {
        if self.teeth.is_empty() {
            return 100;
        }
        let clean = self.teeth.len() - self.occupied_count();
        ((clean as f64 / self.teeth.len() as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(10);
        assert_eq!(board.len(), 20);
        for (i, tooth) in board.teeth().iter().enumerate() {
            assert_eq!(tooth.id, i);
            assert!(tooth.is_clean());
        }
        assert!(board.teeth()[..10].iter().all(|t| t.row == Row::Upper));
        assert!(board.teeth()[10..].iter().all(|t| t.row == Row::Lower));
    }

    #[test]
    fn test_occupy_refuses_occupied_slot() {
        let mut board = Board::new(3);
        assert!(board.occupy(2, GermKind::Microbe));
        assert!(!board.occupy(2, GermKind::Candy));
        assert_eq!(board.get(2).unwrap().germ, Some(GermKind::Microbe));
        assert!(!board.occupy(99, GermKind::Slime));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_empty_slot_is_noop() {
        let mut board = Board::new(3);
        assert_eq!(board.clear(0), None);
        assert_eq!(board.clear(99), None);

        board.occupy(4, GermKind::Invader);
        assert_eq!(board.clear(4), Some(GermKind::Invader));
        // Clearing twice reports nothing the second time
        assert_eq!(board.clear(4), None);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_slot_sets_partition_the_board() {
        let mut board = Board::new(5);
        board.occupy(0, GermKind::Slime);
        board.occupy(7, GermKind::Candy);

        let occupied = board.occupied_slots();
        let empty = board.empty_slots();
        assert_eq!(occupied, vec![0, 7]);
        assert_eq!(occupied.len() + empty.len(), board.len());
        assert!(empty.iter().all(|id| !occupied.contains(id)));
    }

    #[test]
    fn test_cleanliness_percent() {
        let mut board = Board::new(10);
        assert_eq!(board.cleanliness_percent(), 100);

        for id in 0..5 {
            board.occupy(id, GermKind::Microbe);
        }
        assert_eq!(board.cleanliness_percent(), 75);

        for id in 0..board.len() {
            board.occupy(id, GermKind::Microbe);
        }
        assert_eq!(board.cleanliness_percent(), 0);
    }

    proptest! {
        #[test]
        fn prop_initialize_layout(per_row in 1usize..64) {
            let board = Board::new(per_row);
            prop_assert_eq!(board.len(), per_row * 2);
            prop_assert_eq!(board.occupied_count(), 0);
            for (i, tooth) in board.teeth().iter().enumerate() {
                prop_assert_eq!(tooth.id, i);
                let expected = if i < per_row { Row::Upper } else { Row::Lower };
                prop_assert_eq!(tooth.row, expected);
            }
        }

        #[test]
        fn prop_occupy_never_exceeds_capacity(
            per_row in 1usize..16,
            ops in proptest::collection::vec((0usize..64, 0usize..4), 0..128),
        ) {
            let mut board = Board::new(per_row);
            for (id, kind) in ops {
                board.occupy(id, GermKind::ALL[kind]);
                prop_assert!(board.occupied_count() <= board.len());
                prop_assert!(board.cleanliness_percent() <= 100);
            }
        }
    }
}
