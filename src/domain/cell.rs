use super::rules::Rule;

/// Cell is one square of a Life board.
/// Age 0 means dead; a live cell's age counts the generations it has
/// survived, starting at 1 when born.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Cell {
    age: u32,
}

impl Cell {
    pub const DEAD: Cell = Cell { age: 0 };
    pub const NEWBORN: Cell = Cell { age: 1 };

    pub const fn with_age(age: u32) -> Self {
        Self { age }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.age > 0
    }

    pub const fn age(self) -> u32 {
        self.age
    }

    /// Next state of this cell given its live neighbor count.
    /// Survivors age by one, pinned at `max_age`.
    pub fn evolve(self, neighbors: u8, rule: &dyn Rule, max_age: u32) -> Self {
        match (self.is_alive(), neighbors) {
            (true, n) if rule.survives(n) => Self::with_age(self.age.saturating_add(1).min(max_age)),
            (false, n) if rule.born(n) => Self::NEWBORN,
            _ => Self::DEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::ConwayRule;

    const MAX: u32 = 9;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::NEWBORN.evolve(0, &ConwayRule, MAX), Cell::DEAD);
        assert_eq!(Cell::with_age(5).evolve(1, &ConwayRule, MAX), Cell::DEAD);
    }

    #[test]
    fn test_survival_ages() {
        assert_eq!(Cell::NEWBORN.evolve(2, &ConwayRule, MAX), Cell::with_age(2));
        assert_eq!(Cell::with_age(4).evolve(3, &ConwayRule, MAX), Cell::with_age(5));
    }

    #[test]
    fn test_age_is_capped() {
        assert_eq!(Cell::with_age(MAX - 1).evolve(2, &ConwayRule, MAX), Cell::with_age(MAX));
        assert_eq!(Cell::with_age(MAX).evolve(2, &ConwayRule, MAX), Cell::with_age(MAX));
    }

    #[test]
    fn test_oldest_cell_does_not_wrap() {
        let oldest = Cell::with_age(u32::MAX);
        assert_eq!(oldest.evolve(2, &ConwayRule, u32::MAX), oldest);
        assert_eq!(oldest.evolve(3, &ConwayRule, MAX), Cell::with_age(MAX));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::NEWBORN.evolve(4, &ConwayRule, MAX), Cell::DEAD);
        assert_eq!(Cell::NEWBORN.evolve(8, &ConwayRule, MAX), Cell::DEAD);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::DEAD.evolve(3, &ConwayRule, MAX), Cell::NEWBORN);
        assert_eq!(Cell::DEAD.evolve(2, &ConwayRule, MAX), Cell::DEAD);
    }
}
