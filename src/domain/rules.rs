/// Trait for cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Whether a live cell with `neighbors` live neighbors stays alive
    fn survives(&self, neighbors: u8) -> bool;

    /// Whether a dead cell with `neighbors` live neighbors comes alive
    fn born(&self, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn survives(&self, neighbors: u8) -> bool {
        matches!(neighbors, 2 | 3)
    }

    fn born(&self, neighbors: u8) -> bool {
        neighbors == 3
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn survives(&self, neighbors: u8) -> bool {
        matches!(neighbors, 2 | 3)
    }

    fn born(&self, neighbors: u8) -> bool {
        matches!(neighbors, 3 | 6)
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn survives(&self, _neighbors: u8) -> bool {
        false
    }

    fn born(&self, neighbors: u8) -> bool {
        neighbors == 2
    }
}

/// Day & Night (B3678/S34678)
#[derive(Clone, Copy)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn survives(&self, neighbors: u8) -> bool {
        matches!(neighbors, 3 | 4 | 6 | 7 | 8)
    }

    fn born(&self, neighbors: u8) -> bool {
        matches!(neighbors, 3 | 6 | 7 | 8)
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<(&'static str, Box<dyn Rule>)> {
    vec![
        ("Conway", Box::new(ConwayRule) as Box<dyn Rule>),
        ("HighLife", Box::new(HighLifeRule)),
        ("Seeds", Box::new(SeedsRule)),
        ("Day&Night", Box::new(DayAndNightRule)),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert!(!rule.survives(0));
        assert!(!rule.survives(1));

        // Survival
        assert!(rule.survives(2));
        assert!(rule.survives(3));

        // Overpopulation
        assert!(!rule.survives(4));

        // Reproduction
        assert!(rule.born(3));
        assert!(!rule.born(2));
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = HighLifeRule;
        assert!(rule.born(6));
        assert!(rule.born(3));
        assert!(!rule.born(4));
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = SeedsRule;
        assert!((0..=8).all(|n| !rule.survives(n)));
        assert!(rule.born(2));
        assert!(!rule.born(3));
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = all_rules().iter().map(|(_, r)| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
