//! Creature kinds and their dominance cycle.
//!
//! Vampire beats Werewolf, Werewolf beats Ghost, Ghost beats Vampire.

use rand::Rng;

/// The kind of a creature on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Creature {
    Vampire,
    Werewolf,
    Ghost,
}

/// All creature kinds, in dominance order (each beats the next, cyclically).
pub const ALL_CREATURES: [Creature; 3] = [Creature::Vampire, Creature::Werewolf, Creature::Ghost];

impl Creature {
    /// Returns the wire name of this creature.
    pub const fn name(self) -> &'static str {
        match self {
            Creature::Vampire => "Vampire",
            Creature::Werewolf => "Werewolf",
            Creature::Ghost => "Ghost",
        }
    }

    /// Parses a creature from its wire name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Creature> {
        match name.to_ascii_lowercase().as_str() {
            "vampire" => Some(Creature::Vampire),
            "werewolf" => Some(Creature::Werewolf),
            "ghost" => Some(Creature::Ghost),
            _ => None,
        }
    }

    /// Returns the uppercase notation letter (player 1 uses it as is,
    /// player 2 uses the lowercase form).
    pub const fn letter(self) -> char {
        match self {
            Creature::Vampire => 'V',
            Creature::Werewolf => 'W',
            Creature::Ghost => 'G',
        }
    }

    /// Parses a creature from its notation letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Creature> {
        match c.to_ascii_uppercase() {
            'V' => Some(Creature::Vampire),
            'W' => Some(Creature::Werewolf),
            'G' => Some(Creature::Ghost),
            _ => None,
        }
    }

    /// The kind this creature defeats.
    pub const fn prey(self) -> Creature {
        match self {
            Creature::Vampire => Creature::Werewolf,
            Creature::Werewolf => Creature::Ghost,
            Creature::Ghost => Creature::Vampire,
        }
    }

    /// Returns true if this creature defeats `other` in combat.
    pub fn beats(self, other: Creature) -> bool {
        self.prey() == other
    }

    /// Picks a creature kind uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Creature {
        ALL_CREATURES[rng.gen_range(0..ALL_CREATURES.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn dominance_is_a_three_cycle() {
        assert!(Creature::Vampire.beats(Creature::Werewolf));
        assert!(Creature::Werewolf.beats(Creature::Ghost));
        assert!(Creature::Ghost.beats(Creature::Vampire));

        for a in ALL_CREATURES {
            assert!(!a.beats(a));
            for b in ALL_CREATURES {
                if a != b {
                    assert_ne!(a.beats(b), b.beats(a), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn name_roundtrip() {
        for c in ALL_CREATURES {
            assert_eq!(Creature::from_name(c.name()), Some(c));
        }
        assert_eq!(Creature::from_name("ghost"), Some(Creature::Ghost));
        assert_eq!(Creature::from_name("None"), None);
        assert_eq!(Creature::from_name("zombie"), None);
    }

    #[test]
    fn letter_roundtrip() {
        for c in ALL_CREATURES {
            assert_eq!(Creature::from_letter(c.letter()), Some(c));
            assert_eq!(Creature::from_letter(c.letter().to_ascii_lowercase()), Some(c));
        }
        assert_eq!(Creature::from_letter('x'), None);
    }

    #[test]
    fn random_covers_every_kind() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let c = Creature::random(&mut rng);
            let idx = ALL_CREATURES.iter().position(|k| *k == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
