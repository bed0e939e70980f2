/// Horizontal facing. Speed is never negative, so this alone decides which
/// way an entity travels along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward increasing X.
    #[default]
    Right,
    /// Toward decreasing X. Sprites are drawn mirrored.
    Left,
}

impl Direction {
    /// +1.0 for `Right`, -1.0 for `Left`.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

/// State flags written by external logic (input, collision) and read by the
/// kinematics step. Every flag is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityFlags {
    pub dead: bool,
    /// Accelerate while set, decelerate while clear.
    pub moving: bool,
    /// Gravity applies while set; the ground grid snap applies while clear.
    pub in_mid_air: bool,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_clear_and_face_right() {
        let flags = EntityFlags::default();
        assert!(!flags.dead);
        assert!(!flags.moving);
        assert!(!flags.in_mid_air);
        assert_eq!(flags.direction, Direction::Right);
    }

    #[test]
    fn flags_do_not_imply_each_other() {
        let mut flags = EntityFlags::default();
        flags.dead = true;
        assert!(!flags.moving && !flags.in_mid_air);
        assert_eq!(flags.direction, Direction::Right);

        flags.direction = Direction::Left;
        flags.dead = false;
        assert!(!flags.moving && !flags.in_mid_air && !flags.dead);
        assert_eq!(flags.direction, Direction::Left);
    }

    #[test]
    fn direction_sign_and_flip() {
        assert_eq!(Direction::Right.sign(), 1.0);
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.flipped(), Direction::Left);
        assert_eq!(Direction::Left.flipped().flipped(), Direction::Left);
    }
}
