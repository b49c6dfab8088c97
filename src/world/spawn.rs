use crate::ant::Ant;
use crate::direction::Direction;

/// Place `count` ants uniformly at random.
///
/// Draw order is fixed: for each ant in id order `1..=count`, a row from
/// `rng.u32(..height)`, then a column from `rng.u32(..width)`, then a
/// direction index from `rng.u8(..4)`. The draws are 32-bit on every target,
/// so the same seed gives the same placement everywhere.
pub fn spawn_ants(count: usize, height: u32, width: u32, rng: &mut fastrand::Rng) -> Vec<Ant> {
    (1..=count)
        .map(|id| {
            let y = rng.u32(..height) as usize;
            let x = rng.u32(..width) as usize;
            let direction = Direction::from_index(rng.u8(..4));
            Ant::new(id as u32, y, x, direction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ants_in_bounds() {
        let mut rng = fastrand::Rng::with_seed(123);
        let ants = spawn_ants(50, 7, 3, &mut rng);

        assert_eq!(ants.len(), 50);
        for (i, ant) in ants.iter().enumerate() {
            assert_eq!(ant.id, i as u32 + 1);
            assert!(ant.y < 7);
            assert!(ant.x < 3);
            assert_eq!(ant.moves, 0);
        }
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let a = spawn_ants(19, 400, 400, &mut fastrand::Rng::with_seed(8));
        let b = spawn_ants(19, 400, 400, &mut fastrand::Rng::with_seed(8));
        let c = spawn_ants(19, 400, 400, &mut fastrand::Rng::with_seed(9));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spawn_follows_draw_order() {
        let ants = spawn_ants(3, 10, 20, &mut fastrand::Rng::with_seed(8));

        let mut rng = fastrand::Rng::with_seed(8);
        for ant in &ants {
            assert_eq!(ant.y, rng.u32(..10) as usize);
            assert_eq!(ant.x, rng.u32(..20) as usize);
            assert_eq!(ant.direction, Direction::from_index(rng.u8(..4)));
        }
    }

    #[test]
    fn test_reference_placement_for_seed_8() {
        let ants = spawn_ants(19, 400, 400, &mut fastrand::Rng::with_seed(8));

        let starts: Vec<_> = ants.iter().map(|a| (a.y, a.x, a.direction)).collect();
        assert_eq!(starts[0], (5, 7, Direction::South));
        assert_eq!(starts[1], (181, 118, Direction::West));
        assert_eq!(starts[2], (232, 243, Direction::West));
        assert_eq!(starts[18], (278, 312, Direction::North));
    }

    #[test]
    fn test_spawn_covers_all_directions() {
        let ants = spawn_ants(200, 10, 10, &mut fastrand::Rng::with_seed(1));

        for d in Direction::ALL {
            assert!(ants.iter().any(|a| a.direction == d));
        }
    }

    #[test]
    fn test_prefix_is_stable_across_counts() {
        let few = spawn_ants(3, 50, 50, &mut fastrand::Rng::with_seed(42));
        let many = spawn_ants(10, 50, 50, &mut fastrand::Rng::with_seed(42));

        assert_eq!(few[..], many[..3]);
    }
}
