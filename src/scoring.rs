use crate::hlt::entity::{Entity, Planet, Ship};

/// How attractive `planet` is to `ship`: proportional to the planet's size,
/// falling off with the cube of the distance.
pub fn ship_planet_coefficient(ship: &Ship, planet: &Planet) -> f64 {
    let distance_to_planet = ship.distance_to(planet);
    planet.radius / distance_to_planet.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::entity::tests::{planet, ship};

    #[test]
    fn coefficient_is_positive_at_any_distance() {
        let s = ship(0, 0, 0.0, 0.0);
        for &(x, radius) in &[(0.5, 1.0), (10.0, 5.0), (300.0, 16.0), (0.001, 3.0)] {
            assert!(ship_planet_coefficient(&s, &planet(0, x, 0.0, radius)) > 0.0);
        }
    }

    #[test]
    fn nearby_beats_large() {
        let s = ship(0, 0, 0.0, 0.0);
        let near_small = planet(0, 10.0, 0.0, 3.0);
        let far_large = planet(1, 20.0, 0.0, 12.0);
        assert!(ship_planet_coefficient(&s, &near_small) > ship_planet_coefficient(&s, &far_large));
    }

    #[test]
    fn matches_radius_over_distance_cubed() {
        let s = ship(0, 0, 0.0, 0.0);
        let p = planet(0, 0.0, 10.0, 5.0);
        assert!((ship_planet_coefficient(&s, &p) - 0.005).abs() < 1e-12);
    }
}
