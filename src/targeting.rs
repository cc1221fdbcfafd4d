use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use thiserror::Error;

use crate::hlt::entity::{Planet, Ship};
use crate::hlt::game_map::GameMap;
use crate::scoring::ship_planet_coefficient;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TargetError {
    #[error("no planet is worth targeting")]
    NoEligibleTarget,
}

/// Planets a ship may still do something useful at: everything except our
/// own planets that have no free docking spot.
pub fn eligible_planets(game_map: &GameMap) -> impl Iterator<Item = &Planet> {
    let my_id = game_map.my_id();
    game_map
        .all_planets()
        .iter()
        .filter(move |p| !p.is_owned_by(my_id) || !p.is_full())
}

pub fn score_eligible_planets<'a>(game_map: &'a GameMap, ship: &Ship) -> Vec<(&'a Planet, f64)> {
    eligible_planets(game_map)
        .map(|p| (p, ship_planet_coefficient(ship, p)))
        .collect()
}

/// Draws one planet with probability proportional to its coefficient.
/// Coefficients that are not finite and positive never get picked.
pub fn choose_new_target<'a, R: Rng + ?Sized>(
    planets_and_coeffs: &[(&'a Planet, f64)],
    rng: &mut R,
) -> Result<&'a Planet, TargetError> {
    let weights = planets_and_coeffs
        .iter()
        .map(|&(_, coeff)| if coeff.is_finite() && coeff > 0.0 { coeff } else { 0.0 });
    let distribution = WeightedIndex::<f64>::new(weights).map_err(|_| TargetError::NoEligibleTarget)?;
    Ok(planets_and_coeffs[distribution.sample(rng)].0)
}
