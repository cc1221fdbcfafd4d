use std::cmp::min;
use std::fmt;

use tracing::debug;

use crate::hlt::command::Command;
use crate::hlt::constants::{CLOSEST_POINT_MARGIN, CONTEST_IGNORE_SHIPS_DISTANCE, DOCK_RADIUS, MAX_SPEED};
use crate::hlt::entity::{Entity, Planet, Ship};
use crate::hlt::game_map::GameMap;

/// Why a ship cannot act on its target this turn.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Infeasible {
    /// Our own planet with every docking spot taken.
    PlanetFull,
    /// An enemy planet whose docked ships are not on the map.
    NoDockedShip,
    /// Navigation ran out of course corrections.
    NoPath,
}

impl fmt::Display for Infeasible {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match *self {
            Infeasible::PlanetFull => "planet is full",
            Infeasible::NoDockedShip => "no docked ship to attack",
            Infeasible::NoPath => "no clear path",
        };
        f.write_str(reason)
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Plan {
    Planned(Command),
    Infeasible(Infeasible),
}

impl Plan {
    fn navigation(command: Option<Command>) -> Plan {
        match command {
            Some(command) => Plan::Planned(command),
            None => Plan::Infeasible(Infeasible::NoPath),
        }
    }
}

/// Decides what `ship` does about `planet` this turn: dock with it, fly
/// towards it, or attack whoever holds it.
pub fn plan_move(game_map: &GameMap, ship: &Ship, planet: &Planet) -> Plan {
    match planet.owner {
        Some(owner) if owner == game_map.my_id() => {
            if planet.is_full() {
                debug!("  ship {} can't use full planet {}", ship.id, planet.id);
                Plan::Infeasible(Infeasible::PlanetFull)
            } else if ship.can_dock(planet) {
                debug!("  ship {} docking at planet {}", ship.id, planet.id);
                Plan::Planned(ship.dock(planet))
            } else {
                debug!("  ship {} navigating to planet {}", ship.id, planet.id);
                let speed = min(MAX_SPEED, planet.radius.ceil() as i32 + DOCK_RADIUS as i32 - 1);
                let destination = ship.closest_point_to(planet, CLOSEST_POINT_MARGIN);
                Plan::navigation(ship.navigate(&destination, game_map, speed, false))
            }
        }
        Some(_) => {
            let docked_ship = planet
                .docked_ships
                .first()
                .and_then(|&id| game_map.get_ship(id));
            match docked_ship {
                Some(docked_ship) => {
                    debug!("  ship {} navigating to docked ship {}", ship.id, docked_ship.id);
                    let ignore_ships = ship.distance_to(docked_ship) < CONTEST_IGNORE_SHIPS_DISTANCE;
                    Plan::navigation(ship.navigate(docked_ship, game_map, MAX_SPEED, ignore_ships))
                }
                None => Plan::Infeasible(Infeasible::NoDockedShip),
            }
        }
        None => {
            if ship.can_dock(planet) {
                debug!("  ship {} docking at planet {}", ship.id, planet.id);
                Plan::Planned(ship.dock(planet))
            } else {
                debug!("  ship {} navigating to unowned planet {}", ship.id, planet.id);
                let destination = ship.closest_point_to(planet, CLOSEST_POINT_MARGIN);
                Plan::navigation(ship.navigate(&destination, game_map, MAX_SPEED, false))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::entity::tests::{docked_ship, planet, ship};
    use crate::hlt::game_map::GameState;
    use crate::hlt::player::Player;

    fn map_with(players: Vec<Player>, planets: Vec<Planet>) -> GameMap {
        GameMap::new(0, 240, 160, GameState { players, planets })
    }

    #[test]
    fn unowned_planet_out_of_range_is_approached() {
        // 10 away from a radius 5 planet: one unit outside docking range
        let me = ship(0, 0, 0.0, 0.0);
        let target = planet(3, 10.0, 0.0, 5.0);
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        // aim point is 3 off the surface, 2 units away
        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, 2, 0)));
    }

    #[test]
    fn distant_unowned_planet_is_approached_at_full_speed() {
        let me = ship(0, 0, 0.0, 0.0);
        let target = planet(3, 30.0, 0.0, 5.0);
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, MAX_SPEED, 0)));
    }

    #[test]
    fn unowned_planet_in_range_is_docked() {
        let me = ship(2, 0, 0.0, 0.0);
        let target = planet(3, 0.0, 8.0, 5.0);
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Dock(2, 3)));
    }

    #[test]
    fn our_full_planet_is_infeasible() {
        let me = ship(0, 0, 0.0, 0.0);
        let mut target = planet(1, 8.0, 0.0, 5.0);
        target.owner = Some(0);
        target.num_docking_spots = 1;
        target.docked_ships = vec![9];
        let map = map_with(
            vec![Player { id: 0, ships: vec![me.clone(), docked_ship(9, 0, 3.5, 0.0, 1)] }],
            vec![target.clone()],
        );

        assert_eq!(plan_move(&map, &me, &target), Plan::Infeasible(Infeasible::PlanetFull));
    }

    #[test]
    fn our_open_planet_is_docked_when_in_range() {
        let me = ship(0, 0, 0.0, 0.0);
        let mut target = planet(1, 8.0, 0.0, 5.0);
        target.owner = Some(0);
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Dock(0, 1)));
    }

    #[test]
    fn our_open_planet_is_approached_at_capped_speed() {
        let me = ship(0, 0, 0.0, 0.0);
        let mut target = planet(1, 30.0, 0.0, 2.0);
        target.owner = Some(0);
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        // ceil(2) + 4 - 1
        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, 5, 0)));
    }

    #[test]
    fn enemy_planet_sends_us_after_its_docked_ship() {
        let me = ship(0, 0, 0.0, 0.0);
        let victim = docked_ship(20, 1, 0.0, 26.0, 5);
        let mut target = planet(5, 0.0, 30.0, 3.0);
        target.owner = Some(1);
        target.docked_ships = vec![20];
        let map = map_with(
            vec![
                Player { id: 0, ships: vec![me.clone()] },
                Player { id: 1, ships: vec![victim] },
            ],
            vec![target.clone()],
        );

        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, MAX_SPEED, 90)));
    }

    #[test]
    fn enemy_planet_without_visible_docked_ship_is_infeasible() {
        let me = ship(0, 0, 0.0, 0.0);
        let mut target = planet(5, 0.0, 30.0, 3.0);
        target.owner = Some(1);
        target.docked_ships = vec![20];
        let map = map_with(vec![Player { id: 0, ships: vec![me.clone()] }], vec![target.clone()]);

        assert_eq!(plan_move(&map, &me, &target), Plan::Infeasible(Infeasible::NoDockedShip));
    }

    #[test]
    fn attackers_close_in_through_other_ships() {
        let me = ship(0, 0, 0.0, 0.0);
        let victim = docked_ship(20, 1, 6.0, 0.0, 5);
        let guard = ship(21, 1, 3.0, 0.0);
        let mut target = planet(5, 10.0, 0.0, 3.0);
        target.owner = Some(1);
        target.docked_ships = vec![20];
        let map = map_with(
            vec![
                Player { id: 0, ships: vec![me.clone()] },
                Player { id: 1, ships: vec![victim, guard] },
            ],
            vec![target.clone()],
        );

        // within 8 units the guard is ignored and we fly straight at the victim
        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, 6, 0)));
    }

    #[test]
    fn planets_in_the_way_are_steered_around() {
        let me = ship(0, 0, 0.0, 0.0);
        let blocker = planet(0, 15.0, 0.0, 3.0);
        let target = planet(1, 40.0, 0.0, 5.0);
        let map = map_with(
            vec![Player { id: 0, ships: vec![me.clone()] }],
            vec![blocker, target.clone()],
        );

        // first heading that clears the blocker plus fudge
        assert_eq!(plan_move(&map, &me, &target), Plan::Planned(Command::Thrust(0, MAX_SPEED, 14)));
    }

    #[test]
    fn boxed_in_ships_have_no_path() {
        let me = ship(0, 0, 0.0, 0.0);
        // sitting on a planet's centre, every heading starts inside it
        let around = planet(0, 0.0, 0.0, 2.0);
        let target = planet(1, 40.0, 0.0, 5.0);
        let map = map_with(
            vec![Player { id: 0, ships: vec![me.clone()] }],
            vec![around, target.clone()],
        );

        assert_eq!(plan_move(&map, &me, &target), Plan::Infeasible(Infeasible::NoPath));
    }

    #[test]
    fn planning_is_repeatable() {
        let me = ship(0, 0, 0.0, 0.0);
        let blocker = planet(0, 15.0, 0.0, 3.0);
        let target = planet(1, 40.0, 0.0, 5.0);
        let map = map_with(
            vec![Player { id: 0, ships: vec![me.clone()] }],
            vec![blocker, target.clone()],
        );

        assert_eq!(plan_move(&map, &me, &target), plan_move(&map, &me, &target));
    }
}
