use crate::hlt::constants::{FUDGE, SHIP_RADIUS};
use crate::hlt::entity::{Entity, Obstacle, Planet, Ship};
use crate::hlt::error::Result;
use crate::hlt::parse::Decodable;
use crate::hlt::player::Player;

#[derive(PartialEq, Debug, Clone)]
pub struct GameState {
    pub players: Vec<Player>,
    pub planets: Vec<Planet>,
}

impl Decodable for GameState {
    fn parse<'a, I>(tokens: &mut I) -> Result<GameState>
    where
        I: Iterator<Item = &'a str>,
    {
        let players = Vec::parse(tokens)?;
        let planets = Vec::parse(tokens)?;

        Ok(GameState { players, planets })
    }
}

/// One turn's snapshot of the game, seen from our player.
#[derive(Debug, Clone)]
pub struct GameMap {
    my_id: i32,
    pub width: i32,
    pub height: i32,
    pub state: GameState,
}

impl GameMap {
    pub fn new(my_id: i32, width: i32, height: i32, state: GameState) -> GameMap {
        GameMap { my_id, width, height, state }
    }

    pub fn my_id(&self) -> i32 {
        self.my_id
    }

    pub fn get_me(&self) -> Option<&Player> {
        self.state.players.iter().find(|p| p.id == self.my_id)
    }

    pub fn my_ships(&self) -> Vec<&Ship> {
        match self.get_me() {
            Some(me) => me.all_ships().iter().collect(),
            None => vec![],
        }
    }

    pub fn all_planets(&self) -> &Vec<Planet> {
        &self.state.planets
    }

    pub fn all_ships(&self) -> Vec<&Ship> {
        self.state
            .players
            .iter()
            .flat_map(|p| p.all_ships())
            .collect()
    }

    pub fn get_ship(&self, ship_id: i32) -> Option<&Ship> {
        self.state
            .players
            .iter()
            .flat_map(|p| p.all_ships())
            .find(|s| s.id == ship_id)
    }

    pub fn get_planet(&self, planet_id: i32) -> Option<&Planet> {
        self.state.planets.iter().find(|p| p.id == planet_id)
    }

    /// Everything the straight path from `ship` to `target` would clip.
    /// Neither the ship itself nor whatever sits exactly at `target` counts.
    pub fn obstacles_between<T: Entity>(&self, ship: &Ship, target: &T, ignore_ships: bool) -> Vec<Obstacle> {
        let fudge = SHIP_RADIUS + FUDGE;
        let target_position = target.get_position();
        let mut obstacles = vec![];
        for planet in self.all_planets() {
            if planet.get_position() != target_position && planet.intersects_path(ship, target, fudge) {
                obstacles.push(Obstacle {
                    radius: planet.get_radius(),
                    position: planet.get_position(),
                });
            }
        }
        if ignore_ships {
            return obstacles;
        }
        for other_ship in self.all_ships() {
            if other_ship.id != ship.id
                && other_ship.get_position() != target_position
                && other_ship.intersects_path(ship, target, fudge)
            {
                obstacles.push(Obstacle {
                    radius: other_ship.get_radius(),
                    position: other_ship.get_position(),
                });
            }
        }
        obstacles
    }
}
