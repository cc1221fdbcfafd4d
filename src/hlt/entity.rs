use std::fmt;

use crate::hlt::collision::intersect_segment_circle;
use crate::hlt::command::Command;
use crate::hlt::constants::{ANGULAR_STEP, DOCK_RADIUS, MAX_CORRECTIONS, SHIP_RADIUS};
use crate::hlt::error::{HaliteError, Result};
use crate::hlt::game_map::GameMap;
use crate::hlt::parse::Decodable;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Position(pub f64, pub f64);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.0, self.1)
    }
}

impl Decodable for Position {
    fn parse<'a, I>(tokens: &mut I) -> Result<Position>
    where
        I: Iterator<Item = &'a str>,
    {
        let x = f64::parse(tokens)?;
        let y = f64::parse(tokens)?;
        Ok(Position(x, y))
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum DockingStatus {
    UNDOCKED = 0,
    DOCKING = 1,
    DOCKED = 2,
    UNDOCKING = 3,
}

impl fmt::Display for DockingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            DockingStatus::UNDOCKED => "undocked",
            DockingStatus::DOCKING => "docking",
            DockingStatus::DOCKED => "docked",
            DockingStatus::UNDOCKING => "undocking",
        };
        f.write_str(name)
    }
}

impl Decodable for DockingStatus {
    fn parse<'a, I>(tokens: &mut I) -> Result<DockingStatus>
    where
        I: Iterator<Item = &'a str>,
    {
        match i32::parse(tokens)? {
            0 => Ok(DockingStatus::UNDOCKED),
            1 => Ok(DockingStatus::DOCKING),
            2 => Ok(DockingStatus::DOCKED),
            3 => Ok(DockingStatus::UNDOCKING),
            i => Err(HaliteError::InvalidDockingStatus(i)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub id: i32,
    /// Filled in from the enclosing player block.
    pub owner: i32,
    pub position: Position,
    pub hp: i32,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub docking_status: DockingStatus,
    pub docked_planet: Option<i32>,
    pub progress: i32,
    pub cooldown: i32,
}

impl Ship {
    pub fn thrust(&self, magnitude: i32, angle: i32) -> Command {
        Command::Thrust(self.id, magnitude, angle.rem_euclid(360))
    }

    pub fn dock(&self, planet: &Planet) -> Command {
        Command::Dock(self.id, planet.id)
    }

    pub fn undock(&self) -> Command {
        Command::Undock(self.id)
    }

    pub fn can_dock(&self, planet: &Planet) -> bool {
        self.distance_to(planet) <= (DOCK_RADIUS + planet.radius)
    }

    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::UNDOCKED
    }

    /// Thrust towards `target` at up to `speed`, turning away from anything in
    /// the way. Planets are always avoided, other ships only when
    /// `ignore_ships` is false. Returns `None` when no clear heading was found.
    pub fn navigate<T: Entity>(&self, target: &T, game_map: &GameMap, speed: i32, ignore_ships: bool) -> Option<Command> {
        self.navigate_with_corrections(target, game_map, speed, ignore_ships, MAX_CORRECTIONS)
    }

    fn navigate_with_corrections<T: Entity>(
        &self,
        target: &T,
        game_map: &GameMap,
        speed: i32,
        ignore_ships: bool,
        max_corrections: i32,
    ) -> Option<Command> {
        if max_corrections <= 0 {
            return None
        }
        let distance = self.distance_to(target);
        let angle = self.calculate_angle_between(target);

        if !game_map.obstacles_between(self, target, ignore_ships).is_empty() {
            let new_target_dx = f64::cos((angle + ANGULAR_STEP).to_radians()) * distance;
            let new_target_dy = f64::sin((angle + ANGULAR_STEP).to_radians()) * distance;
            let Position(self_x, self_y) = self.position;
            let new_target = Position(self_x + new_target_dx, self_y + new_target_dy);
            return self.navigate_with_corrections(&new_target, game_map, speed, ignore_ships, max_corrections - 1)
        }

        let thrust_speed = f64::min(speed as f64, distance) as i32;
        Some(self.thrust(thrust_speed, angle.round() as i32))
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Ship) -> bool {
        self.id == other.id
    }
}

impl Decodable for Ship {
    fn parse<'a, I>(tokens: &mut I) -> Result<Ship>
    where
        I: Iterator<Item = &'a str>,
    {
        let id = i32::parse(tokens)?;
        let position = Position::parse(tokens)?;
        let hp = i32::parse(tokens)?;
        let velocity_x = f64::parse(tokens)?;
        let velocity_y = f64::parse(tokens)?;
        let docking_status = DockingStatus::parse(tokens)?;
        let docked_planet_raw = i32::parse(tokens)?;
        let docked_planet = match docking_status {
            DockingStatus::UNDOCKED => None,
            _ => Some(docked_planet_raw),
        };
        let progress = i32::parse(tokens)?;
        let cooldown = i32::parse(tokens)?;

        Ok(Ship {
            id,
            owner: -1,
            position,
            hp,
            velocity_x,
            velocity_y,
            docking_status,
            docked_planet,
            progress,
            cooldown,
        })
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Planet {
    pub id: i32,
    pub position: Position,
    pub hp: i32,
    pub radius: f64,
    pub num_docking_spots: i32,
    pub current_production: i32,
    pub remaining_resources: i32,
    pub owner: Option<i32>,
    pub docked_ships: Vec<i32>,
}

impl Planet {
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_owned_by(&self, player_id: i32) -> bool {
        self.owner == Some(player_id)
    }

    pub fn is_full(&self) -> bool {
        self.docked_ships.len() >= self.num_docking_spots.max(0) as usize
    }

    pub fn open_docks(&self) -> usize {
        (self.num_docking_spots.max(0) as usize).saturating_sub(self.docked_ships.len())
    }
}

impl Decodable for Planet {
    fn parse<'a, I>(tokens: &mut I) -> Result<Planet>
    where
        I: Iterator<Item = &'a str>,
    {
        let id = i32::parse(tokens)?;
        let position = Position::parse(tokens)?;
        let hp = i32::parse(tokens)?;
        let radius = f64::parse(tokens)?;
        let num_docking_spots = i32::parse(tokens)?;
        let current_production = i32::parse(tokens)?;
        let remaining_resources = i32::parse(tokens)?;
        let owner = Option::parse(tokens)?;
        let docked_ships = Vec::parse(tokens)?;

        Ok(Planet {
            id,
            position,
            hp,
            radius,
            num_docking_spots,
            current_production,
            remaining_resources,
            owner,
            docked_ships,
        })
    }
}

/// Something a flight path has to steer around.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Obstacle {
    pub position: Position,
    pub radius: f64,
}

pub trait Entity : Sized {
    fn get_position(&self) -> Position;
    fn get_radius(&self) -> f64;

    fn distance_to<T: Entity>(&self, target: &T) -> f64 {
        let Position(x1, y1) = self.get_position();
        let Position(x2, y2) = target.get_position();
        f64::sqrt((x2-x1).powi(2) + (y2-y1).powi(2))
    }

    /// Angle in degrees, `[0, 360)`.
    fn calculate_angle_between<T: Entity>(&self, target: &T) -> f64 {
        let Position(x1, y1) = self.get_position();
        let Position(x2, y2) = target.get_position();
        (f64::atan2(y2-y1, x2-x1).to_degrees() + 360.0) % 360.0
    }

    /// The point `min_distance` off the surface of `target` on the side
    /// facing this entity.
    fn closest_point_to<T: Entity>(&self, target: &T, min_distance: f64) -> Position {
        let angle = target.calculate_angle_between(self);
        let radius = target.get_radius() + min_distance;
        let Position(target_x, target_y) = target.get_position();
        let x = target_x + radius * f64::cos(angle.to_radians());
        let y = target_y + radius * f64::sin(angle.to_radians());

        Position(x, y)
    }

    fn intersects_path<S: Entity, E: Entity>(&self, start: &S, end: &E, fudge: f64) -> bool {
        intersect_segment_circle(start, end, self, fudge)
    }
}

impl Entity for Ship {
    fn get_position(&self) -> Position { self.position }

    fn get_radius(&self) -> f64 { SHIP_RADIUS }
}

impl Entity for Planet {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_radius(&self) -> f64 {
        self.radius
    }
}

impl Entity for Obstacle {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_radius(&self) -> f64 {
        self.radius
    }
}

impl Entity for Position {
    fn get_position(&self) -> Position {
        *self
    }

    fn get_radius(&self) -> f64 {
        0.0
    }
}
