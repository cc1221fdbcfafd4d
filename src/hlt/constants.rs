// Max number of units of distance a ship can travel in a turn
pub const MAX_SPEED: i32 = 7;
// Radius of a ship
pub const SHIP_RADIUS: f64 = 0.5;
// Distance from the edge of the planet at which ships can try to dock
pub const DOCK_RADIUS: f64 = 4.0;


// CONFIGURATIONS
pub const MAX_CORRECTIONS: i32 = 90;
pub const ANGULAR_STEP: f64 = 1.0;
// extra clearance added to the ship radius when checking a path for obstacles
pub const FUDGE: f64 = 0.1;
// how far off a planet's surface ships aim when flying towards it
pub const CLOSEST_POINT_MARGIN: f64 = 3.0;
// attackers stop routing around ships once this close to their victim
pub const CONTEST_IGNORE_SHIPS_DISTANCE: f64 = 8.0;
