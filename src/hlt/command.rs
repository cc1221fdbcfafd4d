use std::fmt;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Command {
    /// ship id, magnitude, angle in degrees
    Thrust(i32, i32, i32),
    /// ship id, planet id
    Dock(i32, i32),
    Undock(i32),
}

impl Command {
    pub fn ship_id(&self) -> i32 {
        match *self {
            Command::Thrust(ship_id, _, _) => ship_id,
            Command::Dock(ship_id, _) => ship_id,
            Command::Undock(ship_id) => ship_id,
        }
    }

    pub fn encode(&self) -> String {
        match *self {
            Command::Thrust(ship_id, magnitude, angle) => format!("t {} {} {}", ship_id, magnitude, angle),
            Command::Dock(ship_id, planet_id) => format!("d {} {}", ship_id, planet_id),
            Command::Undock(ship_id) => format!("u {}", ship_id),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_wire_format() {
        assert_eq!(Command::Thrust(3, 7, 270).encode(), "t 3 7 270");
        assert_eq!(Command::Dock(3, 11).encode(), "d 3 11");
        assert_eq!(Command::Undock(4).encode(), "u 4");
        assert_eq!(Command::Dock(9, 1).ship_id(), 9);
    }
}
