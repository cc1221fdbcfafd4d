use crate::hlt::entity::Ship;
use crate::hlt::error::Result;
use crate::hlt::parse::Decodable;

#[derive(PartialEq, Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub ships: Vec<Ship>,
}

impl Player {
    pub fn all_ships(&self) -> &Vec<Ship> {
        &self.ships
    }
}

impl Decodable for Player {
    fn parse<'a, I>(tokens: &mut I) -> Result<Player>
    where
        I: Iterator<Item = &'a str>,
    {
        let id = i32::parse(tokens)?;
        let mut ships: Vec<Ship> = Vec::parse(tokens)?;
        for ship in ships.iter_mut() {
            ship.owner = id;
        }

        Ok(Player { id, ships })
    }
}
