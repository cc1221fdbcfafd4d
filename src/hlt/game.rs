use std::io::{self, BufRead, Write};

use time::PreciseTime;

use crate::hlt::command::Command;
use crate::hlt::error::{HaliteError, Result};
use crate::hlt::game_map::{GameMap, GameState};
use crate::hlt::parse::Decodable;

/// Connection to the game engine. Reads one line per turn and answers with
/// one line of commands.
#[derive(Debug)]
pub struct Game<R, W> {
    pub my_id: usize,
    pub map_width: i32,
    pub map_height: i32,
    reader: R,
    writer: W,
}

impl Game<io::StdinLock<'static>, io::Stdout> {
    pub fn new(name: &str) -> Result<Self> {
        Game::with_io(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Runs the start-up handshake: player id, map size, our name, then the
    /// initial map.
    pub fn with_io(reader: R, writer: W, name: &str) -> Result<Self> {
        let mut game = Game {
            my_id: 0,
            map_width: 0,
            map_height: 0,
            reader,
            writer,
        };
        game.my_id = game.read_id()?;
        let (map_width, map_height) = game.read_size()?;
        game.map_width = map_width;
        game.map_height = map_height;

        writeln!(game.writer, "{}", name)?;
        game.writer.flush()?;

        game.create_map()?;
        Ok(game)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Err(HaliteError::Disconnected);
        }
        Ok(buffer)
    }

    fn read_id(&mut self) -> Result<usize> {
        let line = self.read_line()?;
        let mut iter = line.split_whitespace();
        usize::parse(&mut iter)
    }

    fn read_size(&mut self) -> Result<(i32, i32)> {
        let line = self.read_line()?;
        let mut iter = line.split_whitespace();
        let width = i32::parse(&mut iter)?;
        let height = i32::parse(&mut iter)?;
        Ok((width, height))
    }

    pub fn create_map(&mut self) -> Result<GameMap> {
        let line = self.read_line()?;
        let mut iter = line.split_whitespace();
        let game_state = GameState::parse(&mut iter)?;
        Ok(GameMap::new(self.my_id as i32, self.map_width, self.map_height, game_state))
    }

    /// Blocks until the engine sends the next turn. The returned time marks
    /// when the line arrived, so turn timing excludes the wait.
    pub fn update_map(&mut self) -> Result<(GameMap, PreciseTime)> {
        let game_map = self.create_map()?;
        Ok((game_map, PreciseTime::now()))
    }

    pub fn send_command_queue(&mut self, commands: &[Command]) -> Result<()> {
        let line = commands
            .iter()
            .map(|c| c.encode())
            .collect::<Vec<String>>()
            .join(" ");
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
