/* Tardigrade: a probabilistic settler bot for Halite-II.
 * Ships pick nearby, large planets at random and stick with them until
 * they can no longer dock or fight there.
 * */

use anyhow::{Context, Result};
use time::PreciseTime;
use tracing::{debug, info};

use tardigrade::agent::Agent;
use tardigrade::config::Config;
use tardigrade::hlt::error::HaliteError;
use tardigrade::hlt::game::Game;
use tardigrade::hlt::logging;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    // Initialize the game
    let mut game = Game::new(&config.bot_name).context("handshake with the game engine failed")?;
    // Initialize logging
    logging::init(game.my_id, &config.log_filter)?;
    info!("Starting my {} bot!", config.bot_name);

    let mut agent = Agent::new(config.seed);
    loop {
        // Update the game state
        let (game_map, start_time) = match game.update_map() {
            Ok(update) => update,
            Err(HaliteError::Disconnected) => {
                info!("engine hung up after {} turns", agent.turn());
                return Ok(());
            }
            Err(e) => return Err(e).context(format!("could not read turn {}", agent.turn() + 1)),
        };

        let command_queue = agent.play_turn(&game_map);
        for command in command_queue.iter() {
            debug!("{}", command);
        }
        game.send_command_queue(&command_queue)
            .context("could not send commands")?;
        info!("  turn time: {}", start_time.to(PreciseTime::now()));
    }
}
