use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::hlt::command::Command;
use crate::hlt::entity::{Entity, Ship};
use crate::hlt::game_map::GameMap;
use crate::memory::TargetMemory;
use crate::planner::{plan_move, Plan};
use crate::targeting::{choose_new_target, score_eligible_planets};

/// Everything the bot carries from one turn to the next. Created once at the
/// start of a game.
#[derive(Debug)]
pub struct Agent<R = StdRng> {
    memory: TargetMemory,
    turn: usize,
    rng: R,
}

impl Agent<StdRng> {
    pub fn new(seed: Option<u64>) -> Agent<StdRng> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Agent::with_rng(rng)
    }
}

impl<R: Rng> Agent<R> {
    pub fn with_rng(rng: R) -> Agent<R> {
        Agent {
            memory: TargetMemory::new(),
            turn: 0,
            rng,
        }
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn memory(&self) -> &TargetMemory {
        &self.memory
    }

    /// One command for every undocked ship we own. Docked, docking and
    /// undocking ships are left to the engine.
    pub fn play_turn(&mut self, game_map: &GameMap) -> Vec<Command> {
        self.turn += 1;
        let ships = game_map.my_ships();
        {
            let ship_ids = ships
                .iter()
                .map(|s| s.id.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            info!("turn {}, my ships: {}", self.turn, ship_ids);
        }

        let mut command_queue = Vec::with_capacity(ships.len());
        for ship in ships {
            if !ship.is_undocked() {
                debug!("  ship {} will remain {}", ship.id, ship.docking_status);
                continue;
            }
            command_queue.push(self.command_for(game_map, ship));
        }
        command_queue
    }

    fn command_for(&mut self, game_map: &GameMap, ship: &Ship) -> Command {
        let last_target = self
            .memory
            .recall(ship.id)
            .and_then(|planet_id| game_map.get_planet(planet_id));
        if let Some(last_target) = last_target {
            debug!("  found existing target for ship {}: planet {}", ship.id, last_target.id);
            match plan_move(game_map, ship, last_target) {
                Plan::Planned(command) => return command,
                Plan::Infeasible(reason) => {
                    debug!("  ship {} dropping planet {}: {}", ship.id, last_target.id, reason)
                }
            }
        }

        let planets_and_coeffs = score_eligible_planets(game_map, ship);
        let target = match choose_new_target(&planets_and_coeffs, &mut self.rng) {
            Ok(target) => target,
            Err(e) => {
                warn!("  ship {} idles: {}", ship.id, e);
                return ship.thrust(0, 0);
            }
        };

        let command = match plan_move(game_map, ship, target) {
            Plan::Planned(command) => command,
            Plan::Infeasible(reason) => {
                warn!(
                    "  no command for ship {} and planet {} ({}), full? {}",
                    ship.id,
                    target.id,
                    reason,
                    target.is_full()
                );
                ship.thrust(0, ship.calculate_angle_between(target).round() as i32)
            }
        };
        info!("  making new move for ship {} to planet {}", ship.id, target.id);
        self.memory.remember(ship.id, target.id);
        command
    }
}
