/// The step function: resolves one command into one tick.
///
/// Processing order:
///   1. Apply the command (move, jump, or nothing)
///   2. Crystal pickup, if the head sits on the crystal
///   3. Portal closure check (every tick, whatever happened in 1)
///   4. Terminal check: head on its own trail → GameOver
///
/// Drawing happens before the step, in the session loop. Quit never
/// reaches here; it ends the loop instead.

use log::{debug, info};

use super::command::Command;
use super::event::GameEvent;
use super::world::{Phase, WorldState};
use crate::error::GameError;

pub fn step(world: &mut WorldState, command: Command) -> Result<Vec<GameEvent>, GameError> {
    if world.phase != Phase::Playing {
        return Ok(vec![]);
    }

    let mut events: Vec<GameEvent> = Vec::new();
    world.tick += 1;
    world.message.clear();

    resolve_command(world, command, &mut events);
    resolve_pickup(world, &mut events)?;
    resolve_portal(world, &mut events);
    resolve_collision(world, &mut events);

    debug!("tick {} {:?} -> {:?}", world.tick, command, events);
    Ok(events)
}

fn resolve_command(world: &mut WorldState, command: Command, events: &mut Vec<GameEvent>) {
    if let Some(dir) = command.direction() {
        if world.wizard.step(dir, &mut world.grid) {
            world.moves += 1;
            events.push(GameEvent::Moved { to: world.wizard.position() });
        } else {
            events.push(GameEvent::MoveRejected);
        }
        return;
    }

    match command {
        Command::JumpToRowStart | Command::JumpToRowEnd | Command::JumpToRow(_) => {
            let from = world.wizard.position();
            let applied = match command.jump_target(from, &world.grid) {
                Some(target) => world.wizard.teleport_to(target, &mut world.grid),
                None => false,
            };
            if applied {
                world.moves += 1;
                let to = world.wizard.position();
                info!("portal opened {:?} -> {:?}", from, to);
                world.set_message("A portal crackles open");
                events.push(GameEvent::Teleported { from, to });
            } else {
                if world.wizard.has_open_portal() {
                    world.set_message("Your portal is still open");
                }
                events.push(GameEvent::TeleportRejected);
            }
        }
        _ => {}
    }
}

fn resolve_pickup(world: &mut WorldState, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
    if world.wizard.position() != world.crystal.position() {
        return Ok(());
    }
    world.wizard.collect(&mut world.crystal, &mut world.grid, &mut world.spawner)?;
    let score = world.score();
    let respawned_at = world.crystal.position();
    info!("crystal collected, score {}, respawned at {:?}", score, respawned_at);
    world.set_message("Crystal collected!");
    events.push(GameEvent::CrystalCollected { score, respawned_at });
    Ok(())
}

fn resolve_portal(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    if world.wizard.close_portal_if_ready(&mut world.grid) {
        info!("portal sealed");
        world.set_message("The portal seals behind you");
        events.push(GameEvent::PortalClosed);
    }
}

fn resolve_collision(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    if world.wizard.collides_with_self() {
        world.phase = Phase::GameOver;
        let score = world.score();
        info!("game over at tick {}, score {}", world.tick, score);
        world.set_message("The wizard tripped over their own trail");
        events.push(GameEvent::GameOver { score });
    }
}
