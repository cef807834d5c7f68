/// The turn-based play loop.
///
/// Each iteration: draw the current frame, wait for one command, resolve
/// it fully via `step`. The only blocking point is the command source.
/// The loop ends on Quit or when the step reports GameOver.

use log::info;

use super::command::Command;
use super::step::step;
use super::world::{Phase, WorldState};
use crate::error::GameError;

/// Feed of logical commands. Implementations block until one is ready.
pub trait CommandSource {
    fn next_command(&mut self) -> Result<Command, GameError>;
}

/// Receives each frame, drawn from the world as it stands before the
/// next command.
pub trait FrameSink {
    fn draw_frame(&mut self, world: &WorldState) -> Result<(), GameError>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Quit { score: u32 },
    GameOver { score: u32 },
}

impl Outcome {
    pub fn score(self) -> u32 {
        match self {
            Outcome::Quit { score } | Outcome::GameOver { score } => score,
        }
    }
}

pub fn run(
    world: &mut WorldState,
    source: &mut dyn CommandSource,
    sink: &mut dyn FrameSink,
) -> Result<Outcome, GameError> {
    info!("session started");
    loop {
        sink.draw_frame(world)?;

        let command = source.next_command()?;
        if command == Command::Quit {
            info!("session quit at tick {}, score {}", world.tick, world.score());
            return Ok(Outcome::Quit { score: world.score() });
        }

        step(world, command)?;

        if world.phase == Phase::GameOver {
            sink.draw_frame(world)?;
            return Ok(Outcome::GameOver { score: world.score() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crystal::Crystal;
    use crate::domain::grid::Position;
    use crate::domain::spawn::SpawnSelector;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Command>);

    impl CommandSource for Scripted {
        fn next_command(&mut self) -> Result<Command, GameError> {
            self.0.pop_front().ok_or(GameError::InputClosed)
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Vec<String>, u32)>,
    }

    impl FrameSink for Recorder {
        fn draw_frame(&mut self, world: &WorldState) -> Result<(), GameError> {
            self.frames.push((world.grid.render(), world.score()));
            Ok(())
        }
    }

    fn world() -> WorldState {
        WorldState::with_crystal_at(10, 10, Position::new(0, 0), Position::new(2, 0), SpawnSelector::seeded(8))
    }

    #[test]
    fn quit_returns_score_and_draws_first() {
        let mut w = world();
        let mut src = Scripted(VecDeque::from(vec![Command::MoveRight, Command::Quit]));
        let mut out = Recorder::default();
        let outcome = run(&mut w, &mut src, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Quit { score: 1 });
        assert_eq!(out.frames.len(), 2);
        assert_eq!(out.frames[0].1, 0);
        assert_eq!(out.frames[1].1, 1);
        assert_eq!(out.frames[0].0[2], " 0 | W * . . . . . . . . |");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut w = world();
        let mut src = Scripted(VecDeque::from(vec![Command::Noop]));
        let mut out = Recorder::default();
        assert!(matches!(run(&mut w, &mut src, &mut out), Err(GameError::InputClosed)));
    }

    #[test]
    fn game_over_ends_loop_with_final_frame() {
        let p = Position::new;
        let mut w = WorldState::with_crystal_at(10, 10, p(0, 1), p(0, 0), SpawnSelector::seeded(8));
        step(&mut w, Command::MoveUp).unwrap();
        let spawned = w.crystal.position();
        w.grid.clear(spawned);
        w.crystal = Crystal::place(p(2, 0), &mut w.grid);

        // second pickup leaves the neck at the row start; jumping there
        // lands on the body
        let mut src = Scripted(VecDeque::from(vec![Command::MoveRight, Command::JumpToRowStart]));
        let mut out = Recorder::default();
        let outcome = run(&mut w, &mut src, &mut out).unwrap();
        assert_eq!(outcome, Outcome::GameOver { score: 2 });
        assert_eq!(w.phase, Phase::GameOver);
        assert_eq!(out.frames.len(), 3);
        assert!(src.0.is_empty());
    }
}
