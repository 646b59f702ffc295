//! Input collaborators
//!
//! Device polling lives outside the crate; whatever reads the keyboard turns it
//! into one [`InputFrame`] per tick.

use crate::sim::{Phase, Session, TickInput, autopilot_intents};

/// Everything the loop needs from the player for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub tick: TickInput,
    /// Close the game immediately, from any phase
    pub quit: bool,
}

impl InputFrame {
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Produces input once per tick. Sources get a read-only view of the session.
pub trait InputSource {
    fn poll(&mut self, session: &Session) -> InputFrame;
}

/// Demo player: confirms every screen, steers with the autopilot and quits
/// after a fixed number of sessions
#[derive(Debug, Clone)]
pub struct AutopilotInput {
    sessions_to_play: u32,
    sessions_started: u32,
}

impl AutopilotInput {
    pub fn new(sessions_to_play: u32) -> Self {
        Self {
            sessions_to_play,
            sessions_started: 0,
        }
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, session: &Session) -> InputFrame {
        match session.phase {
            Phase::StartScreen => {
                if self.sessions_started >= self.sessions_to_play {
                    return InputFrame::quit();
                }
                self.sessions_started += 1;
                InputFrame {
                    tick: TickInput {
                        confirm: true,
                        ..Default::default()
                    },
                    quit: false,
                }
            }
            Phase::Playing => InputFrame {
                tick: TickInput {
                    intents: autopilot_intents(session),
                    confirm: false,
                },
                quit: false,
            },
            Phase::GameOver | Phase::Victory => {
                if self.sessions_started >= self.sessions_to_play {
                    InputFrame::quit()
                } else {
                    InputFrame {
                        tick: TickInput {
                            confirm: true,
                            ..Default::default()
                        },
                        quit: false,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_autopilot_confirms_then_quits() {
        let mut session = Session::new(Config::default(), 4).expect("placement");
        let mut input = AutopilotInput::new(1);

        let frame = input.poll(&session);
        assert!(frame.tick.confirm);
        assert!(!frame.quit);
        assert_eq!(input.sessions_started(), 1);

        session.phase = Phase::Playing;
        let frame = input.poll(&session);
        assert!(!frame.tick.confirm);
        assert!(frame.tick.intents.forward);

        session.phase = Phase::GameOver;
        assert!(input.poll(&session).quit);
    }

    #[test]
    fn test_autopilot_restarts_until_done() {
        let mut session = Session::new(Config::default(), 4).expect("placement");
        let mut input = AutopilotInput::new(2);
        input.poll(&session);

        session.phase = Phase::Victory;
        let frame = input.poll(&session);
        assert!(frame.tick.confirm && !frame.quit);
    }
}
