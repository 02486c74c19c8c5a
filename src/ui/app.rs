use crate::config::Config;
use crate::dice::{parse_count, roll_dice, Roller, ThreadRoller};
use crate::ui::mvi::Reducer;
use crate::ui::tray::{TrayIntent, TrayReducer, TrayState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Tray state (MVI pattern).
    tray: TrayState,
    /// Random source (resource, managed outside MVI).
    roller: Box<dyn Roller>,
    max_count: usize,
    pip: char,
}

impl App {
    /// Builds the app with the thread-local random source.
    ///
    /// `initial_input` wins over `dice.default_count` from the config.
    pub fn new(config: &Config, initial_input: Option<String>) -> Self {
        Self::with_roller(config, initial_input, Box::new(ThreadRoller::thread()))
    }

    pub fn with_roller(
        config: &Config,
        initial_input: Option<String>,
        roller: Box<dyn Roller>,
    ) -> Self {
        let input = initial_input
            .or_else(|| config.dice.default_count.map(|count| count.to_string()))
            .unwrap_or_default();
        Self {
            should_quit: false,
            tray: TrayState::with_input(input),
            roller,
            max_count: config.dice.max_count,
            pip: config.ui.pip_char(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tray(&self) -> &TrayState {
        &self.tray
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn pip(&self) -> char {
        self.pip
    }

    pub fn on_char(&mut self, ch: char) {
        dispatch_mvi!(self, tray, TrayReducer, TrayIntent::Input(ch));
    }

    pub fn on_backspace(&mut self) {
        dispatch_mvi!(self, tray, TrayReducer, TrayIntent::Backspace);
    }

    /// Reads the count field, rolls, and shows the result.
    ///
    /// Invalid input leaves the current dice on screen and sets an error.
    pub fn roll(&mut self) {
        let intent = match parse_count(&self.tray.input, self.max_count) {
            Ok(count) => {
                let roll = roll_dice(count, self.roller.as_mut());
                tracing::info!(count, total = roll.total(), "rolled dice");
                TrayIntent::Rolled { roll }
            }
            Err(error) => {
                tracing::debug!(input = %self.tray.input, %error, "rejected dice count");
                TrayIntent::Rejected { error }
            }
        };
        dispatch_mvi!(self, tray, TrayReducer, intent);
    }

    pub fn reset(&mut self) {
        tracing::debug!("reset tray");
        dispatch_mvi!(self, tray, TrayReducer, TrayIntent::Reset);
    }
}
