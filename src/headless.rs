use crate::config::Config;
use crate::dice::{parse_count, roll_dice, InputError, Roller};
use crate::display::{format_text, render, DisplayState};

/// Rolls once for `input` and formats the dice plus a total line.
///
/// Uses the same count rules as the interactive tray.
pub fn roll_to_text<R: Roller + ?Sized>(
    input: &str,
    config: &Config,
    roller: &mut R,
) -> Result<String, InputError> {
    let count = parse_count(input, config.dice.max_count)?;
    let roll = roll_dice(count, roller);
    tracing::info!(count, total = roll.total(), "headless roll");

    let mut display = DisplayState::default();
    render(&mut display, &roll);

    let dice = format_text(&display, config.ui.pip_char());
    let total = format!("Total: {}", display.total());
    if dice.is_empty() {
        Ok(total)
    } else {
        Ok(format!("{}\n{}", dice, total))
    }
}
