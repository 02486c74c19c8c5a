use crate::dice::GRID_SIZE;
use crate::display::{DieBlock, DisplayState};
use crate::ui::theme::{DIE_BORDER, GLOBAL_BORDER, HEADER_TEXT, PIP};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

/// Outer size of one die, borders included.
pub const DIE_WIDTH: u16 = GRID_SIZE as u16 * 2 + 3;
pub const DIE_HEIGHT: u16 = GRID_SIZE as u16 + 2;
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;

/// Draws every die of the display, wrapping to new rows as needed.
///
/// When the dice do not all fit, the last row of the body shows a
/// `+N more` marker counting the dice left out.
pub struct DiceBody<'a> {
    display: &'a DisplayState,
    pip: char,
}

impl<'a> DiceBody<'a> {
    pub fn new(display: &'a DisplayState, pip: char) -> Self {
        Self { display, pip }
    }
}

/// Dice per row that fit into `width`. Never zero.
pub fn dice_per_row(width: u16) -> usize {
    usize::from((width.saturating_add(GAP_X) / (DIE_WIDTH + GAP_X)).max(1))
}

/// Number of dice that fit into `area`.
pub fn capacity(area: Rect) -> usize {
    if area.width < DIE_WIDTH {
        return 0;
    }
    let rows = usize::from(area.height.saturating_add(GAP_Y) / (DIE_HEIGHT + GAP_Y));
    dice_per_row(area.width) * rows
}

/// Top-left corner of die `index` inside `area`, or `None` if it falls outside.
pub fn die_origin(area: Rect, index: usize) -> Option<(u16, u16)> {
    let per_row = dice_per_row(area.width);
    let row = u16::try_from(index / per_row).ok()?;
    let column = u16::try_from(index % per_row).ok()?;

    let x = area.x + column * (DIE_WIDTH + GAP_X);
    let y = area
        .y
        .checked_add(row.checked_mul(DIE_HEIGHT + GAP_Y)?)?;
    if x + DIE_WIDTH > area.right() || y + DIE_HEIGHT > area.bottom() {
        return None;
    }
    Some((x, y))
}

/// Split of a roll between drawn dice and the overflow marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLayout {
    /// Region the drawn dice are placed in.
    pub dice_area: Rect,
    pub shown: usize,
    pub hidden: usize,
}

/// Places `total` dice into `inner`.
///
/// `shown + hidden == total` always holds.
pub fn body_layout(inner: Rect, total: usize) -> BodyLayout {
    if total <= capacity(inner) {
        return BodyLayout {
            dice_area: inner,
            shown: total,
            hidden: 0,
        };
    }

    // Bottom row is reserved for the marker.
    let dice_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let shown = capacity(dice_area).min(total);
    BodyLayout {
        dice_area,
        shown,
        hidden: total - shown,
    }
}

impl Widget for DiceBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = frame.inner(area);
        frame.render(area, buf);

        let blocks = self.display.blocks();
        let layout = body_layout(inner, blocks.len());
        for (index, block) in blocks.iter().take(layout.shown).enumerate() {
            if let Some((x, y)) = die_origin(layout.dice_area, index) {
                draw_die(block, self.pip, Rect::new(x, y, DIE_WIDTH, DIE_HEIGHT), buf);
            }
        }

        if layout.hidden > 0 && inner.height > 0 {
            let marker = format!("+{} more", layout.hidden);
            buf.set_stringn(
                inner.x,
                inner.bottom() - 1,
                marker,
                usize::from(inner.width),
                Style::default().fg(HEADER_TEXT),
            );
        }
    }
}

fn draw_die(block: &DieBlock, pip: char, rect: Rect, buf: &mut Buffer) {
    let outline = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIE_BORDER));
    let inner = outline.inner(rect);
    outline.render(rect, buf);

    let pip_style = Style::default().fg(PIP);
    let symbol = pip.to_string();
    for &(row, column) in block.pattern().cells() {
        // Cells sit on every other column, one column in from the border.
        let x = inner.x + 1 + column as u16 * 2;
        let y = inner.y + row as u16;
        buf.set_string(x, y, &symbol, pip_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dice::{parse_count, roll_dice, FaceValue, RngRoller, RollResult};
    use crate::display::render;
    use crate::ui::layout::layout_regions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn display_of(values: &[u8]) -> DisplayState {
        let roll: RollResult = values
            .iter()
            .map(|&v| FaceValue::try_from(v).unwrap())
            .collect();
        let mut display = DisplayState::default();
        render(&mut display, &roll);
        display
    }

    fn row_text(buf: &Buffer, y: u16, x: u16, width: u16) -> String {
        (x..x + width)
            .map(|col| buf[(col, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn per_row_never_zero() {
        assert_eq!(dice_per_row(0), 1);
        assert_eq!(dice_per_row(DIE_WIDTH), 1);
        assert_eq!(dice_per_row(DIE_WIDTH * 2 + GAP_X), 2);
    }

    #[test]
    fn origin_wraps_to_next_row() {
        let area = Rect::new(0, 0, DIE_WIDTH * 2 + GAP_X, 20);
        assert_eq!(die_origin(area, 0), Some((0, 0)));
        assert_eq!(die_origin(area, 1), Some((DIE_WIDTH + GAP_X, 0)));
        assert_eq!(die_origin(area, 2), Some((0, DIE_HEIGHT + GAP_Y)));
    }

    #[test]
    fn origin_outside_area_is_none() {
        let area = Rect::new(0, 0, DIE_WIDTH, DIE_HEIGHT);
        assert!(die_origin(area, 0).is_some());
        assert!(die_origin(area, 1).is_none());
    }

    #[test]
    fn draws_center_pip_for_one() {
        let display = display_of(&[1]);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        DiceBody::new(&display, '*').render(area, &mut buf);

        // Outer frame border at 0, die starts at (1, 1).
        assert_eq!(row_text(&buf, 1, 1, DIE_WIDTH), "┌───────┐");
        assert_eq!(row_text(&buf, 2, 1, DIE_WIDTH), "│       │");
        assert_eq!(row_text(&buf, 3, 1, DIE_WIDTH), "│   *   │");
        assert_eq!(row_text(&buf, 4, 1, DIE_WIDTH), "│       │");
        assert_eq!(row_text(&buf, 5, 1, DIE_WIDTH), "└───────┘");
    }

    #[test]
    fn empty_display_draws_only_frame() {
        let display = DisplayState::default();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        DiceBody::new(&display, '*').render(area, &mut buf);
        assert_eq!(row_text(&buf, 1, 1, 18), " ".repeat(18));
        assert_eq!(row_text(&buf, 3, 1, 18), " ".repeat(18));
    }

    fn drawn_dice(buf: &Buffer, inner: Rect) -> usize {
        (inner.top()..inner.bottom())
            .flat_map(|y| (inner.left()..inner.right()).map(move |x| (x, y)))
            .filter(|&pos| buf[pos].symbol() == "┌")
            .count()
    }

    fn marker_count(buf: &Buffer, inner: Rect) -> usize {
        let text = row_text(buf, inner.bottom() - 1, inner.x, inner.width);
        text.trim()
            .strip_prefix('+')
            .and_then(|rest| rest.strip_suffix(" more"))
            .and_then(|count| count.parse().ok())
            .unwrap_or(0)
    }

    #[test]
    fn capacity_matches_die_origin() {
        for (width, height) in [(0, 0), (9, 5), (20, 10), (78, 13), (78, 12), (40, 17)] {
            let area = Rect::new(0, 0, width, height);
            let fitting = (0..200).take_while(|&i| die_origin(area, i).is_some()).count();
            assert_eq!(capacity(area), fitting, "area {width}x{height}");
        }
    }

    #[test]
    fn layout_without_overflow_uses_whole_area() {
        let inner = Rect::new(1, 1, 40, 12);
        let layout = body_layout(inner, 3);
        assert_eq!(layout.dice_area, inner);
        assert_eq!((layout.shown, layout.hidden), (3, 0));
    }

    #[test]
    fn overflow_marker_counts_hidden_dice() {
        let display = display_of(&[1, 2, 3]);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        DiceBody::new(&display, '*').render(area, &mut buf);

        let inner = Rect::new(1, 1, 18, 8);
        assert_eq!(drawn_dice(&buf, inner), 1);
        assert_eq!(row_text(&buf, 8, 1, 7), "+2 more");
    }

    #[test]
    fn no_marker_when_everything_fits() {
        let display = display_of(&[4, 5]);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        DiceBody::new(&display, '*').render(area, &mut buf);

        let inner = Rect::new(1, 1, 38, 8);
        assert_eq!(drawn_dice(&buf, inner), 2);
        assert_eq!(marker_count(&buf, inner), 0);
    }

    #[test]
    fn max_count_on_standard_terminal_accounts_for_every_die() {
        let max_count = Config::default().dice.max_count;
        let count = parse_count(&max_count.to_string(), max_count).unwrap();
        let roll = roll_dice(count, &mut RngRoller::new(StdRng::seed_from_u64(5)));
        let mut display = DisplayState::default();
        render(&mut display, &roll);

        let screen = Rect::new(0, 0, 80, 24);
        let body = layout_regions(screen).body;
        let mut buf = Buffer::empty(screen);
        DiceBody::new(&display, '*').render(body, &mut buf);

        let inner = Rect::new(body.x + 1, body.y + 1, body.width - 2, body.height - 2);
        let drawn = drawn_dice(&buf, inner);
        let hidden = marker_count(&buf, inner);
        assert!(hidden > 0);
        assert_eq!(drawn + hidden, max_count);
    }
}
