//! GameView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{format_mm_ss, GameSnapshot, MoveLogEntry, Phase, SessionRecord};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;
use crate::types::{PegId, MAX_DISCS, PEG_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn around the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub cursor: PegId,
    /// Move log panel, when open
    pub log: Option<&'a [MoveLogEntry]>,
    /// Records table, when open
    pub records: Option<&'a [SessionRecord]>,
    /// Name being typed, when the prompt is open
    pub name_entry: Option<&'a str>,
    /// One-line message (save result, solver refusal, export path)
    pub status: Option<&'a str>,
}

impl Default for HudView<'_> {
    fn default() -> Self {
        Self {
            cursor: PegId::Source,
            log: None,
            records: None,
            name_entry: None,
            status: None,
        }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const POLE: Rgb = Rgb::new(110, 110, 125);
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160)).dim();

const HELP: &str =
    "1/2/3 ←/→ Space:grab/drop  Esc:cancel  s:solve  r:restart  +/-:discs  [/]:timer  l:log  t:records  n:save  e:export  q:quit";

/// Terminal renderer for the tower board and its panels.
pub struct GameView {
    /// Columns per peg slot; fits the widest disc plus a gap.
    col_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            col_w: 2 * MAX_DISCS as u16 + 3,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        fb.put_str(1, 0, "TOWER OF HANOI", LABEL);

        let n = snap.num_discs as u16;
        let inner_w = self.col_w * PEG_COUNT as u16;
        // Lift row, pole tip, one row per disc, base.
        let inner_h = n + 3;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;
        let start_x = 1;
        let start_y = 2;

        fb.fill_rect(start_x + 1, start_y + 1, inner_w, inner_h, ' ', CellStyle::fg(POLE).on(BOARD_BG));
        fb.draw_box(start_x, start_y, frame_w, frame_h, CellStyle::default());

        let palette = Palette::pastel(snap.num_discs);
        let lift_y = start_y + 1;
        let base_y = start_y + inner_h;

        for peg in PegId::ALL {
            let center = start_x + 1 + peg.index() as u16 * self.col_w + self.col_w / 2;
            let pole = CellStyle::fg(POLE).on(BOARD_BG);
            for y in (lift_y + 1)..base_y {
                fb.put_char(center, y, '│', pole);
            }
            let base_x = center - self.col_w / 2 + 1;
            for dx in 0..self.col_w - 2 {
                fb.put_char(base_x + dx, base_y, '▀', pole);
            }

            let sizes = &snap.pegs[peg.index()];
            let lifted = snap.lifted == Some(peg);
            let visible = if lifted {
                sizes.len().saturating_sub(1)
            } else {
                sizes.len()
            };
            for (level, &size) in sizes.iter().take(visible).enumerate() {
                let y = base_y - 1 - level as u16;
                self.draw_disc(fb, center, y, size, &palette);
            }

            // Peg number and cursor under the frame.
            let label_y = start_y + frame_h;
            let number_style = if hud.cursor == peg { LABEL } else { VALUE };
            fb.put_u64(center, label_y, peg.number() as u64, number_style);
            if hud.cursor == peg {
                fb.put_char(center, label_y + 1, '▲', LABEL);
            }
        }

        // Held disc floats above the cursor peg.
        if let Some(from) = snap.lifted {
            if let Some(size) = snap.top_size(from) {
                let center = start_x + 1 + hud.cursor.index() as u16 * self.col_w + self.col_w / 2;
                self.draw_disc(fb, center, lift_y, size, &palette);
            }
        }

        let panel_x = start_x + frame_w + 2;
        self.draw_stats(fb, snap, viewport, panel_x, start_y);

        match snap.phase {
            Phase::Won => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!"),
            Phase::TimedOut => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAMEOVER")
            }
            _ if snap.solving => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, 2, " SOLVING ")
            }
            _ => {}
        }

        let mut y = start_y + frame_h + 3;
        if let Some(name) = hud.name_entry {
            let x = fb.put_str(1, y, "Name: ", LABEL);
            let x = fb.put_str(x, y, name, VALUE);
            fb.put_char(x, y, '_', LABEL);
            fb.put_str(x + 2, y, "(Enter to save, Esc to cancel)", HINT);
            y += 1;
        }
        if let Some(status) = hud.status {
            fb.put_str(1, y, status, VALUE);
            y += 1;
        }

        let help_y = viewport.height.saturating_sub(1);
        fb.put_str(1, help_y, HELP, HINT);

        if let Some(entries) = hud.log {
            y = self.draw_log(fb, entries, y + 1, help_y);
        }
        if let Some(records) = hud.records {
            self.draw_records(fb, records, y + 1, help_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_disc(&self, fb: &mut FrameBuffer, center: u16, y: u16, size: u8, palette: &Palette) {
        let half = size as u16;
        let style = CellStyle::fg(palette.for_size(size)).on(BOARD_BG);
        fb.fill_rect(center - half, y, 2 * half + 1, 1, '█', style);
    }

    fn draw_stats(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y0: u16,
    ) {
        if x + 14 >= viewport.width {
            return;
        }

        let rows: [(&str, String); 8] = [
            ("DISCS", snap.num_discs.to_string()),
            ("TIMER", format!("{} min", snap.timer_minutes)),
            ("TIME LEFT", format_mm_ss(snap.seconds_left.unwrap_or(0))),
            ("MOVES", snap.moves.to_string()),
            ("RULE BREAKS", snap.rule_break_attempts.to_string()),
            ("MIN MOVES", snap.min_moves.to_string()),
            ("ELAPSED", format!("{}.{:01}s", snap.elapsed_ms / 1000, (snap.elapsed_ms % 1000) / 100)),
            (
                "SOLVER",
                match snap.solver_progress {
                    Some((pos, len)) => format!("{}/{}", pos, len),
                    None => "-".to_string(),
                },
            ),
        ];

        for (i, (label, value)) in rows.iter().enumerate() {
            let y = y0 + i as u16;
            fb.put_str(x, y, label, LABEL);
            fb.put_str(x + 13, y, value, VALUE);
        }
    }

    fn draw_log(&self, fb: &mut FrameBuffer, entries: &[MoveLogEntry], y0: u16, limit_y: u16) -> u16 {
        if y0 >= limit_y {
            return y0;
        }
        fb.put_str(1, y0, "MOVE LOG  start, end, from, to", LABEL);
        let rows = limit_y.saturating_sub(y0 + 1).min(10) as usize;
        let skip = entries.len().saturating_sub(rows);
        let mut y = y0 + 1;
        for entry in entries.iter().skip(skip) {
            fb.put_str(3, y, &entry.to_string(), VALUE);
            y += 1;
        }
        if entries.is_empty() {
            fb.put_str(3, y, "(no moves yet)", HINT);
            y += 1;
        }
        y
    }

    fn draw_records(&self, fb: &mut FrameBuffer, records: &[SessionRecord], y0: u16, limit_y: u16) {
        if y0 >= limit_y {
            return;
        }
        const COLS: [(&str, u16); 7] = [
            ("Name", 16),
            ("Discs", 7),
            ("Moves", 7),
            ("Breaks", 8),
            ("Timer", 7),
            ("Left", 7),
            ("Time(ms)", 10),
        ];

        let mut x = 1;
        for (title, w) in COLS {
            fb.put_str(x, y0, title, LABEL);
            x += w;
        }

        let rows = limit_y.saturating_sub(y0 + 1) as usize;
        let skip = records.len().saturating_sub(rows);
        for (i, rec) in records.iter().skip(skip).enumerate() {
            let y = y0 + 1 + i as u16;
            let cells = [
                rec.name.clone(),
                rec.num_discs.to_string(),
                rec.moves.to_string(),
                rec.rule_break_attempts.to_string(),
                rec.timer_label(),
                rec.remaining_label(),
                rec.elapsed_ms.to_string(),
            ];
            let mut x = 1;
            for ((_, w), text) in COLS.iter().zip(cells.iter()) {
                fb.put_str_clipped(x, y, text, w - 1, VALUE);
                x += w;
            }
        }
        if records.is_empty() {
            fb.put_str(3, y0 + 1, "(no records)", HINT);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
