//! Crossterm frontend: draws the arena in character cells and reads the
//! keyboard on a background thread.
//!
//! Terminals without key-release reporting only send presses and repeats, so
//! a key counts as held for `HOLD_WINDOW` frames after its last event.
//! Every blocking screen drops input queued before it was drawn.

use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Color, Print};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, QueueableCommand};
use tracing::{debug, info};

use tankwar_core::commands::InputSnapshot;
use tankwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, BONUS_SIZE, TANK_SIZE};
use tankwar_core::enums::{BonusKind, Direction, MapId, Side};
use tankwar_core::state::{MatchOutcome, MatchSnapshot, TankView};
use tankwar_core::types::Rgb;
use tankwar_maps::catalog;

use crate::assets::{AssetStore, Sprite};
use crate::frontend::{InputFrame, InputSource, MapMenu, Renderer, ResultsScreen};

/// Frames a key stays held after its last press or repeat event.
const HOLD_WINDOW: u64 = 4;

const MAX_NAME_LEN: usize = 16;

/// Rows reserved above the arena for the status line.
const HUD_ROWS: u16 = 1;

/// Used when the terminal cannot report its size.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalFrontend<W: Write = Stdout> {
    out: W,
    events: Receiver<Event>,
    /// Frame at which each key was last seen down.
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    release_events: bool,
    /// Raw mode and the alternate screen were switched on by us.
    owns_terminal: bool,
    assets: AssetStore,
    player_sprite: Sprite,
    enemy_sprite: Sprite,
    background: Sprite,
    player_name: String,
    map: Option<MapId>,
}

impl TerminalFrontend<Stdout> {
    /// Switch the terminal to raw mode and the alternate screen, and start
    /// the input thread. The terminal is restored on drop.
    pub fn start(assets: AssetStore) -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter the alternate screen")?;

        let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
        }
        debug!(release_events, "Terminal ready");

        let (tx, events) = mpsc::channel();
        thread::spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        let mut frontend = Self::with_input(out, events, assets);
        frontend.release_events = release_events;
        frontend.owns_terminal = true;
        Ok(frontend)
    }
}

impl<W: Write> TerminalFrontend<W> {
    /// Frontend drawing to `out` and reading `events`. Leaves the terminal
    /// mode alone.
    pub fn with_input(out: W, events: Receiver<Event>, assets: AssetStore) -> Self {
        let player_sprite = assets.player_tank();
        let enemy_sprite = assets.enemy_tank();
        let background = assets.background(None);
        Self {
            out,
            events,
            key_frame: HashMap::new(),
            frame: 0,
            release_events: false,
            owns_terminal: false,
            assets,
            player_sprite,
            enemy_sprite,
            background,
            player_name: String::new(),
            map: None,
        }
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Block until the next key press.
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            let ev = self
                .events
                .recv()
                .map_err(|_| anyhow!("Input thread stopped"))?;
            if let Event::Key(key) = ev {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }

    /// Drop queued events and forget held keys.
    fn discard_pending(&mut self) {
        while self.events.try_recv().is_ok() {}
        self.key_frame.clear();
    }

    /// Apply pending key events. Returns true if quit was pressed.
    fn drain_events(&mut self) -> bool {
        let mut quit = false;
        while let Ok(ev) = self.events.try_recv() {
            let Event::Key(key) = ev else { continue };
            if is_quit(&key) {
                quit = true;
            }
            let code = normalize(key.code);
            match key.kind {
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
                _ => {
                    self.key_frame.insert(code, self.frame);
                }
            }
        }
        quit
    }

    fn is_held(&self, code: KeyCode) -> bool {
        match self.key_frame.get(&code) {
            Some(_) if self.release_events => true,
            Some(&seen) => self.frame - seen <= HOLD_WINDOW,
            None => false,
        }
    }

    // ── Drawing ─────────────────────────────────────────────────────────

    fn screen_size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }

    fn clear(&mut self) -> Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Paint rows with the background placeholder color, if the background
    /// sprite is missing.
    fn fill_background(&mut self, top: u16, rows: u16, cols: u16) -> Result<()> {
        let Some(color) = self.background.placeholder_color() else {
            return Ok(());
        };
        let blank = " ".repeat(cols as usize);
        self.out.queue(style::SetBackgroundColor(to_color(color)))?;
        for row in top..top + rows {
            self.out.queue(cursor::MoveTo(0, row))?.queue(Print(&blank))?;
        }
        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    /// Clear and paint a full-screen menu background.
    fn menu_screen(&mut self) -> Result<()> {
        let (cols, rows) = self.screen_size();
        self.clear()?;
        self.fill_background(0, rows, cols)
    }

    fn text(&mut self, col: u16, row: u16, color: Color, text: &str) -> Result<()> {
        self.out
            .queue(cursor::MoveTo(col, row))?
            .queue(style::SetForegroundColor(color))?
            .queue(Print(text))?;
        Ok(())
    }

    fn centered(&mut self, row: u16, color: Color, text: &str) -> Result<()> {
        let (cols, _) = self.screen_size();
        let col = cols.saturating_sub(text.chars().count() as u16) / 2;
        self.text(col, row, color, text)
    }

    /// Border takes the obstacle color of the map being played.
    fn border_color(&self) -> Rgb {
        self.map
            .map(|map| catalog::definition(map).obstacle_color)
            .unwrap_or(Rgb::DARK_GRAY)
    }

    fn draw_border(&mut self, view: &Viewport) -> Result<()> {
        let color = to_color(self.border_color());
        let bottom = HUD_ROWS + view.rows;
        let line = "─".repeat(view.cols as usize);
        self.text(0, bottom, color, &line)
    }

    fn draw_tank(&mut self, view: &Viewport, tank: &TankView, sprite_color: Color) -> Result<()> {
        let half = TANK_SIZE / 2.0;
        let (col, row) = view.cell(tank.position.x + half, tank.position.y + half);
        let color = if tank.invulnerable {
            to_color(Rgb::YELLOW)
        } else {
            sprite_color
        };
        self.text(col, row, color, facing_glyph(tank.facing))
    }
}

impl<W: Write> Drop for TerminalFrontend<W> {
    fn drop(&mut self) {
        if !self.owns_terminal {
            return;
        }
        if self.release_events {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl<W: Write> Renderer for TerminalFrontend<W> {
    fn arena_size(&self) -> (f64, f64) {
        (ARENA_WIDTH, ARENA_HEIGHT)
    }

    fn begin_match(&mut self, player_name: &str, map: MapId) {
        self.player_name = player_name.to_string();
        self.map = Some(map);
        self.background = self.assets.background(Some(map));
        self.key_frame.clear();
    }

    fn present(&mut self, snapshot: &MatchSnapshot) -> Result<()> {
        let (cols, rows) = self.screen_size();
        let view = Viewport::fit(cols, rows);
        self.clear()?;
        self.fill_background(HUD_ROWS, view.rows, view.cols)?;
        let hud = hud_line(&self.player_name, snapshot);
        self.text(0, 0, Color::White, &hud)?;
        self.draw_border(&view)?;

        // ── Obstacles ───────────────────────────────────────────────────
        for obstacle in &snapshot.obstacles {
            let (left, top) = view.cell(obstacle.position.x, obstacle.position.y);
            let (right, bottom) = view.cell(
                obstacle.position.x + obstacle.width - 1.0,
                obstacle.position.y + obstacle.height - 1.0,
            );
            let fill = "█".repeat((right - left + 1) as usize);
            for row in top..=bottom {
                self.text(left, row, to_color(obstacle.color), &fill)?;
            }
        }

        // ── Bonuses ─────────────────────────────────────────────────────
        for bonus in &snapshot.bonuses {
            let (col, row) = view.cell(
                bonus.position.x + BONUS_SIZE / 2.0,
                bonus.position.y + BONUS_SIZE / 2.0,
            );
            let glyph = match bonus.kind {
                BonusKind::Shield => "S",
                BonusKind::Invulnerability => "I",
                BonusKind::ExplosiveBullet => "E",
            };
            self.text(col, row, to_color(Rgb::YELLOW), glyph)?;
        }

        // ── Bullets ─────────────────────────────────────────────────────
        for bullet in &snapshot.bullets {
            let (col, row) = view.cell(bullet.position.x, bullet.position.y);
            let color = match bullet.side {
                Side::Player => Color::White,
                Side::Enemy => to_color(Rgb::RED),
            };
            self.text(col, row, color, "•")?;
        }

        // ── Tanks ───────────────────────────────────────────────────────
        let enemy_color = to_color(self.enemy_sprite.placeholder_color().unwrap_or(Rgb::BLUE));
        for enemy in &snapshot.enemies {
            self.draw_tank(&view, enemy, enemy_color)?;
        }
        if let Some(player) = &snapshot.player {
            let player_color =
                to_color(self.player_sprite.placeholder_color().unwrap_or(Rgb::GREEN));
            self.draw_tank(&view, player, player_color)?;
        }

        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> InputSource for TerminalFrontend<W> {
    fn poll(&mut self) -> Result<InputFrame> {
        self.frame += 1;
        let quit = self.drain_events();
        let held = |codes: [KeyCode; 2]| codes.iter().any(|&code| self.is_held(code));
        let input = InputSnapshot {
            up: held([KeyCode::Up, KeyCode::Char('w')]),
            down: held([KeyCode::Down, KeyCode::Char('s')]),
            left: held([KeyCode::Left, KeyCode::Char('a')]),
            right: held([KeyCode::Right, KeyCode::Char('d')]),
            fire: self.is_held(KeyCode::Char(' ')),
        };
        Ok(InputFrame { input, quit })
    }
}

impl<W: Write> MapMenu for TerminalFrontend<W> {
    fn player_name(&mut self) -> Result<Option<String>> {
        self.discard_pending();
        let mut name = String::new();
        loop {
            self.menu_screen()?;
            self.centered(2, Color::Green, "T A N K W A R")?;
            self.centered(5, Color::White, "Enter your name:")?;
            self.centered(7, Color::Yellow, &format!("{name}_"))?;
            self.centered(10, Color::DarkGrey, "Enter to continue, Esc to quit")?;
            self.out.flush()?;

            let key = self.next_key()?;
            if is_interrupt(&key) {
                return Ok(None);
            }
            match key.code {
                KeyCode::Enter => return Ok(Some(name)),
                KeyCode::Backspace => {
                    name.pop();
                }
                KeyCode::Char(c) if !c.is_control() && name.chars().count() < MAX_NAME_LEN => {
                    name.push(c);
                }
                _ => {}
            }
        }
    }

    fn choose_map(&mut self) -> Result<Option<MapId>> {
        self.discard_pending();
        self.map = None;
        self.background = self.assets.background(None);
        loop {
            self.menu_screen()?;
            self.centered(2, Color::Green, "Choose a map")?;
            for (i, map) in MapId::ALL.iter().enumerate() {
                let line = format!("{}. {}", i + 1, map.display_name());
                self.centered(5 + 2 * i as u16, Color::White, &line)?;
            }
            self.centered(12, Color::DarkGrey, "1-3 to play, q to quit")?;
            self.out.flush()?;

            let key = self.next_key()?;
            if is_quit(&key) {
                return Ok(None);
            }
            let choice = match key.code {
                KeyCode::Char('1') => Some(MapId::UndergroundStorage),
                KeyCode::Char('2') => Some(MapId::CastleLawn),
                KeyCode::Char('3') => Some(MapId::BesiegedCity),
                _ => None,
            };
            if let Some(map) = choice {
                info!(map = map.display_name(), "Map selected");
                return Ok(Some(map));
            }
        }
    }
}

impl<W: Write> ResultsScreen for TerminalFrontend<W> {
    fn show_results(&mut self, player_name: &str, outcome: &MatchOutcome) -> Result<()> {
        // Keys still queued from the match (held fire, repeats) must not
        // dismiss the screen.
        self.discard_pending();

        let (title, color) = if outcome.victory {
            ("VICTORY", Color::Green)
        } else {
            ("DEFEAT", Color::Red)
        };
        self.clear()?;
        self.centered(2, color, title)?;
        self.centered(5, Color::White, player_name)?;
        self.centered(7, Color::White, &format!("Time: {:.1} s", outcome.elapsed_secs))?;
        self.centered(
            8,
            Color::White,
            &format!("Bonuses collected: {}", outcome.bonuses_collected),
        )?;
        self.centered(9, Color::White, &format!("Score: {}", outcome.score))?;
        self.centered(12, Color::DarkGrey, "Press Enter to return to the menu")?;
        self.out.flush()?;

        loop {
            let key = self.next_key()?;
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}

/// Status line above the arena.
fn hud_line(player_name: &str, snapshot: &MatchSnapshot) -> String {
    let mut line = format!(
        "{} | Score {:>5} | Enemies {}/{} | {:>6.1}s",
        player_name,
        snapshot.score.score,
        snapshot.score.enemies_destroyed,
        snapshot.score.enemies_total,
        snapshot.score.elapsed_secs,
    );
    if let Some(player) = &snapshot.player {
        line.push_str(&format!(" | HP {:>2} | Ammo {}", player.health, player.ammo));
        if player.shield {
            line.push_str(" | Shield");
        }
        if player.invulnerable {
            line.push_str(" | Invulnerable");
        }
    }
    line
}

/// Maps arena coordinates onto the character grid below the HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    /// Arena area for a terminal of `cols` x `rows`, leaving the HUD line
    /// and the bottom border.
    fn fit(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.saturating_sub(HUD_ROWS + 1).max(1),
        }
    }

    fn cell(&self, x: f64, y: f64) -> (u16, u16) {
        let col = (x / ARENA_WIDTH * self.cols as f64).floor();
        let row = (y / ARENA_HEIGHT * self.rows as f64).floor();
        let col = col.clamp(0.0, (self.cols - 1) as f64) as u16;
        let row = row.clamp(0.0, (self.rows - 1) as f64) as u16;
        (col, HUD_ROWS + row)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

fn facing_glyph(facing: Direction) -> &'static str {
    match facing {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

/// Letters are tracked lowercase so Shift does not drop a held key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Esc or Ctrl-C. Quits from every screen, including text entry.
fn is_interrupt(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    is_interrupt(key) || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
