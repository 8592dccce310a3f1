//! Test card runner (default binary).
//!
//! Drives the engine with crossterm input and a half-block terminal
//! presenter. Shows the character set, the palette, flashing text and the
//! drawing primitives; press `i` to open an input prompt, `q` or Esc to
//! quit.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use retroscreen::engine::{Engine, Game};
use retroscreen::term::TermPresenter;
use retroscreen::types::{Color, Key, TextEvent, SCREEN_COLS, SPECTRUM_COLOURS};

const POLL_MS: u64 = 10;

struct TestCard {
    ticks: u32,
    prompt: Option<retroscreen::InputPrompt>,
}

impl TestCard {
    fn new() -> Self {
        Self {
            ticks: 0,
            prompt: None,
        }
    }
}

impl Game for TestCard {
    fn init(&mut self, screen: &mut Engine) {
        screen.clear(Color::WHITE);

        screen.print(1, 2, "retroscreen test card");

        // Character set.
        let ascii: String = (' '..='~').collect();
        screen.print(3, 2, &ascii[..56]);
        screen.print(4, 2, &ascii[56..]);

        // Preset block graphics live in the uppercase slots.
        screen.print(6, 2, "\u{00ac}A\u{00ac}B\u{00ac}C\u{00ac}D\u{00ac}E\u{00ac}F\u{00ac}G\u{00ac}H\u{00ac}K\u{00ac}P\u{00ac}V\u{00ac}W\u{00ac}X");

        // Palette bars.
        for (i, colour) in SPECTRUM_COLOURS.iter().enumerate() {
            screen.set_pen(*colour);
            screen.print(8, 2 + 4 * i as i32, "\u{00ac}K\u{00ac}K\u{00ac}K");
        }
        screen.set_pen(Color::BLACK);

        screen.set_flash(true);
        screen.print(10, 2, "FLASH");
        screen.set_flash(false);
        screen.set_invert(true);
        screen.print(10, 10, "INVERT");
        screen.set_invert(false);

        // Primitives.
        screen.set_pen(Color::RED);
        screen.line(16, 100, 240, 160);
        screen.line(-50, 130, 240, 130);
        screen.set_pen(Color::BLUE);
        screen.circle(320, 130, 28);
        screen.ellipse(320, 130, 48, 16);
        screen.set_pen(Color::BLACK);

        screen.print(20, 2, "press i for input, q to quit");
    }

    fn frame(&mut self, screen: &mut Engine) {
        self.ticks = self.ticks.wrapping_add(1);

        // Marching pixel along the bottom of the card.
        let x = (self.ticks as i32 * 4) % 480;
        screen.set_pen(SPECTRUM_COLOURS[(self.ticks as usize) % 8]);
        screen.plot(x, 300);
        screen.set_pen(Color::BLACK);

        if let Some(mut prompt) = self.prompt.take() {
            match prompt.try_resolve() {
                Some(text) => {
                    let end = screen.print(24, 2, "you typed: ");
                    screen.print(24, end + 1, &text);
                }
                None => self.prompt = Some(prompt),
            }
        }

        if screen.last_key() == Some(Key::Char('i')) && self.prompt.is_none() {
            screen.print(22, 2, &" ".repeat((SCREEN_COLS - 2) as usize));
            screen.print(22, 2, "name? ");
            self.prompt = Some(screen.input_session(22, 8, 16));
        }
    }
}

fn main() -> Result<()> {
    let mut presenter = TermPresenter::new(2);
    presenter.enter()?;
    let result = run(presenter);
    // Always restore the terminal, even on error.
    let mut restore = TermPresenter::new(2);
    let _ = restore.exit();
    result
}

fn run(presenter: TermPresenter) -> Result<()> {
    let mut engine = Engine::new();
    engine.set_presenter(Box::new(presenter));
    engine.set_fps(10);

    let mut game = TestCard::new();
    engine.start(&mut game);

    let started = Instant::now();
    loop {
        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if !engine.awaiting_input()
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        return Ok(());
                    }
                    engine.on_key_down(map_key(key.code));
                    if let Some(text) = map_text_event(key.code) {
                        engine.on_text_input(text);
                    }
                }
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        engine.on_timing_signal(now_ms, &mut game);
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) => Key::Function(n),
        _ => Key::Other,
    }
}

fn map_text_event(code: KeyCode) -> Option<TextEvent> {
    match code {
        KeyCode::Enter => Some(TextEvent::Terminator),
        KeyCode::Backspace => Some(TextEvent::Delete),
        KeyCode::Char(c) => Some(TextEvent::Char(c)),
        _ => None,
    }
}
