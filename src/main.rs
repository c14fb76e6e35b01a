mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use flappy_care::care::CareKind;
use flappy_care::config::GameConfig;
use flappy_care::entities::Phase;
use flappy_care::session::Session;
use flappy_care::storage::{FileStore, HighScoreStore, NullStore};

/// Redraw cadence while nothing is ticking (menu, pause, game over).
const IDLE_FRAME: Duration = Duration::from_millis(50);

enum Command {
    Flap,
    Start,
    Pause,
    Restart,
    Care(CareKind),
    Pet,
    Quit,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Flap)
        }
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('1') => Some(Command::Care(CareKind::Food)),
        KeyCode::Char('2') => Some(Command::Care(CareKind::Medicine)),
        KeyCode::Char('3') => Some(Command::Care(CareKind::Energy)),
        KeyCode::Char('4') => Some(Command::Care(CareKind::Toy)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Pet),
        _ => None,
    }
}

/// Apply one command.  Returns `true` when the player asked to quit.
fn apply<S: HighScoreStore>(session: &mut Session<S>, command: Command, now: Instant) -> bool {
    match command {
        Command::Quit => return true,
        // Space doubles as "start" on the title screen.
        Command::Flap if session.phase() == Phase::NotStarted => session.start(now),
        Command::Flap => session.flap(),
        Command::Start => session.start(now),
        Command::Pause => session.toggle_pause(now),
        Command::Restart => session.restart(now),
        Command::Care(kind) => session.use_care_item(kind),
        Command::Pet => session.pet(),
    }
    false
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write, S: HighScoreStore>(
    out: &mut W,
    session: &mut Session<S>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = command_for(code, modifiers) {
                if apply(session, command, Instant::now()) {
                    return Ok(());
                }
            }
        }

        session.poll(Instant::now());
        display::render(out, session.state(), session.inventory())?;

        let wait = session
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_FRAME);
        thread::sleep(wait.max(Duration::from_millis(1)));
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let config = GameConfig::load_or_default();
    let store: Box<dyn HighScoreStore> = match FileStore::in_data_dir() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("no data directory; high score will not be kept");
            Box::new(NullStore)
        }
    };
    let mut session = Session::new(config, store);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut session, &rx);
    session.shutdown();

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("bye (best {})", session.state().high_score);
    result?;
    Ok(())
}
