//! Plays a game over stdin and stdout.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use rand::{seq::SliceRandom, Rng};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};
use tracing::{debug, instrument, warn};

use crate::games::dictle::{
    Celebration, FeedbackColor, GameHandle, LookupState, ParticleShape, Rgb, Session,
    SessionEvent,
};

const QUIT: &str = ":quit";
const DEFINITIONS: &str = ":defs";

const PARTICLES_PER_GLYPH: u32 = 10;
const GLYPHS_PER_ROW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    Won { fail_count: u32 },
    Abandoned { word: String },
}

/// Runs the game on stdin and stdout until the word is guessed, or the
/// player quits or closes stdin.
#[instrument(skip_all)]
pub async fn play(handle: GameHandle) -> crate::Result<Ending> {
    let stdin = BufReader::new(tokio::io::stdin());
    run(handle, stdin, &mut io::stdout()).await
}

async fn run<R, W>(handle: GameHandle, input: R, out: &mut W) -> crate::Result<Ending>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut events = handle.subscribe();
    let mut events_open = true;
    let mut lines = input.lines();

    render_intro(out, &*handle.session().await)?;
    prompt(out)?;

    loop {
        tokio::select! {
            // a winning guess followed by end of input must still count as a win
            biased;

            event = events.recv(), if events_open => {
                match event {
                    Ok(SessionEvent::DefinitionsLoaded { .. }) => {
                        writeln!(out)?;
                        render_definitions(out, &*handle.session().await)?;
                        prompt(out)?;
                    }
                    Ok(SessionEvent::LookupFailed { message }) => {
                        writeln!(out)?;
                        render_lookup_failed(out, &message)?;
                        prompt(out)?;
                    }
                    Ok(SessionEvent::Won(celebration)) => {
                        render_celebration(out, &celebration, &mut rand::thread_rng())?;

                        let session = handle.session().await;
                        render_won(out, &session)?;

                        return Ok(Ending::Won {
                            fail_count: session.fail_count(),
                        });
                    }
                    Err(RecvError::Lagged(skipped)) => warn!(skipped, "missed session events"),
                    Err(RecvError::Closed) => events_open = false,
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match line.trim() {
                    QUIT => break,
                    DEFINITIONS => {
                        render_definitions(out, &*handle.session().await)?;
                        prompt(out)?;
                    }
                    _ => {
                        let outcome = handle.submit_guess(&line).await;
                        debug!(?outcome, "guess evaluated");

                        render_feedback(out, &*handle.session().await)?;

                        // a win is rendered when its event arrives
                        if !outcome.is_correct() {
                            prompt(out)?;
                        }
                    }
                }
            }
        }
    }

    let word = handle.session().await.target_word().to_owned();
    render_abandoned(out, &word)?;

    Ok(Ending::Abandoned { word })
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn render_intro<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", "guess the word from its definitions!".bold())?;
    writeln!(
        out,
        "{}  ({} letters)",
        session.word_display(),
        session.target_word().chars().count()
    )?;
    render_definitions(out, session)?;
    writeln!(
        out,
        "{}",
        format!("type a guess, {DEFINITIONS} to list the definitions, or {QUIT} to give up")
            .dim()
    )
}

fn render_definitions<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.lookup() {
        LookupState::Pending => writeln!(out, "{}", "looking up definitions...".dim()),
        LookupState::Failed(message) => render_lookup_failed(out, message),
        LookupState::Loaded if session.definitions().is_empty() => writeln!(
            out,
            "{}",
            "the dictionary has nothing on this one, you're on your own!".yellow()
        ),
        LookupState::Loaded => {
            writeln!(out, "{}", "definitions:".bold())?;
            for (number, definition) in session.definitions().iter().enumerate() {
                writeln!(out, "  {}. {definition}", number + 1)?;
            }
            Ok(())
        }
    }
}

fn render_lookup_failed<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} ({message}), but you can keep guessing",
        "couldn't look up definitions".yellow()
    )
}

fn render_feedback<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    if let Some(feedback) = session.feedback() {
        let feedback = match session.feedback_color() {
            FeedbackColor::Success => feedback.green(),
            FeedbackColor::Failure => feedback.red(),
        };
        writeln!(out, "{feedback}")?;
    }

    if session.status().is_playing() {
        writeln!(
            out,
            "{}  failed guesses: {}",
            session.word_display(),
            session.fail_count()
        )?;
    }

    Ok(())
}

/// Text-mode confetti: one glyph per ten particles, in the burst's shapes
/// and colors.
fn render_celebration<W, R>(out: &mut W, celebration: &Celebration, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let glyphs = (celebration.particle_count / PARTICLES_PER_GLYPH).max(1) as usize;

    for index in 0..glyphs {
        if index > 0 && index % GLYPHS_PER_ROW == 0 {
            writeln!(out)?;
        }

        let glyph = match celebration.shapes.choose(rng) {
            Some(ParticleShape::Star) | None => "★",
            Some(ParticleShape::Square) => "■",
        };
        let Rgb(r, g, b) = celebration
            .colors
            .choose(rng)
            .copied()
            .unwrap_or(Rgb::GREEN);

        let gap = " ".repeat(rng.gen_range(1..=3));
        write!(out, "{gap}{}", glyph.with(Color::Rgb { r, g, b }))?;
    }

    writeln!(out)
}

fn render_won<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let misses = match session.fail_count() {
        0 => "first try!".to_owned(),
        1 => "after 1 wrong guess".to_owned(),
        count => format!("after {count} wrong guesses"),
    };

    writeln!(
        out,
        "the word was {}, {misses}",
        session.target_word().bold().green()
    )
}

fn render_abandoned<W: Write>(out: &mut W, word: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "the word was {}", word.bold())
}
