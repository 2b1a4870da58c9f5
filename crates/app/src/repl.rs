//! Line-oriented front end driving the session engine.
//!
//! An empty line advances (or re-tries a failed fetch), any other line is
//! submitted as a translation while a sentence is live, and `:`-prefixed
//! commands cover the remaining actions.

use std::io::{self, BufRead};

use services::{SessionEngine, SessionPhase};

use crate::display;

pub async fn run(mut engine: SessionEngine) -> Result<(), Box<dyn std::error::Error>> {
    let mut show_stats = false;

    display::intro();

    // first sentence arrives without an explicit action, as on page load
    let events = engine.advance().await?;
    display::render_events(&events, show_stats, engine.live_sentence());

    let stdin = io::stdin();
    loop {
        if engine.phase() == SessionPhase::Active {
            display::prompt();
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            ":quit" | ":q" => break,
            ":stats" => {
                show_stats = !show_stats;
                display::render_stats(&engine.stats(), show_stats);
            }
            ":skip" => {
                let events = engine.force_skip().await?;
                display::render_events(&events, show_stats, engine.live_sentence());
            }
            ":next" => {
                let events = engine.start_new_story().await?;
                display::render_events(&events, show_stats, engine.live_sentence());
            }
            text => {
                let events = match engine.phase() {
                    SessionPhase::Active => engine.submit(text).await?,
                    SessionPhase::StoryComplete => {
                        display::hint_story_complete();
                        continue;
                    }
                    SessionPhase::Idle | SessionPhase::AwaitingSentence => {
                        engine.advance().await?
                    }
                };
                display::render_events(&events, show_stats, engine.live_sentence());
            }
        }
    }

    Ok(())
}
