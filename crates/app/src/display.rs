//! Rendering for the terminal front end.

use crossterm::style::Stylize;

use services::{SessionEvent, SessionStats};
use trainer_core::model::Sentence;

pub fn intro() {
    println!("{}", "Adaptive translation practice".bold());
    println!(
        "Translate each sentence and press Enter. Commands: {}",
        ":skip  :next  :stats  :quit".dark_grey()
    );
    println!();
}

pub fn prompt() {
    use std::io::Write;
    print!("🇬🇧 ");
    let _ = std::io::stdout().flush();
}

/// Print one batch of engine events in order.
///
/// `live` is the sentence still on screen, used when a rejection needs
/// its text re-rendered with highlights.
pub fn render_events(events: &[SessionEvent], show_difficulty: bool, live: Option<&Sentence>) {
    for event in events {
        match event {
            SessionEvent::SentencePresented(sentence) => {
                if show_difficulty {
                    println!(
                        "🇫🇷 {}  {}",
                        sentence.text,
                        format!("📊 {:.2}", sentence.difficulty).dark_grey()
                    );
                } else {
                    println!("🇫🇷 {}", sentence.text);
                }
            }
            SessionEvent::StoryFinished(_) => {
                println!("🏁 {}", "story complete — type :next to continue".bold());
            }
            SessionEvent::EmptySubmission => {
                println!("{}", "enter a translation before checking".yellow());
            }
            SessionEvent::Accepted { difficulty } => {
                if show_difficulty {
                    println!("{} ({difficulty:.2})", "✓ correct".green());
                } else {
                    println!("{}", "✓ correct".green());
                }
            }
            SessionEvent::Rejected {
                wrong_spans,
                difficulty,
            } => {
                println!("{}", "✗ try again".red());
                if let Some(sentence) = live {
                    if !wrong_spans.is_empty() {
                        println!("🇫🇷 {}", highlight(&sentence.text, wrong_spans));
                    }
                }
                if show_difficulty {
                    println!("{}", format!("📊 {difficulty:.2}").dark_grey());
                }
            }
            SessionEvent::Skipped => {
                println!("{}", "skipped".dark_grey());
            }
            SessionEvent::ContentUnavailable { reason } => {
                eprintln!(
                    "{}",
                    format!("could not fetch the next sentence ({reason}); press Enter to retry")
                        .red()
                );
            }
            SessionEvent::ScoringUnavailable { reason } => {
                eprintln!(
                    "{}",
                    format!("could not score the translation ({reason}); try again").red()
                );
            }
        }
    }
}

pub fn render_stats(stats: &SessionStats, visible: bool) {
    if !visible {
        println!("{}", "stats hidden".dark_grey());
        return;
    }
    println!("{}", "── session ──".bold());
    println!("  level          {:.2}", stats.difficulty);
    match stats.story_difficulty {
        Some(level) => println!("  story level    {level:.2}"),
        None => println!("  story level    -"),
    }
    println!("  stories seen   {}", stats.stories_completed);
    println!(
        "  rounds         {} ✓ / {} ✗ / {} skipped",
        stats.rounds.accepted, stats.rounds.rejected, stats.rounds.skipped
    );
    println!("  started        {}", stats.started_at.format("%H:%M UTC"));
}

pub fn hint_story_complete() {
    println!(
        "{}",
        "the story is over — type :next to start a new one".yellow()
    );
}

fn highlight(original: &str, spans: &[String]) -> String {
    mark_spans(original, spans, |span| {
        format!("{}", span.red().bold())
    })
}

/// Wrap each span's first occurrence inside `original`.
///
/// Spans apply one after another by literal substring replacement: a
/// recurring span marks only its first occurrence, and overlapping spans
/// land wherever the earlier replacements left them.
fn mark_spans(original: &str, spans: &[String], wrap: impl Fn(&str) -> String) -> String {
    let mut marked = original.to_owned();
    for span in spans {
        // an empty span would anchor at position 0
        if span.is_empty() {
            continue;
        }
        let wrapped = wrap(span);
        marked = marked.replacen(span.as_str(), &wrapped, 1);
    }
    marked
}
