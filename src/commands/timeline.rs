//! Timeline command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::TimelineArgs;
use crate::error::{MergeError, Result};
use crate::timeline::{self, Timeline, frames_to_seconds};

pub fn run(workspace: Option<PathBuf>, args: TimelineArgs) -> Result<()> {
    let path = match workspace {
        Some(dir) => dir.join(&args.file),
        None => args.file.clone(),
    };

    let sections = timeline::load_sections(&path)?;
    let timeline = Timeline::build(&sections, args.fps)?;

    if args.json {
        println!("{}", encode_json(&timeline)?);
    } else {
        print_table(&timeline);
    }

    Ok(())
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| MergeError::EncodeFailed {
        what: "timeline".to_string(),
        format: "JSON".to_string(),
        reason: e.to_string(),
    })
}

fn print_table(timeline: &Timeline) {
    let fps = timeline.fps;
    let header = Style::new().bold();

    println!(
        "{}",
        header.apply_to(format!(
            "{:>3}  {:>8}  {:>8}  {:>7}  title",
            "#", "start", "end", "frames"
        ))
    );
    for entry in &timeline.entries {
        println!(
            "{:>3}  {:>7.1}s  {:>7.1}s  {:>7}  {}",
            entry.index + 1,
            frames_to_seconds(entry.start_frame, fps),
            frames_to_seconds(entry.end_frame, fps),
            entry.duration,
            timeline::first_line(&entry.title)
        );
        for cue in entry.clipped_bullets() {
            println!(
                "     {} bullet '{}' finishes at frame {} of {}",
                Style::new().yellow().apply_to("clipped:"),
                cue.text,
                cue.end_frame,
                entry.duration
            );
        }
    }
    println!();
    println!(
        "{} {} sections, {} frames ({:.1}s at {} fps)",
        header.apply_to("Total:"),
        timeline.entries.len(),
        timeline.total_frames,
        timeline.total_seconds(),
        fps
    );
}
