//! Slide-deck timeline
//!
//! An explainer video is a series of sections shown back to back, each for a
//! fixed number of frames. Within a section the title fades in first, then
//! bullets are revealed one after another. This module computes where every
//! section and bullet cue lands on the frame axis; it does no rendering.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};

/// Frame rate of the deck unless overridden
pub const DEFAULT_FPS: u32 = 30;

/// Title reveal runs over frames `0..TITLE_REVEAL_FRAMES` of a section
pub const TITLE_REVEAL_FRAMES: u32 = 30;

/// First bullet starts revealing at this frame of its section
pub const FIRST_BULLET_FRAME: u32 = 40;

/// Delay between consecutive bullet reveals
pub const BULLET_STAGGER_FRAMES: u32 = 15;

/// Length of one bullet reveal
pub const BULLET_REVEAL_FRAMES: u32 = 20;

/// One slide: a title, its bullet lines, and how long it stays on screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
    /// Frames
    pub duration: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionFile {
    List(Vec<Section>),
    Wrapped { sections: Vec<Section> },
}

/// Load sections from a YAML (or JSON) file
pub fn load_sections(path: &Path) -> Result<Vec<Section>> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::TimelineReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let file: SectionFile =
        serde_yaml::from_str(&content).map_err(|e| MergeError::TimelineParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(match file {
        SectionFile::List(sections) => sections,
        SectionFile::Wrapped { sections } => sections,
    })
}

/// Reveal window of one bullet, relative to its section start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletCue {
    pub text: String,
    pub start_frame: u32,
    pub end_frame: u32,
    /// Empty entries hold a slot in the stagger but render nothing
    pub spacer: bool,
    /// Visible text whose reveal is still running when the section ends
    pub clipped: bool,
}

/// A section placed on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub index: usize,
    pub title: String,
    pub start_frame: u32,
    pub end_frame: u32,
    pub duration: u32,
    pub title_reveal_end: u32,
    pub bullets: Vec<BulletCue>,
}

impl TimelineEntry {
    pub fn clipped_bullets(&self) -> impl Iterator<Item = &BulletCue> {
        self.bullets.iter().filter(|b| b.clipped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub fps: u32,
    pub total_frames: u32,
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Lay sections out back to back starting at frame 0
    pub fn build(sections: &[Section], fps: u32) -> Result<Self> {
        let mut entries = Vec::with_capacity(sections.len());
        let mut cursor: u32 = 0;

        for (index, section) in sections.iter().enumerate() {
            if section.duration == 0 {
                return Err(invalid(index, section, "duration must be positive"));
            }
            let end = cursor
                .checked_add(section.duration)
                .ok_or_else(|| invalid(index, section, "timeline exceeds frame range"))?;

            entries.push(TimelineEntry {
                index,
                title: section.title.clone(),
                start_frame: cursor,
                end_frame: end,
                duration: section.duration,
                title_reveal_end: TITLE_REVEAL_FRAMES.min(section.duration),
                bullets: bullet_cues(section),
            });
            cursor = end;
        }

        Ok(Self {
            fps,
            total_frames: cursor,
            entries,
        })
    }

    pub fn total_seconds(&self) -> f64 {
        frames_to_seconds(self.total_frames, self.fps)
    }
}

fn invalid(index: usize, section: &Section, reason: &str) -> MergeError {
    MergeError::InvalidSection {
        index,
        title: first_line(&section.title).to_string(),
        reason: reason.to_string(),
    }
}

fn bullet_cues(section: &Section) -> Vec<BulletCue> {
    section
        .content
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let stagger = BULLET_STAGGER_FRAMES.saturating_mul(i as u32);
            let start = FIRST_BULLET_FRAME.saturating_add(stagger);
            let end = start.saturating_add(BULLET_REVEAL_FRAMES);
            let spacer = text.trim().is_empty();
            BulletCue {
                text: text.clone(),
                start_frame: start,
                end_frame: end,
                spacer,
                clipped: !spacer && end > section.duration,
            }
        })
        .collect()
}

pub fn frames_to_seconds(frames: u32, fps: u32) -> f64 {
    if fps == 0 {
        return 0.0;
    }
    f64::from(frames) / f64::from(fps)
}

/// Titles may span several lines; tables show the first
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
