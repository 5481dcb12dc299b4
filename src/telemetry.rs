//! Append-only frame log
//!
//! One human-readable line per frame. Writes are best-effort: a line that
//! cannot be written is dropped and the movie carries on.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

use glam::IVec2;

use crate::sim::SimState;

/// Summary of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    /// Frame sequence number, starting at 0
    pub frame: u64,
    pub character: IVec2,
    pub active_bubbles: usize,
}

impl FrameSummary {
    pub fn capture(frame: u64, state: &SimState) -> Self {
        Self {
            frame,
            character: state.character.pos,
            active_bubbles: state.active_count(),
        }
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame {}: Character at ({}, {}), Bubbles active: {}",
            self.frame, self.character.x, self.character.y, self.active_bubbles
        )
    }
}

/// Frame log appended to a file
#[derive(Debug)]
pub struct FrameLog {
    path: PathBuf,
    file: Option<LineWriter<File>>,
    dropped: u64,
}

impl FrameLog {
    /// Nothing is opened until the first record
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
            dropped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines that could not be written
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Append one line; failures are counted, never returned
    pub fn record(&mut self, summary: &FrameSummary) {
        if let Err(err) = self.try_record(summary) {
            // Reopen on the next frame
            self.file = None;
            if self.dropped == 0 {
                log::warn!(
                    "Frame log {} unavailable, dropping lines: {}",
                    self.path.display(),
                    err
                );
            }
            self.dropped += 1;
        }
    }

    fn try_record(&mut self, summary: &FrameSummary) -> io::Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?;
                LineWriter::new(file)
            }
        };
        writeln!(self.file.insert(file), "{}", summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(frame: u64) -> FrameSummary {
        FrameSummary {
            frame,
            character: IVec2::new(400, 295),
            active_bubbles: 2,
        }
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            summary(7).to_string(),
            "Frame 7: Character at (400, 295), Bubbles active: 2"
        );
    }

    #[test]
    fn test_capture_counts_active_only() {
        let mut state = SimState::default();
        state.spawn_bubble();
        state.spawn_bubble();
        state.bubbles[0].active = false;
        let captured = FrameSummary::capture(3, &state);
        assert_eq!(captured.frame, 3);
        assert_eq!(captured.character, IVec2::new(400, 300));
        assert_eq!(captured.active_bubbles, 1);
    }

    #[test]
    fn test_lines_are_appended() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("movie.anim");
        std::fs::write(&path, "earlier run\n").expect("seed file");

        let mut log = FrameLog::new(&path);
        log.record(&summary(0));
        log.record(&summary(1));
        drop(log);

        let contents = std::fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].starts_with("Frame 0:"));
        assert!(lines[2].starts_with("Frame 1:"));
    }

    #[test]
    fn test_unwritable_path_is_dropped_silently() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("movie.anim");

        let mut log = FrameLog::new(&path);
        log.record(&summary(0));
        log.record(&summary(1));
        assert_eq!(log.dropped(), 2);
        assert!(!path.exists());
    }
}
