use crate::error::{Result, SimError};
use crate::snapshot::{Frame, Snapshot};
use crate::world::grid::Cell;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk encoding of recorded frames
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameFormat {
    /// One JSON array holding every frame
    Json,
    /// Frames encoded back to back, no outer length
    Bincode,
}

impl FrameFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(FrameFormat::Json),
            Some("bin") | Some("bincode") => Ok(FrameFormat::Bincode),
            _ => Err(SimError::Export(format!(
                "unsupported output extension for '{}' (use .json, .bin or .bincode)",
                path.display()
            ))),
        }
    }
}

/// Borrowed twin of [`Frame`]; serializes to the same bytes without copying the grid
#[derive(Serialize)]
struct FrameView<'a> {
    step: u32,
    max_steps: u32,
    height: usize,
    width: usize,
    cells: &'a [Cell],
    trail: Option<&'a [Cell]>,
}

impl<'a> From<&Snapshot<'a>> for FrameView<'a> {
    fn from(snap: &Snapshot<'a>) -> Self {
        Self {
            step: snap.step,
            max_steps: snap.max_steps,
            height: snap.grid.height(),
            width: snap.grid.width(),
            cells: snap.grid.as_slice(),
            trail: snap.trail.map(|t| t.as_slice()),
        }
    }
}

/// Streams every `interval`-th snapshot to disk as it is observed.
///
/// Only the write buffer is held in memory, however long the run.
#[derive(Debug)]
pub struct FrameWriter {
    writer: BufWriter<File>,
    format: FrameFormat,
    interval: u32,
    written: usize,
    last_step: Option<u32>,
}

impl FrameWriter {
    /// Create `path`, encoded according to its extension. Nothing is created
    /// when the extension is unsupported.
    pub fn create<P: AsRef<Path>>(path: P, interval: u32) -> Result<Self> {
        let path = path.as_ref();
        let format = FrameFormat::from_path(path)?;
        let mut writer = BufWriter::new(File::create(path)?);
        if format == FrameFormat::Json {
            writer.write_all(b"[")?;
        }
        Ok(Self {
            writer,
            format,
            interval: interval.max(1),
            written: 0,
            last_step: None,
        })
    }

    #[inline]
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Frames written so far
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write the snapshot if its step falls on the interval. Returns whether it was written.
    pub fn observe(&mut self, snapshot: &Snapshot<'_>) -> Result<bool> {
        if snapshot.step % self.interval != 0 {
            return Ok(false);
        }
        self.write(snapshot)?;
        Ok(true)
    }

    /// Write the final snapshot unless it was the last one written, close the
    /// container and flush. Returns the number of frames in the file.
    pub fn finish(mut self, snapshot: &Snapshot<'_>) -> Result<usize> {
        if self.last_step != Some(snapshot.step) {
            self.write(snapshot)?;
        }
        if self.format == FrameFormat::Json {
            self.writer.write_all(b"]")?;
        }
        self.writer.flush()?;
        Ok(self.written)
    }

    fn write(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        let view = FrameView::from(snapshot);
        match self.format {
            FrameFormat::Json => {
                if self.written > 0 {
                    self.writer.write_all(b",")?;
                }
                serde_json::to_writer(&mut self.writer, &view)?;
            }
            FrameFormat::Bincode => bincode::serialize_into(&mut self.writer, &view)?,
        }
        self.written += 1;
        self.last_step = Some(snapshot.step);
        Ok(())
    }
}

/// Read frames previously written by [`FrameWriter`]
pub fn read_frames<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>> {
    let path = path.as_ref();
    let format = FrameFormat::from_path(path)?;
    let mut reader = BufReader::new(File::open(path)?);
    match format {
        FrameFormat::Json => Ok(serde_json::from_reader(reader)?),
        FrameFormat::Bincode => {
            let mut frames = Vec::new();
            while !reader.fill_buf()?.is_empty() {
                frames.push(bincode::deserialize_from(&mut reader)?);
            }
            Ok(frames)
        }
    }
}
