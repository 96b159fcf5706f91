use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord<'a> {
    pub seed: &'a str,
    pub candidate: &'a str,
}

pub trait OutputWriter {
    /// `seed` is the input line the candidate was generated from.
    fn write(&mut self, seed: &str, candidate: &str) -> Result<()>;
    fn close(&mut self) -> Result<()> { Ok(()) }
}

enum Sink {
    Stdout(BufWriter<io::Stdout>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(w) => w.write(buf),
            Sink::File(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(w) => w.flush(),
            Sink::File(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

impl Sink {
    /// Stdout when `path` is `None`. Gzip only applies to files.
    fn open(path: Option<&Path>, gzip: bool, append: bool) -> Result<Self> {
        let Some(p) = path else { return Ok(Sink::Stdout(BufWriter::new(io::stdout()))) };
        let mut oo = OpenOptions::new();
        oo.create(true).write(true);
        if append { oo.append(true); } else { oo.truncate(true); }
        let f = oo.open(p).map_err(|e| Error::io("cannot open output file", p, e))?;
        let w = BufWriter::new(f);
        Ok(if gzip { Sink::Gzip(GzEncoder::new(w, Compression::default())) } else { Sink::File(w) })
    }

    fn finish(self) -> io::Result<()> {
        match self {
            Sink::Stdout(mut w) => w.flush(),
            Sink::File(mut w) => w.flush(),
            Sink::Gzip(w) => w.finish()?.flush(),
        }
    }
}

fn sink_name(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("<stdout>"))
}

/// One candidate per line.
pub struct PlainWriter {
    sink: Option<Sink>,
    name: PathBuf,
}

impl PlainWriter {
    pub fn new(path: Option<PathBuf>, gzip: bool, append: bool) -> Result<Self> {
        let sink = Sink::open(path.as_deref(), gzip, append)?;
        Ok(PlainWriter { sink: Some(sink), name: sink_name(path.as_deref()) })
    }
}

impl OutputWriter for PlainWriter {
    fn write(&mut self, _seed: &str, candidate: &str) -> Result<()> {
        if let Some(s) = self.sink.as_mut() {
            writeln!(s, "{}", candidate).map_err(|e| Error::io("cannot write output", &self.name, e))?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.sink.take() {
            Some(s) => s.finish().map_err(|e| Error::io("cannot finish output", &self.name, e)),
            None => Ok(()),
        }
    }
}

/// One `{"seed":..,"candidate":..}` object per line.
pub struct JsonLinesWriter {
    sink: Option<Sink>,
    name: PathBuf,
}

impl JsonLinesWriter {
    pub fn new(path: Option<PathBuf>, gzip: bool, append: bool) -> Result<Self> {
        let sink = Sink::open(path.as_deref(), gzip, append)?;
        Ok(JsonLinesWriter { sink: Some(sink), name: sink_name(path.as_deref()) })
    }
}

impl OutputWriter for JsonLinesWriter {
    fn write(&mut self, seed: &str, candidate: &str) -> Result<()> {
        let line = serde_json::to_string(&CandidateRecord { seed, candidate })?;
        if let Some(s) = self.sink.as_mut() {
            writeln!(s, "{}", line).map_err(|e| Error::io("cannot write output", &self.name, e))?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.sink.take() {
            Some(s) => s.finish().map_err(|e| Error::io("cannot finish output", &self.name, e)),
            None => Ok(()),
        }
    }
}

pub fn build_writer(path: Option<PathBuf>, output_type: &str, gzip: bool, append: bool) -> Result<Box<dyn OutputWriter>> {
    match output_type {
        "txt" => Ok(Box::new(PlainWriter::new(path, gzip, append)?)),
        "json" | "jsonl" => Ok(Box::new(JsonLinesWriter::new(path, gzip, append)?)),
        other => Err(Error::OutputType(other.to_string())),
    }
}
