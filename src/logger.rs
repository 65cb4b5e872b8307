use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::{fs::{self, File}, io::Write, path::PathBuf};

/// Writes numbered run-log files for the milestones of a CLI invocation
/// (board loaded, move placed, solve finished) and echoes them to the
/// console. `max_logs == 0` means unlimited.
pub struct RunLogger {
    dir: PathBuf,
    color: bool,
    max_logs: usize,
    counter: usize,
}

impl RunLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, color, max_logs, counter: 0 })
    }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = self.dir.join(format!("runlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }
        Ok(())
    }
}
