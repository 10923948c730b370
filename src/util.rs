use std::io::Write;

use env_logger::fmt::{Color, Formatter};
use log::{Level, Record};

use crate::all::*;

fn level_color(level: Level) -> Color {
  match level {
    Level::Error => Color::Red,
    Level::Warn => Color::Yellow,
    Level::Info => Color::Green,
    Level::Debug => Color::Cyan,
    Level::Trace => Color::White,
  }
}

// One line per record: level tag, source location, message.
fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
  let level = record.level();
  let mut style = buf.style();
  style.set_color(level_color(level)).set_bold(level <= Level::Warn);
  let location = format!("{}:{}", record.file().unwrap_or("?"), record.line().unwrap_or(0));
  writeln!(buf, "{} {:24} {}", style.value(format!("{:5}", level)), location, record.args())
}

// `RUST_LOG` takes precedence over the level picked on the command line.
pub fn init_logging(level: LevelFilter) {
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .format(format_record)
    .init();
}
