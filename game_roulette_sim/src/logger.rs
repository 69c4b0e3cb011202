use std::fmt::{self, Debug, Display, Formatter, Write};
use std::io::IsTerminal;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::metadata::LevelFilter;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub fn init() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::registry().with(Logger::new());
    set_global_default(subscriber)
}

/// Writes events to stdout, colored if stdout is a terminal.
///
/// The maximum level is read from `RUST_LOG` and defaults to `INFO`.
#[derive(Debug)]
pub struct Logger {
    is_tty: bool,
    level: LevelFilter,
}

impl Logger {
    pub fn new() -> Self {
        let level = std::env::var("RUST_LOG")
            .map(|e| match e.as_str() {
                "error" | "ERROR" => LevelFilter::ERROR,
                "warn" | "WARN" => LevelFilter::WARN,
                "info" | "INFO" => LevelFilter::INFO,
                "debug" | "DEBUG" => LevelFilter::DEBUG,
                "trace" | "TRACE" => LevelFilter::TRACE,
                "off" | "OFF" => LevelFilter::OFF,
                _ => LevelFilter::INFO,
            })
            .unwrap_or(LevelFilter::INFO);

        Self {
            is_tty: std::io::stdout().is_terminal(),
            level,
        }
    }

    fn log<T>(&self, level: Level, target: &str, content: T)
    where
        T: Display,
    {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S:%f");

        if self.is_tty {
            let dim = Color::dim();
            println!(
                "{} {} {} {}",
                Painted::new(format!("[{}]", now), dim),
                Painted::new(level, Color::level(level)),
                Painted::new(target, dim),
                content
            );
        } else {
            println!("[{}] {} {} {}", now, level, target, content);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for Logger
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.level {
            return;
        }

        let mut visitor = Visitor::new();
        event.record(&mut visitor);

        self.log(*metadata.level(), metadata.target(), visitor);
    }
}

/// Collects the fields of an event into a single line.
struct Visitor {
    buf: String,
}

impl Visitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(32),
        }
    }

    fn separate(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for Visitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.separate();
        let _ = match field.name() {
            "message" => write!(self.buf, "{}", value),
            _ => write!(self.buf, "{} = {}", field, value),
        };
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.separate();
        let _ = match field.name() {
            "message" => write!(self.buf, "{:?}", value),
            _ => write!(self.buf, "{} = {:?}", field, value),
        };
    }
}

impl Display for Visitor {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.buf, f)
    }
}

/// An ANSI SGR intensity and foreground color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Color {
    bold: bool,
    code: u8,
}

impl Color {
    const RED: u8 = 31;
    const GREEN: u8 = 32;
    const YELLOW: u8 = 33;
    const GRAY: u8 = 37;

    const fn dim() -> Self {
        Self {
            bold: false,
            code: Self::GRAY,
        }
    }

    fn level(level: Level) -> Self {
        let code = match level {
            Level::ERROR => Self::RED,
            Level::WARN => Self::YELLOW,
            Level::INFO => Self::GREEN,
            Level::DEBUG | Level::TRACE => Self::GRAY,
        };

        Self { bold: true, code }
    }
}

struct Painted<T>
where
    T: Display,
{
    text: T,
    color: Color,
}

impl<T> Painted<T>
where
    T: Display,
{
    fn new(text: T, color: Color) -> Self {
        Self { text, color }
    }
}

impl<T> Display for Painted<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let intensity = if self.color.bold { 1 } else { 2 };
        write!(f, "\x1b[{};{}m{}\x1b[0m", intensity, self.color.code, self.text)
    }
}
