//! Structured JSONL logging for the dashboard data service.
//!
//! Every entry is one JSON object per line: `ts`, `lvl`, `event`, `msg`,
//! plus an open `data` map. Entries go to stdout; set `LOG_DIR` to also
//! append them to `<LOG_DIR>/events.jsonl`. `LOG_LEVEL` filters
//! (debug|info|warn|error, default info).

use chrono::Utc;
use serde_json::{json, Map, Value};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("debug") => Level::Debug,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

static LOG_SINK: OnceLock<Option<Mutex<BufWriter<File>>>> = OnceLock::new();

fn open_sink() -> Option<Mutex<BufWriter<File>>> {
    let dir = std::env::var("LOG_DIR").ok()?;
    let mut path = PathBuf::from(dir);
    if let Err(err) = create_dir_all(&path) {
        eprintln!("[log] cannot create {}: {}", path.display(), err);
        return None;
    }
    path.push("events.jsonl");
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(Mutex::new(BufWriter::new(file))),
        Err(err) => {
            eprintln!("[log] cannot open {}: {}", path.display(), err);
            None
        }
    }
}

fn log_sink() -> &'static Option<Mutex<BufWriter<File>>> {
    LOG_SINK.get_or_init(open_sink)
}

/// RFC3339 timestamp with milliseconds.
pub fn ts_now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert((*key).to_string(), value.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}

fn sanitize(mut fields: Map<String, Value>) -> Map<String, Value> {
    let redacted = Value::String("[REDACTED]".to_string());
    for key in ["apikey", "authorization", "Authorization", "supabase_key"] {
        if fields.contains_key(key) {
            fields.insert(key.to_string(), redacted.clone());
        }
    }
    fields
}

/// Emit one structured entry, subject to the level filter.
pub fn log(level: Level, event: &str, msg: &str, fields: Map<String, Value>) {
    if level < Level::from_env() {
        return;
    }
    let entry = json!({
        "ts": ts_now(),
        "lvl": level.as_str(),
        "event": event,
        "msg": msg,
        "data": Value::Object(sanitize(fields)),
    });
    let line = entry.to_string();
    println!("{}", line);
    if let Some(sink) = log_sink() {
        if let Ok(mut w) = sink.lock() {
            let _ = writeln!(w, "{}", line);
            let _ = w.flush();
        }
    }
}

pub fn debug(event: &str, msg: &str, fields: Map<String, Value>) {
    log(Level::Debug, event, msg, fields);
}

pub fn info(event: &str, msg: &str, fields: Map<String, Value>) {
    log(Level::Info, event, msg, fields);
}

pub fn warn(event: &str, msg: &str, fields: Map<String, Value>) {
    log(Level::Warn, event, msg, fields);
}

pub fn error(event: &str, msg: &str, fields: Map<String, Value>) {
    log(Level::Error, event, msg, fields);
}
