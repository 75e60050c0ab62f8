use once_cell::sync::Lazy;
use std::{collections::HashMap, sync::Mutex};

static LOGGER_CONFIG: Lazy<Mutex<LoggingConfig>> =
    Lazy::new(|| Mutex::new(LoggingConfig::default()));

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub enum LogLevel {
    Info,
    Verbose,
}

#[macro_export]
macro_rules! logln {
    ($fmt:literal) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            println!("[{}] {}", Self::CC, $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            print!("[{}] ", Self::CC);
            println!($fmt, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! logvbln {
    ($fmt:literal) => {
        if $crate::util::logging::is_verbose(Self::CC) {
            println!("[{}] {}", Self::CC, $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_verbose(Self::CC) {
            print!("[{}] ", Self::CC);
            println!($fmt, $($arg)*);
        }
    };
}

pub fn is_enabled(cc: &'static str) -> bool {
    LOGGER_CONFIG
        .lock()
        .map(|config| config.cc_enabled(cc))
        .unwrap_or(true)
}

pub fn is_verbose(cc: &'static str) -> bool {
    LOGGER_CONFIG
        .lock()
        .map(|config| config.cc_enabled(cc) && config.cc_at_level(cc, LogLevel::Verbose))
        .unwrap_or(false)
}

pub fn enable_cc(cc: &'static str, level: LogLevel) {
    if let Ok(mut config) = LOGGER_CONFIG.lock() {
        config.enable_cc(cc, level);
    }
}

pub fn disable_cc(cc: &'static str) {
    if let Ok(mut config) = LOGGER_CONFIG.lock() {
        config.disable_cc(cc);
    }
}

pub fn set_global_logging(enabled: bool) {
    if let Ok(mut config) = LOGGER_CONFIG.lock() {
        config.global_tracing_enabled = enabled;
    }
}

pub fn set_global_level(level: LogLevel) {
    if let Ok(mut config) = LOGGER_CONFIG.lock() {
        config.global_level = level;
    }
}

pub struct LoggingConfig {
    global_tracing_enabled: bool,
    global_level: LogLevel,
    flags: HashMap<&'static str, (bool, LogLevel)>, // <component tag, (tracing enabled, trace level)>
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_tracing_enabled: true,
            global_level: LogLevel::Info,
            flags: Default::default(),
        }
    }
}

impl LoggingConfig {
    fn cc_enabled(&self, cc: &'static str) -> bool {
        if !self.global_tracing_enabled {
            return false;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::Info)).0
    }

    fn cc_at_level(&self, cc: &'static str, level: LogLevel) -> bool {
        if self.global_level >= level {
            return true;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::Info)).1 >= level
    }

    fn enable_cc(&mut self, cc: &'static str, level: LogLevel) {
        self.flags.insert(cc, (true, level));
    }

    fn disable_cc(&mut self, cc: &'static str) {
        self.flags.insert(cc, (false, LogLevel::Info));
    }
}
