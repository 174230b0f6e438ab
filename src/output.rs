// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Silent by default, verbose progress for operators, JSON lines for scripting.

use crate::api::ApiResponse;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Nothing on success; only terminal failures
    Quiet,
    /// Progress messages plus every response body
    Verbose,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a labelled parameter line, e.g. `- Release:   1.2.0`.
    pub fn param(&self, label: &str, value: &dyn std::fmt::Display) {
        if self.mode == OutputMode::Verbose {
            println!("{:<20}{value}", format!("- {label}:"));
        }
    }

    /// Print a progress message (verbose only).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Verbose {
            println!("{message}");
        }
    }

    /// Echo an API response.
    pub fn response(&self, operation: &str, response: &ApiResponse) {
        match self.mode {
            OutputMode::Quiet => {}
            OutputMode::Verbose => {
                println!("{operation} ({}): {}", response.status, response.text());
            }
            OutputMode::Json => emit(&JsonEvent {
                event: "response",
                message: operation,
                status: Some(response.status),
                body: Some(&*response.text()),
                duration_secs: None,
            }),
        }
    }

    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Quiet => {}
            OutputMode::Verbose => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({elapsed:.1}s)");
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Json => emit(&JsonEvent {
                event: "success",
                message,
                status: None,
                body: None,
                duration_secs: self.duration(),
            }),
        }
    }

    /// Non-fatal problem worth surfacing. Quiet mode leaves this to the log.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Quiet => {}
            OutputMode::Verbose => eprintln!("Warning: {message}"),
            OutputMode::Json => emit(&JsonEvent {
                event: "warning",
                message,
                status: None,
                body: None,
                duration_secs: None,
            }),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Quiet | OutputMode::Verbose => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    status: None,
                    body: None,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn emit(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
