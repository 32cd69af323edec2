// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demo bootstrap: registers a small representative module set, brings
//! the container up, and prints the health report as JSON.
//!
//! Usage: `modulith [aliases.yaml]`
//!
//! One module is deliberately broken so the degraded path is visible in
//! the output. Set `RUST_LOG=debug` to watch per-module build events.

use std::any::Any;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};

use modulith::config::{load_alias_table, AliasTable};
use modulith::diagnostics::suggested_load_order;
use modulith::engine::Container;
use modulith::traits::{
    CapabilityResponse, Exports, KeyValue, Logging, RequestHandling,
};

/// Plain utility module: exposes the logging capability.
struct Utils;

impl Exports for Utils {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn logging(&self) -> Option<&dyn Logging> {
        Some(self)
    }
}

impl Logging for Utils {
    fn log(&self, message: &str) {
        tracing::info!(module = "System.Utils", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(module = "System.Utils", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(module = "System.Utils", "{message}");
    }

    fn track(&self, event: &str) {
        tracing::debug!(module = "System.Utils", event, "tracked");
    }
}

/// Settings store with a startup hook that seeds defaults.
struct Settings {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl Exports for Settings {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn init(&self) -> Option<anyhow::Result<()>> {
        let mut values = match self.values.lock() {
            Ok(values) => values,
            Err(_) => return Some(Err(anyhow::anyhow!("settings store poisoned"))),
        };
        values.insert("environment".into(), serde_json::json!("demo"));
        Some(Ok(()))
    }

    fn key_value(&self) -> Option<&dyn KeyValue> {
        Some(self)
    }
}

impl KeyValue for Settings {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: serde_json::Value) -> bool {
        match self.values.lock() {
            Ok(mut values) => {
                values.insert(key.to_string(), value);
                true
            }
            Err(_) => false,
        }
    }
}

/// Echo-style assistant module: exposes the request-handling capability.
struct Assistant;

impl Exports for Assistant {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn request_handling(&self) -> Option<&dyn RequestHandling> {
        Some(self)
    }
}

impl RequestHandling for Assistant {
    fn handle(&self, request: &serde_json::Value) -> CapabilityResponse {
        CapabilityResponse::answer("System.AI", serde_json::json!({ "echo": request }))
    }

    fn ask(&self, prompt: &str) -> CapabilityResponse {
        CapabilityResponse::answer("System.AI", serde_json::json!({ "echo": prompt }))
    }
}

struct Entrypoint;

impl Exports for Entrypoint {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn init(&self) -> Option<anyhow::Result<()>> {
        tracing::info!("entrypoint online");
        Some(Ok(()))
    }
}

fn register_demo_modules(container: &mut Container) {
    container.register("System.Utils", &[], |_| Ok(Arc::new(Utils)));

    container.register("System.Config", &["Utils"], |deps| {
        if let Some(logging) = deps.require("Utils").logging() {
            logging.log("settings store constructed");
        }
        Ok(Arc::new(Settings {
            values: Mutex::new(HashMap::new()),
        }))
    });

    container.register("System.AI", &["Config", "Utils"], |_| Ok(Arc::new(Assistant)));

    // Deliberately broken: demonstrates degradation to a stand-in.
    container.register("System.Telemetry", &["Utils"], |_| {
        anyhow::bail!("telemetry sink address not configured")
    });

    container.register(
        "System.Initializer",
        &["AI", "Config", "Telemetry"],
        |deps| {
            // Telemetry is degraded but still callable.
            if let Some(logging) = deps.require("Telemetry").logging() {
                logging.track("system.startup");
            }
            Ok(Arc::new(Entrypoint))
        },
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let aliases = match env::args().nth(1) {
        Some(path) => load_alias_table(&path)?,
        None => AliasTable::new(),
    };

    let mut container = Container::with_aliases(aliases);
    register_demo_modules(&mut container);

    let report = container.bootstrap();

    println!("Suggested load order:");
    for name in suggested_load_order(container.registry()) {
        println!("  {name}");
    }

    println!("\nHealth report:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    // The degraded assistant path still answers.
    if let Some(exports) = container.export("System.AI") {
        if let Some(handler) = exports.request_handling() {
            let response = handler.ask("status?");
            println!("\nAssistant says:");
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
