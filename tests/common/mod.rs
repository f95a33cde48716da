//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use template_localizer::adapters::exporter::Exporter;
use template_localizer::domain::{
    CancellationSignal, ExportOptions, ExportResult, LocalizeError, ManifestPath, Result,
};

/// What the mock exporter does for a manifest whose path contains a marker
#[derive(Clone)]
pub enum Behavior {
    Succeed,
    Report(&'static str),
    Fault(&'static str),
    Delay(u64),
    Hang,
}

/// In-memory exporter driven by path markers
pub struct MockExporter {
    rules: Vec<(&'static str, Behavior)>,
    calls: Mutex<Vec<ManifestPath>>,
}

impl MockExporter {
    pub fn new(rules: Vec<(&'static str, Behavior)>) -> Self {
        Self {
            rules,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> Vec<ManifestPath> {
        self.calls.lock().unwrap().clone()
    }

    fn behavior(&self, manifest: &ManifestPath) -> Behavior {
        let path = manifest.to_string();
        self.rules
            .iter()
            .find(|(marker, _)| path.contains(marker))
            .map(|(_, behavior)| behavior.clone())
            .unwrap_or(Behavior::Succeed)
    }
}

#[async_trait]
impl Exporter for MockExporter {
    async fn export(
        &self,
        manifest: &ManifestPath,
        _options: &ExportOptions,
        _cancellation: CancellationSignal,
    ) -> Result<ExportResult> {
        self.calls.lock().unwrap().push(manifest.clone());
        match self.behavior(manifest) {
            Behavior::Succeed => Ok(ExportResult::success(manifest.clone())),
            Behavior::Report(message) => Ok(ExportResult::failure(manifest.clone(), message)),
            Behavior::Fault(message) => Err(LocalizeError::Export(message.to_string())),
            Behavior::Delay(ms) => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                Ok(ExportResult::success(manifest.clone()))
            }
            Behavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

/// Creates `<root>/<name>/.template.config/template.json`
pub fn config_dir_template(root: &Path, name: &str) {
    let dir = root.join(name).join(".template.config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("template.json"), r#"{"name": "test"}"#).unwrap();
}

/// Creates `<root>/<name>/template.json` without a `.template.config` parent
pub fn loose_template(root: &Path, name: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("template.json"), r#"{"name": "loose"}"#).unwrap();
}
