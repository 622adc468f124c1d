use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    /// `None` serves the catalog compiled into the binary.
    pub catalog_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8443".into(),
            catalog_path: None,
            assets_dir: PathBuf::from("./data/images"),
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {SETTINGS_FILE}"));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("catalog_path") {
        settings.catalog_path = non_empty_path(v);
    }
    if let Some(v) = file_cfg.get("assets_dir") {
        settings.assets_dir = PathBuf::from(v);
    }
    Ok(())
}

/// Later names win, so the `APP__` spelling overrides the short one.
pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    for name in ["SERVER_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = lookup(name) {
            settings.server_bind = v;
        }
    }
    for name in ["CATALOG_PATH", "APP__CATALOG_PATH"] {
        if let Some(v) = lookup(name) {
            settings.catalog_path = non_empty_path(&v);
        }
    }
    for name in ["ASSETS_DIR", "APP__ASSETS_DIR"] {
        if let Some(v) = lookup(name) {
            settings.assets_dir = PathBuf::from(v);
        }
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(Path::new(raw).to_path_buf())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
