use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use crate::navigation::Stage;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselSettings {
    pub interval_ms: u64,
    pub auto_rotate: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 5_000,
            auto_rotate: true,
        }
    }
}

impl CarouselSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_CAROUSEL_INTERVAL_MS))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerSettings {
    pub active_stage: Stage,
    pub carousel: CarouselSettings,
    pub budget_limit: Option<f64>,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<PlannerSettings>,
}

impl SettingsStore {
    /// Load settings from `path`. A missing file gives defaults; an
    /// unreadable one is logged and replaced by defaults on the next write.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring malformed settings at {}: {}",
                    path.display(),
                    err
                );
                PlannerSettings::default()
            })
        } else {
            PlannerSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, PlannerSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, PlannerSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> PlannerSettings {
        self.read().clone()
    }

    pub fn active_stage(&self) -> Stage {
        self.read().active_stage
    }

    pub fn carousel(&self) -> CarouselSettings {
        self.read().carousel.clone()
    }

    pub fn budget_limit(&self) -> Option<f64> {
        self.read().budget_limit
    }

    pub fn set_active_stage(&self, stage: Stage) -> Result<()> {
        self.modify(|settings| {
            settings.active_stage = stage;
            Ok(())
        })
    }

    pub fn update_carousel(&self, carousel: CarouselSettings) -> Result<()> {
        if carousel.interval_ms < MIN_CAROUSEL_INTERVAL_MS {
            bail!(
                "carousel interval must be at least {}ms",
                MIN_CAROUSEL_INTERVAL_MS
            );
        }
        self.modify(|settings| {
            settings.carousel = carousel;
            Ok(())
        })
    }

    pub fn set_budget_limit(&self, limit: Option<f64>) -> Result<()> {
        if let Some(limit) = limit {
            if !limit.is_finite() || limit < 0.0 {
                bail!("budget limit must be a non-negative amount");
            }
        }
        self.modify(|settings| {
            settings.budget_limit = limit;
            Ok(())
        })
    }

    fn modify<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut PlannerSettings) -> Result<()>,
    {
        let mut guard = self.write();
        let mut updated = guard.clone();
        change(&mut updated)?;
        self.persist(&updated)?;
        *guard = updated;
        Ok(())
    }

    fn persist(&self, data: &PlannerSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: PlannerSettings = serde_json::from_str(&contents)?;
        *self.write() = data;
        Ok(())
    }
}
