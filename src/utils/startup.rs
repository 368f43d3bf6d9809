use crate::core::error::{CalendarError, Result};
use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use std::path::Path;
use tracing::info;

const APP_NAME: &str = "HolidayCalendar";

/// Registers or removes a launch-at-login entry
pub trait LoginLauncher: Send + Sync {
    fn enable(&self) -> Result<()>;
    fn disable(&self) -> Result<()>;
    fn is_enabled(&self) -> Result<bool>;
}

fn launcher_error(action: &str, e: impl std::fmt::Display) -> CalendarError {
    CalendarError::AutostartError(format!("failed to {} launch at login: {}", action, e))
}

impl LoginLauncher for AutoLaunch {
    fn enable(&self) -> Result<()> {
        AutoLaunch::enable(self).map_err(|e| launcher_error("enable", e))
    }

    fn disable(&self) -> Result<()> {
        AutoLaunch::disable(self).map_err(|e| launcher_error("disable", e))
    }

    fn is_enabled(&self) -> Result<bool> {
        AutoLaunch::is_enabled(self).map_err(|e| launcher_error("query", e))
    }
}

/// Launch-at-login entry for the current user
pub struct Autostart {
    launcher: Box<dyn LoginLauncher>,
}

impl Autostart {
    /// Entry that starts `exe` at login: the Run registry key on Windows,
    /// a LaunchAgent on macOS, an XDG autostart file elsewhere
    pub fn for_current_platform(exe: &Path) -> Result<Self> {
        let exe = exe.to_str().ok_or_else(|| {
            CalendarError::AutostartError(format!("non UTF-8 executable path {}", exe.display()))
        })?;

        let launcher = AutoLaunchBuilder::new()
            .set_app_name(APP_NAME)
            .set_app_path(exe)
            .set_use_launch_agent(true)
            .build()
            .map_err(|e| launcher_error("configure", e))?;

        Ok(Self::with_launcher(Box::new(launcher)))
    }

    pub fn with_launcher(launcher: Box<dyn LoginLauncher>) -> Self {
        Self { launcher }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.launcher.is_enabled()
    }

    /// Registers the entry, replacing any existing one
    pub fn enable(&self) -> Result<()> {
        self.launcher.enable()?;
        info!("Auto-start enabled");
        Ok(())
    }

    /// Removes the entry; a missing entry is not an error
    pub fn disable(&self) -> Result<()> {
        if !self.launcher.is_enabled()? {
            return Ok(());
        }
        self.launcher.disable()?;
        info!("Auto-start disabled");
        Ok(())
    }
}
