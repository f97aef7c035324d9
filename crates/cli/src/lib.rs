#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use anyhow::bail;
use stride_domain::{Locale, Package, PackageError, Training};

pub mod log;
mod settings;

pub use settings::{Settings, SettingsError};

pub const SETTINGS_FILE: &str = "stride.json";

/// Readings processed by the `stride` binary, one per workout kind.
#[must_use]
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Render the summary of each package in input order.
///
/// A package that cannot be read does not affect the remaining packages.
#[must_use]
pub fn summarize(packages: &[Package], locale: Locale) -> Vec<Result<String, PackageError>> {
    packages
        .iter()
        .map(|package| Ok(package.read()?.summary().render(locale)))
        .collect()
}

/// Write one summary line per package to `out`.
///
/// Packages that cannot be read are logged and skipped. If any package failed, an
/// error naming the number of failed packages is returned after all packages have
/// been processed.
pub fn run(packages: &[Package], locale: Locale, out: &mut impl Write) -> anyhow::Result<()> {
    ::log::info!("processing {} packages", packages.len());

    let mut failed = 0;

    for (package, summary) in packages.iter().zip(summarize(packages, locale)) {
        match summary {
            Ok(line) => writeln!(out, "{line}")?,
            Err(err) => {
                ::log::error!("failed to read {} package: {err}", package.code);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} packages failed", packages.len());
    }

    Ok(())
}
