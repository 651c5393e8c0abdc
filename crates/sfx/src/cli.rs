use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Long options that may also be spelled with a single dash
/// (`-no-shortcut`, `-console=false`).
const LONG_FLAGS: &[&str] = &["no-shortcut", "shortcut-name", "console", "help", "version"];

/// Console mode default, fixed when the installer is built.
pub fn default_console() -> bool {
    option_env!("SFX_DEFAULT_CONSOLE").is_some_and(|v| v == "true")
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "sfx",
    version = env!("CARGO_PKG_VERSION"),
    about = "Unpack the bundled application and launch it",
    long_about = None
)]
pub struct App {
    /// Do not create a desktop shortcut
    #[arg(long = "no-shortcut")]
    pub no_shortcut: bool,

    /// Name of the shortcut (default: application name)
    #[arg(long = "shortcut-name", value_name = "NAME")]
    pub shortcut_name: Option<String>,

    /// Force console mode for the payload application
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = default_console(),
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub console: bool,

    /// Installation directory (default: application name)
    pub path: Option<PathBuf>,
}

impl App {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn create_shortcut(&self) -> bool {
        !self.no_shortcut
    }

    pub fn shortcut_name<'a>(&'a self, app_base: &'a str) -> &'a str {
        self.shortcut_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(app_base)
    }
}

/// Rewrite single-dash long options into the double-dash form.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }
            let rewritten = arg.to_str().and_then(|s| {
                let body = s.strip_prefix('-').filter(|b| !b.starts_with('-'))?;
                let name = body.split_once('=').map_or(body, |(name, _)| name);
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{s}")))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}
