// SPDX-License-Identifier: MPL-2.0
use stellar_view::app::{self, paths, Flags};
use stellar_view::{config, logging};

const HELP: &str = "\
Stellar View

USAGE:
  stellar_view [OPTIONS]

OPTIONS:
  --section NAME     Scroll to a section on open (apod, mars, earth, library)
  --lang LANG        Interface language (e.g. en-US, fr)
  --config-dir DIR   Directory holding settings.toml
  --api-key KEY      NASA API key (overrides NASA_API_KEY and settings.toml)
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        section: args.opt_value_from_str("--section").unwrap_or(None),
        api_key: args.opt_value_from_str("--api-key").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    logging::init(&config.logging.level);

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unrecognized argument");
    }
    if let Some(key) = &config_warning {
        tracing::warn!(key, "configuration could not be loaded");
    }

    app::run(flags, config, config_warning)
}
