// SPDX-License-Identifier: MPL-2.0
use codecelix_site::app::{self, Flags};
use codecelix_site::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
CodeCelix

USAGE:
  codecelix_site [OPTIONS]

OPTIONS:
  --theme <MODE>        Color theme: light, dark or system
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let theme = match args.opt_value_from_str::<_, ThemeMode>("--theme") {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { theme, config_dir })
}
