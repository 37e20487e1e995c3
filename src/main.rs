// SPDX-License-Identifier: MPL-2.0
use flipbook::app::{self, paths, Flags};

const HELP: &str = "\
Flipbook - a page-turning image gallery

USAGE:
  flipbook [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <LOCALE>      UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
      --catalog <SOURCE>   Catalog TOML file path or http(s) URL
      --open               Open the flip book immediately
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        catalog: read_option(&mut args, "--catalog"),
        open_viewer: args.contains("--open"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, %err, "invalid command line value");
            None
        }
    }
}
