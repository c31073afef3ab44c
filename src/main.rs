// SPDX-License-Identifier: MPL-2.0
use m3dan_studio::app::{self, Flags};

const HELP: &str = "\
M3DAN Studio showcase

USAGE:
  m3dan_studio [OPTIONS]

OPTIONS:
  --lang <locale>       Interface language (e.g. en-US, fr)
  --catalog <path>      Load the showcase catalog from a TOML file
  --config-dir <dir>    Directory holding settings.toml
  --cache-dir <dir>     Directory for downloaded 3D assets
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("m3dan_studio=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        catalog: opt_string(&mut args, "--catalog"),
        config_dir: opt_string(&mut args, "--config-dir"),
        cache_dir: opt_string(&mut args, "--cache-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", remaining);
    }

    app::paths::init_cli_overrides(flags.config_dir.clone(), flags.cache_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str::<_, String>(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid value for {}: {}", key, err);
            None
        }
    }
}
