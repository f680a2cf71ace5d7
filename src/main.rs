// SPDX-License-Identifier: MPL-2.0
use ip_inspector::app::{self, paths, Flags};
use ip_inspector::logging;
use std::process::ExitCode;

const HELP: &str = "\
IP Inspector - look up what is known about an IPv4 address

USAGE:
  ip_inspector [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <id>              Interface language (e.g. en-US, fr)
  --config-dir <dir>       Directory holding settings.toml
  --endpoint <url>         Lookup proxy endpoint, overrides the config
  --log-level <level>      error, warn, info, debug or trace (default: info)

ENVIRONMENT:
  IP_INSPECTOR_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                 env_logger filter when --log-level is absent
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            endpoint: args.opt_value_from_str("--endpoint")?,
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let level = match args.log_level.as_deref() {
        Some(value) => match logging::parse_level(value) {
            Some(level) => Some(level),
            None => {
                eprintln!("error: invalid log level '{value}'");
                return ExitCode::from(2);
            }
        },
        None => None,
    };
    logging::init(level);
    paths::init_cli_overrides(args.config_dir);

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("application error: {e}");
            ExitCode::FAILURE
        }
    }
}
