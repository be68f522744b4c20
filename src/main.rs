// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use iced_toaster::config::Config;
use iced_toaster::i18n::fluent::I18n;
use pico_args::Arguments;

/// Exit status for a malformed command line.
const EXIT_USAGE: i32 = 2;

#[derive(Debug)]
enum Command {
    Help { lang: Option<String> },
    Run(Flags),
}

fn parse_args(mut args: Arguments) -> Result<Command, pico_args::Error> {
    let help = args.contains(["-h", "--help"]);
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let log_events = args.contains("--log-events");

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        ));
    }

    if help {
        return Ok(Command::Help { lang });
    }

    Ok(Command::Run(Flags {
        lang,
        config_dir,
        log_events,
    }))
}

fn print_usage(lang: Option<String>) {
    let i18n = I18n::new(lang, &Config::default());
    println!("{}", i18n.tr("help-usage"));
    println!();
    println!("{}", i18n.tr("help-options"));
}

fn main() -> iced::Result {
    match parse_args(Arguments::from_env()) {
        Ok(Command::Run(flags)) => app::run(flags),
        Ok(Command::Help { lang }) => {
            print_usage(lang);
            Ok(())
        }
        Err(err) => {
            let i18n = I18n::new(None, &Config::default());
            let details = err.to_string();
            eprintln!(
                "{}",
                i18n.tr_with_args("help-invalid-arguments", &[("details", details.as_str())])
            );
            print_usage(None);
            std::process::exit(EXIT_USAGE);
        }
    }
}
