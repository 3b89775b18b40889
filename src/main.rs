// SPDX-License-Identifier: MPL-2.0
use muvi::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        catalog: args
            .opt_value_from_str("--catalog")
            .unwrap_or_else(|err| {
                eprintln!("ignoring --catalog: {}", err);
                None
            }),
        config_dir: args
            .opt_value_from_str("--config-dir")
            .unwrap_or_else(|err| {
                eprintln!("ignoring --config-dir: {}", err);
                None
            }),
    };

    // A bare positional argument is also accepted as the catalog path.
    let flags = Flags {
        catalog: flags.catalog.or_else(|| {
            args.finish()
                .into_iter()
                .next()
                .and_then(|s| s.into_string().ok())
        }),
        ..flags
    };

    app::run(flags)
}
