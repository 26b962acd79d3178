// SPDX-License-Identifier: MPL-2.0

use cardiolens::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        case_file: args.opt_value_from_str("--case").unwrap(),
        calibration: args.opt_value_from_str("--calibration").unwrap(),
        compare_image: args.opt_value_from_str("--compare").unwrap(),
        base_image: args
            .finish()
            .into_iter()
            .next()
            .map(std::path::PathBuf::from),
    };

    app::run(flags)
}
