//! Cool Movie entry point
//!
//! Opens the window and plays the movie with the compiled-in settings.

use std::process::ExitCode;

use cool_movie::Settings;

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::default();
    log::info!("Cool Movie starting...");
    log::debug!("Settings: {:?}", settings);
    log::info!("Appending frame log to {}", settings.anim_log.display());

    match cool_movie::platform::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Cool Movie stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}
