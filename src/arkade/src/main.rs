use arkade::cli;
use arkade_common::error_message;

pub fn main() {
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        error_message!("Failed to install default crypto provider: {:?}", e);
        std::process::exit(1);
    }

    if let Err(err) = cli::process_command() {
        error_message!("{:#}", err);
        std::process::exit(1);
    }
}
