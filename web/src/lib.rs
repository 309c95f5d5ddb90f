use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod board;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Parses flags out of a location hash like `#-vv&--seed=42`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("").chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.count, clueboard_core::DEFAULT_LISTING_COUNT);
        assert_eq!(args.game.api, api::DEFAULT_API_URL);
    }

    #[test]
    fn hash_flags_are_parsed() {
        let args =
            Args::from_location_hash("#-vv&--seed=42&--count=20&--api=http://localhost:3000/api")
                .unwrap();

        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.count, 20);
        assert_eq!(args.game.api, "http://localhost:3000/api");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::from_location_hash("#--bogus").is_err());
    }
}
