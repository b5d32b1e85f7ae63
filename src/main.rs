//! Headless driver: replays a recorded session, or a synthetic orbit, through
//! the pipeline hooks and logs what grew.
//!
//! Usage: `marigold [replay.json] [options.toml]`

use std::path::Path;

use marigold::host::HeadlessHost;
use marigold::options::Options;
use marigold::pipeline::PipelineModule;
use marigold::replay::Replay;
use marigold::scene::{FlowerTemplate, MeshHandle};
use marigold::session::ArSession;

const SYNTHETIC_FRAMES: usize = 300;
const SYNTHETIC_SIZE: (u32, u32) = (800, 600);

fn load_replay(arg: Option<&str>) -> Result<Replay, marigold::MarigoldError> {
    match arg {
        Some(path) => Replay::load(Path::new(path)),
        None => {
            log::info!(
                "no replay given, using a {SYNTHETIC_FRAMES}-frame synthetic orbit"
            );
            Ok(Replay::synthetic_orbit(
                SYNTHETIC_FRAMES,
                SYNTHETIC_SIZE.0,
                SYNTHETIC_SIZE.1,
            ))
        }
    }
}

fn load_options(arg: Option<&str>) -> Result<Options, marigold::MarigoldError> {
    arg.map_or_else(|| Ok(Options::default()), |path| Options::load(Path::new(path)))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let replay_arg = args.first().map(String::as_str).filter(|a| *a != "-");
    let options_arg = args.get(1).map(String::as_str);

    let replay = match load_replay(replay_arg) {
        Ok(replay) => replay,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let options = match load_options(options_arg) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let session = ArSession::new(HeadlessHost::default(), options);
    let mut module = PipelineModule::new(session, &replay.device);
    let summary = replay.run(&mut module, &FlowerTemplate::new(MeshHandle(0)));

    log::info!(
        "{} frames, {} taps ({} missed, {} before load), {} recenters",
        summary.frames,
        summary.taps,
        summary.misses,
        summary.not_ready,
        summary.recenters
    );
    log::info!(
        "{} flowers planted, {} in scene, {} fully grown",
        summary.spawned,
        summary.flowers,
        summary.fully_grown
    );
}
