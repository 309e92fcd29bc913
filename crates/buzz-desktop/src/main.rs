use buzz_core::{Player, catalog};
use log::LevelFilter;

mod buzzer;
mod log_capture;
mod soundboard;

fn main() -> anyhow::Result<()> {
    let catalog = catalog::builtin();
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None => {
            let logs = soundboard::install_logger(LevelFilter::Debug);
            let mut player = Player::new(buzzer::open());
            soundboard::run(&mut player, catalog, logs)?;
        }
        Some("--list") => {
            for (name, cue) in catalog.iter() {
                println!("{:<18} {:>3} steps {:>5}ms", name, cue.len(), cue.duration_ms());
            }
        }
        Some(name) => {
            log_capture::init(LevelFilter::Debug);
            let mut player = Player::new(buzzer::open());
            // every remaining argument is another cue to play in sequence
            for name in std::iter::once(name.to_string()).chain(args) {
                let report = player.play_named(catalog, &name).map_err(|e| {
                    anyhow::anyhow!("{} (try --list)", e)
                })?;
                log::info!(
                    "{}: {} tones, {}ms, {} faults",
                    name,
                    report.emitted,
                    report.waited_ms,
                    report.faults
                );
            }
        }
    }

    Ok(())
}
