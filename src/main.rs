//! Stack Hub entry point
//!
//! Native builds run a headless demo: the autoplay bot plays a few Stack
//! Tower rounds against the real save store and reports the results.
//!
//! Usage: `stack-hub [tuning.json] [rounds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use stack_hub::consts::{SIM_DT, STACK_TOWER_ID};
    use stack_hub::hub::{Hub, HubContext};
    use stack_hub::sim::Autoplay;
    use stack_hub::{GameCatalog, StackTowerManager, TowerEvent, Tuning, platform};

    platform::init_logging();
    log::info!("Stack Hub (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Cannot load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let ctx = HubContext::new(platform::open_save_store(), GameCatalog::builtin());
    let hub = Rc::new(RefCell::new(Hub::new(ctx.clone())));

    if hub.borrow_mut().launch(STACK_TOWER_ID).is_none() {
        log::error!("{STACK_TOWER_ID} missing from the catalog");
        std::process::exit(1);
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut manager = StackTowerManager::new(ctx, STACK_TOWER_ID, tuning.clone(), seed);

    {
        let hub = hub.clone();
        manager.on_score_updated(move |score| hub.borrow_mut().set_current_score(score));
    }
    manager.subscribe(|event| match event {
        TowerEvent::Perfect(true) => log::debug!("PERFECT!"),
        TowerEvent::GameOver { score, high_score } => {
            println!("Score: {score}  Best: {high_score}");
        }
        _ => {}
    });

    let step = tuning.block_speed * SIM_DT;
    let mut bot = Autoplay::new(seed, tuning.start_size * 0.15);

    for round in 1..=rounds {
        println!("Round {round}");
        manager.start();
        // Cap a round so a lucky bot cannot run forever
        for _ in 0..200_000 {
            let input = bot.input(manager.state(), step);
            manager.step(&input);
            if manager.state().is_game_over() {
                break;
            }
        }
        hub.borrow_mut().trigger_game_over();
    }

    let hub = hub.borrow();
    hub.shutdown();
    log::info!("Final score {}", hub.current_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless demo is native only; web hosts link the library directly
}
