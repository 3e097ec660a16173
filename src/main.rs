use event_sequencer::config::{build_events, load_config};
use event_sequencer::messaging::NotificationConsumer;
use event_sequencer::{
    ClockScheduler, Command, SequenceConfig, Sequencer, SequencerStatus, forwarding_observer,
    notification_channel,
};
use log::info;
use ringbuf::traits::Consumer;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

// Sized for several full passes of a typical sequence between two drains
const NOTIFICATION_RINGBUFFER_CAPACITY: usize = 256;

// Wrapping sequences never reach Done; stop after this many passes through the table
const WRAP_CYCLES: u32 = 2;

fn main() {
    env_logger::init();

    println!("=== Event Sequencer ===");

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("No sequence file given, using the built-in demo");
            SequenceConfig::default()
        }
    };

    println!(
        "Sequence '{}': {} events, {:?} per pass, wrap {}\n",
        config.name,
        config.events.len(),
        config.total_duration(),
        if config.wrap { "on" } else { "off" }
    );

    // Every event logs when its command runs
    let events = build_events(&config, |entry| {
        let name = entry.name.clone();
        Some(Box::new(move || info!("Executing '{}'", name)) as Box<dyn Command>)
    });

    let (notification_tx, mut notification_rx) =
        notification_channel(NOTIFICATION_RINGBUFFER_CAPACITY);

    let sequencer = match Sequencer::new(&events, forwarding_observer(notification_tx), config.wrap)
    {
        Ok(sequencer) => Rc::new(RefCell::new(sequencer)),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut scheduler = ClockScheduler::with_period(config.tick_interval());
    scheduler.register(Rc::clone(&sequencer));

    let started = Instant::now();
    // A deadline past the end of representable time means running until Done
    let deadline = config
        .run_limit(WRAP_CYCLES)
        .and_then(|limit| started.checked_add(limit));
    sequencer.borrow_mut().start();

    scheduler.run_until(|| {
        print_notifications(&mut notification_rx, started);
        let status = sequencer.borrow().status();
        status == SequencerStatus::Done
            || (config.wrap && deadline.is_some_and(|deadline| Instant::now() >= deadline))
    });

    sequencer.borrow_mut().stop();
    print_notifications(&mut notification_rx, started);

    println!(
        "\n=== Sequence stopped after {} passes ({:?}) ===",
        scheduler.passes(),
        started.elapsed()
    );
}

fn print_notifications(rx: &mut NotificationConsumer, started: Instant) {
    while let Some(notification) = rx.try_pop() {
        println!(
            "[{:>8.3}s] {}",
            started.elapsed().as_secs_f64(),
            notification
        );
    }
}
