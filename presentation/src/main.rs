use common::DateTime;
use presentation::{
    logging, status_card::StatusCard, Args, Config, Gesture, Settings, View,
};
use service::Session;
use tracing as log;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args {
        config,
        role,
        gestures,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        order,
        presentation,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    logging::set_level(log.level.into());

    let service_config = service::Config::try_from(order).map_err(|e| {
        log::error!("invalid `order` configuration: {e}");
    })?;
    let settings = Settings::try_from(presentation).map_err(|e| {
        log::error!("invalid `presentation` configuration: {e}");
    })?;

    let mut session = Session::new(service_config);
    for input in &gestures {
        let gesture = Gesture::parse(input, &session).map_err(|e| {
            log::error!("failed to parse `{input}`: {e}");
        })?;
        if let Err(e) = gesture.apply(&mut session, role.into()) {
            log::warn!("`{input}` is rejected: {e}");
        }
    }

    render(&View::new(&session, role.into(), &settings, DateTime::now()));

    Ok(())
}

fn render(view: &View<'_>) {
    let StatusCard {
        title,
        subtitle,
        countdown,
        ..
    } = view.status_card();
    println!("{title}");
    if let Some(countdown) = countdown {
        println!("  {countdown}");
    }
    println!("  {subtitle}");

    let steps = view
        .stepper()
        .items()
        .iter()
        .map(|i| format!("{} ({})", i.label, i.state))
        .collect::<Vec<_>>();
    println!("\n{}", steps.join(" > "));

    if let Some(summary) = view.offer_summary() {
        println!("\n{}: {}", summary.header, summary.price);
        if let Some(fees) = summary.plan.fees {
            println!("  fee {}, deposit {}", fees.fee, fees.deposit);
        }
    }
    if let Some(breakdown) = view.draft_breakdown() {
        println!(
            "\nDue on acceptance {}, due at handover {}",
            breakdown.plan.on_acceptance, breakdown.plan.on_handover,
        );
        if breakdown.is_low_offer {
            println!("  A low offer may be rejected by the seller right away.");
        }
    }

    if let Some(timeline) = view.timeline() {
        println!();
        for entry in timeline.entries() {
            let mark = if entry.is_latest { '*' } else { ' ' };
            println!("{mark} [{}] {}", entry.at, entry.title);
        }
    }

    let actions = view.actions();
    if actions.is_waiting() {
        println!("\nWaiting for an update");
    } else {
        let buttons = actions
            .buttons()
            .iter()
            .map(|b| {
                if b.is_enabled {
                    format!("[{}]", b.action.label())
                } else {
                    format!("({})", b.action.label())
                }
            })
            .collect::<Vec<_>>();
        println!("\n{}", buttons.join(" "));
    }
}
