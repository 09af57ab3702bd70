mod scenario;
mod sink;

use anyhow::Context;
use scenario::{Scenario, Step};
use sink::FrameSink;
use swiper_ui::{CarouselOptions, Direction, ManualClock, Runtime};

const WIDTH: f32 = 360.0;
const PAGES: usize = 4;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let clock = ManualClock::new(0);
    let runtime = Runtime::new(clock.clone());
    let carousel = CarouselOptions::new(WIDTH, PAGES)
        .on_horizontal_change(|index| log::info!("page changed to {index}"))
        .on_vertical_intent(|code| match Direction::from_code(code) {
            Some(direction) => log::info!("vertical scroll intent {direction:?}"),
            None => log::warn!("unknown direction code {code}"),
        })
        .build(runtime.handle(), FrameSink::new(clock.clone()))
        .context("building demo carousel")?;

    let mut scenario = Scenario::new(clock, runtime, carousel);
    for (name, steps) in scripts() {
        log::info!("== {name}");
        scenario.run(&steps);
    }
    log::info!(
        "finished on page {} at offset {:.1}px",
        scenario.carousel().current_index(),
        scenario.carousel().visual_offset()
    );
    Ok(())
}

fn scripts() -> Vec<(&'static str, Vec<Step>)> {
    use Step::*;
    vec![
        (
            "quick flick to the next page",
            vec![
                Press(300.0, 400.0),
                Move(260.0, 402.0, 40),
                Move(220.0, 405.0, 40),
                Release(40),
                Wait(400),
            ],
        ),
        (
            "slow nudge snaps back",
            vec![
                Press(200.0, 400.0),
                Move(170.0, 400.0, 200),
                Move(140.0, 401.0, 200),
                Release(200),
                Wait(400),
            ],
        ),
        (
            "vertical scroll leaves the pages alone",
            vec![
                Press(180.0, 500.0),
                Move(182.0, 450.0, 30),
                Move(60.0, 420.0, 30),
                Release(30),
            ],
        ),
        (
            "rubber band before the first page",
            vec![
                Jump(0),
                Wait(400),
                Press(100.0, 400.0),
                Move(250.0, 400.0, 200),
                Release(400),
                Wait(400),
            ],
        ),
        ("jump to the last page", vec![Jump(PAGES - 1), Wait(400)]),
    ]
}
