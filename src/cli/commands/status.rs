use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionState;
use crate::core::session::SessionTracker;
use crate::core::ticker::Ticker;
use crate::db::SqliteKv;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use crate::utils::format_duration;
use crate::utils::time::{format_local, now_ms};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Duration;

fn timer_line(tracker: &SessionTracker<SqliteKv>, now: i64) -> String {
    let badge = if tracker.state() == SessionState::OnBreak {
        "  [on break]"
    } else {
        ""
    };
    format!(
        "⏱️  {}{}",
        format_duration(tracker.elapsed_seconds(now)),
        badge
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status { watch } = cmd else {
        return Ok(());
    };

    let tracker = open_tracker(cfg)?;
    let Some(session) = tracker.active() else {
        info("Not clocked in.");
        return Ok(());
    };

    println!(
        "Clocked in since: {} ({})",
        format_local(session.start_at, &cfg.time_format),
        tracker.state().label()
    );

    if !*watch {
        println!("{}", timer_line(&tracker, now_ms()));
        return Ok(());
    }

    print!("\r{}", timer_line(&tracker, now_ms()));
    let _ = io::stdout().flush();

    // The session may be closed from another terminal: reload every tick and
    // stop as soon as it is gone.
    let cfg = cfg.clone();
    let interval = Duration::from_secs(cfg.refresh_interval_secs.max(1));
    let ticker = Ticker::start(interval, move || match open_tracker(&cfg) {
        Ok(t) if t.active().is_some() => {
            print!("\r{}", timer_line(&t, now_ms()));
            let _ = io::stdout().flush();
            ControlFlow::Continue(())
        }
        Ok(_) => {
            println!("\nSession ended.");
            ControlFlow::Break(())
        }
        Err(e) => {
            error(e);
            ControlFlow::Break(())
        }
    });
    ticker.wait();

    Ok(())
}
