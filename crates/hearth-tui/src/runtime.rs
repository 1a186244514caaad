//! The main event loop: terminal events, the clock tick, and weather
//! updates arriving from background fetch tasks.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use hearth_core::constants::WEATHER_REFRESH_SECS;
use hearth_core::weather::{WeatherService, WeatherUpdate};
use hearth_core::CoreConfig;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));
    let mut weather_interval =
        tokio::time::interval(Duration::from_secs(WEATHER_REFRESH_SECS));

    // Fetches run detached and report back over this channel; overlapping
    // fetches are last-writer-wins, which is fine at a 30-minute cadence.
    let (weather_tx, mut weather_rx) = mpsc::channel::<WeatherUpdate>(4);
    let mut weather_in_flight = false;

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key)?;
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
                // First fetch after the weather card gets switched on
                if app.store.state().show_weather
                    && app.weather.is_none()
                    && !weather_in_flight
                {
                    weather_in_flight = true;
                    spawn_weather_refresh(app.config.clone(), weather_tx.clone());
                }
            }

            _ = weather_interval.tick() => {
                if app.store.state().show_weather && !weather_in_flight {
                    weather_in_flight = true;
                    spawn_weather_refresh(app.config.clone(), weather_tx.clone());
                }
            }

            Some(update) = weather_rx.recv() => {
                weather_in_flight = false;
                app.weather = Some(update);
            }
        }
    }
    Ok(())
}

fn spawn_weather_refresh(config: CoreConfig, tx: mpsc::Sender<WeatherUpdate>) {
    tokio::spawn(async move {
        let mut service = WeatherService::new(&config);
        let update = service.refresh().await;
        let _ = tx.send(update).await;
    });
}
