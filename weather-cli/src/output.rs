//! Plain-text rendering of the forecast screen.

use forecast_core::{
    ScreenState,
    view::{DayView, ForecastView, ScreenView},
};

pub fn print_loading() {
    println!("Loading...");
}

pub fn print_screen(state: &ScreenState) {
    match ScreenView::from_state(state) {
        ScreenView::Loading => print_loading(),
        ScreenView::Ready(view) => print!("{}", render(&view)),
    }
}

fn render(view: &ForecastView) -> String {
    let mut lines = vec![
        String::new(),
        format!("  {}, {}", view.location_name, view.country),
        format!("  {}  {}", view.temperature, view.condition),
        format!("  wind {} km/h   humidity {}   sunrise {}", view.wind, view.humidity, view.sunrise),
    ];

    if !view.days.is_empty() {
        lines.push(String::new());
        lines.push("  Daily Forecast".to_string());
        lines.extend(view.days.iter().map(render_day));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_day(day: &DayView) -> String {
    format!("  {:<10} {:>7}  {}", day.day_name, day.avg_temp, day.condition)
}
