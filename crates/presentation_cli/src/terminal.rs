//! Text rendering of planner output

use application::{PlannerStatus, RouteError};
use domain::RouteResult;
use infrastructure::RouteEvent;

/// Where a rendered line belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Regular output on stdout
    Out(String),
    /// Notice for the user on stderr
    Notice(String),
}

/// Render a presentation event, if it has any visible output
pub fn render_event(event: &RouteEvent) -> Option<Line> {
    match event {
        RouteEvent::Cleared(_) => None,
        RouteEvent::Shown(result) => Some(Line::Out(render_route(result))),
        RouteEvent::Failed(id, error) if error.is_user_visible() => {
            Some(Line::Notice(format!("⚠️  Request {id}: {error}")))
        },
        RouteEvent::Failed(..) => None,
    }
}

/// One-line summary of a route
pub fn render_route(result: &RouteResult) -> String {
    let mut line = format!(
        "🗺️  Route {} ({}): {}, {}, {} points",
        result.request_id(),
        result.mode(),
        result.distance_text(),
        result.travel_time_text(),
        result.polyline().len()
    );
    if let Some(bounds) = result.bounds() {
        line.push_str(&format!(
            ", bounds [{}] to [{}]",
            bounds.south_west, bounds.north_east
        ));
    }
    line
}

/// Notice for a line that could not be parsed
pub fn render_invalid_input(error: &RouteError) -> Line {
    Line::Notice(format!("❌ {error}"))
}

/// Planner status summary
pub fn render_status(status: &PlannerStatus) -> String {
    format!(
        "📊 {}, last request {}, {} shown, {} failed, {} discarded",
        status.state, status.last_issued, status.published, status.failed, status.discarded
    )
}

/// Write a line to its stream
pub fn emit(line: Line) {
    match line {
        Line::Out(text) => println!("{text}"),
        Line::Notice(text) => eprintln!("{text}"),
    }
}
