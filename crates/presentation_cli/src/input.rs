//! Parsing of user-entered route requests

use domain::{Coordinate, DomainError, TransportMode};

/// A route request as typed by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteInput {
    pub source: Coordinate,
    pub destination: Coordinate,
    pub mode: TransportMode,
}

/// One line of interactive input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputLine {
    /// Blank line or `#` comment
    Empty,
    /// Show the planner status
    Status,
    /// Stop reading input
    Quit,
    /// Plan a route
    Route(RouteInput),
}

/// `clap` value parser for `LAT,LON` arguments
pub fn parse_coordinate(text: &str) -> Result<Coordinate, String> {
    Coordinate::parse(text).map_err(|e| e.to_string())
}

/// Parse one interactive line: `LAT,LON LAT,LON [MODE]`
///
/// The mode defaults to driving.
///
/// # Errors
///
/// Returns a domain input error for malformed lines; nothing is submitted for
/// those.
pub fn parse_line(line: &str) -> Result<InputLine, DomainError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(InputLine::Empty);
    }

    match line.to_lowercase().as_str() {
        "status" => return Ok(InputLine::Status),
        "quit" | "exit" => return Ok(InputLine::Quit),
        _ => {},
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (source, destination, mode) = match tokens.as_slice() {
        [source, destination] => (source, destination, None),
        [source, destination, mode] => (source, destination, Some(mode)),
        _ => {
            return Err(DomainError::InvalidInput(
                "expected 'LAT,LON LAT,LON [driving|walking|biking]'".to_string(),
            ));
        },
    };

    Ok(InputLine::Route(RouteInput {
        source: Coordinate::parse(source)?,
        destination: Coordinate::parse(destination)?,
        mode: mode.map_or(Ok(TransportMode::default()), |m| m.parse())?,
    }))
}
