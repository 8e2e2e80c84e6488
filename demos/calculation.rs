use chrono::{FixedOffset, TimeZone};

use solar_ascii::angles::observer_at;
use solar_ascii::grid::render_observer;
use solar_ascii::{format_clock, CanvasGeometry};

fn main() {
    let latitude = 52.37;

    let cest = FixedOffset::east_opt(2 * 3600).unwrap();
    let dt = cest.with_ymd_and_hms(2026, 6, 21, 21, 30, 0).unwrap();

    let observer = observer_at(latitude, &dt).unwrap();
    let frame = render_observer(&observer, &CanvasGeometry::default());
    let pos = frame.position;

    println!("=== Solar Position Calculation Example ===");
    println!("Location: Amsterdam ({:.2}°N)", latitude);
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Solar Position ---");
    println!("Day of year: {}", observer.day_of_year);
    println!("Declination: {:.2}°", pos.declination.to_degrees());
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Hour Angle: {:.2}°", pos.hour_angle.to_degrees());
    println!("Altitude: {:.2}°", pos.altitude);
    println!("Azimuth: {:.2}°", pos.azimuth);
    println!("Phase: {}", pos.phase());
    println!();
    println!("--- Day ---");
    println!("Daylight: {:.1} hours", pos.daylight_hours);
    println!("Sunrise: {}", format_clock(pos.sunrise));
    println!("Sunset: {}", format_clock(pos.sunset));
    println!();
    println!("{}", frame.matrix);
}
