use openair_polygons::OpenAirReader;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <openair-file>", args[0]);
        std::process::exit(1);
    }

    let reader = OpenAirReader::from_path(&args[1])?;
    let mut iter = reader.read_airspaces();
    let airspaces: Vec<_> = iter.by_ref().collect::<Result<Vec<_>, _>>()?;

    println!("=== OpenAir File Info ===");
    println!("Airspaces: {}", airspaces.len());
    println!("Warnings: {}", iter.warnings().len());

    println!("\n=== First 10 Airspaces ===");
    for (i, airspace) in airspaces.iter().take(10).enumerate() {
        println!(
            "{}. {} (class {})",
            i + 1,
            airspace.name.as_deref().unwrap_or("<unnamed>"),
            airspace.airspace_class.as_deref().unwrap_or("?")
        );

        match airspace.ceiling_altitude_ft {
            Some(ceiling) => println!("   Altitude: {} - {} ft", airspace.base_altitude_ft, ceiling),
            None => println!("   Altitude: from {} ft", airspace.base_altitude_ft),
        }

        println!("   Points: {}", airspace.coordinates.len());

        if let Some(bbox) = airspace.bounding_box() {
            println!(
                "   Bounds: W={:.4} S={:.4} E={:.4} N={:.4}",
                bbox.west, bbox.south, bbox.east, bbox.north
            );
        }
    }

    for warning in iter.warnings() {
        eprintln!("warning: {warning:?}");
    }

    Ok(())
}
