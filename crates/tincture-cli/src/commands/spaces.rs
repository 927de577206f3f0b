//! Registry listing command

use crate::SpacesArgs;
use anyhow::Result;
use tincture_color::SpaceKind;
use tincture_primaries::WorkingSpace;

pub fn run(args: SpacesArgs, verbose: u8) -> Result<()> {
    if args.kinds {
        for kind in SpaceKind::ALL {
            println!("{:<12} {}", kind.name(), kind.component_names().join(", "));
        }
        return Ok(());
    }

    println!("{:<20} {:<18} {}", "Name", "White (x, y)", "Companding");
    for ws in WorkingSpace::ALL {
        println!(
            "{:<20} {:<18} {}",
            ws.name,
            super::chromaticity(ws.white),
            ws.companding
        );
        if verbose > 0 {
            println!(
                "    R {:?}  G {:?}  B {:?}",
                ws.red, ws.green, ws.blue
            );
        }
    }
    Ok(())
}
