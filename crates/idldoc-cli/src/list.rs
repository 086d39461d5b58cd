//! `idldoc list`

use anyhow::Result;
use idldoc_core::{Generator, InterfaceKind};

use crate::sources::Settings;

/// Print every interface that `generate` would document.
pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let generator = Generator::new(&settings.source, settings.generator_options(Default::default()));
    let catalog = generator.catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (package, interfaces) in catalog.packages() {
        println!("{package}:");
        for kind in InterfaceKind::ALL {
            for name in interfaces.names(kind) {
                println!("  {}/{}", kind.dir_name(), name);
            }
        }
    }
    Ok(())
}
