use std::path::PathBuf;

use crate::config::TotemConfig;
use crate::data::{filter, loader};
use crate::error::Result;
use crate::plot;

// ---------------------------------------------------------------------------
// One totem run: load → filter → render
// ---------------------------------------------------------------------------

/// Execute the whole pipeline described by `config` and return the path of
/// the written image.
pub fn run(config: &TotemConfig) -> Result<PathBuf> {
    let core = match &config.core {
        Some(selection) => {
            let core = loader::load_core_set(&selection.files, selection.level)?;
            log::info!(
                "Loaded {} core taxa at level {} from {} files",
                core.len(),
                selection.level,
                selection.files.len()
            );
            Some(core)
        }
        None => None,
    };

    let table = loader::load_table(&config.input)?;
    log::info!(
        "Loaded {} rows from {} ({} vs {})",
        table.len(),
        config.input.display(),
        table.headers.value1,
        table.headers.value2
    );

    let filtered = filter::apply(&table, &config.filter_options(core));
    plot::render(&filtered, &config.output, &config.style)
}
