use layers::LEGEND_CONTAINER;
use layers::symbology;
use tracing::debug;

use crate::display::{DisplayError, DisplaySink};

/// Appends one swatch fragment per land-use category to the legend container.
///
/// Fallback "Other" is not listed. Returns the number of entries written.
pub fn build_legend<D: DisplaySink>(display: &mut D) -> Result<usize, DisplayError> {
    let entries = symbology::legend_entries();
    for entry in &entries {
        display.append_fragment(LEGEND_CONTAINER, &entry.to_html())?;
    }
    debug!(entries = entries.len(), "legend built");
    Ok(entries.len())
}
