use std::path::PathBuf;

use crate::data::filter::FilterOptions;
use crate::data::model::CoreSet;
use crate::plot::PlotStyle;

/// Core files and the number of leading ranks kept from each label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSelection {
    pub files: Vec<PathBuf>,
    pub level: usize,
}

/// Everything one run needs, independent of how it was collected.
#[derive(Debug, Clone)]
pub struct TotemConfig {
    /// Tab-separated abundance table with a `#OTU ID` header.
    pub input: PathBuf,
    /// Output stem; the image is written to `<output>.png`.
    pub output: PathBuf,
    pub core: Option<CoreSelection>,
    pub min_percent: Option<u32>,
    pub sort: bool,
    pub style: PlotStyle,
}

impl TotemConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        TotemConfig {
            input: input.into(),
            output: output.into(),
            core: None,
            min_percent: None,
            sort: false,
            style: PlotStyle::default(),
        }
    }

    /// Filter stages for this run, given the loaded core set.
    pub fn filter_options(&self, core: Option<CoreSet>) -> FilterOptions {
        FilterOptions {
            core,
            min_percent: self.min_percent,
            sort: self.sort,
        }
    }
}
