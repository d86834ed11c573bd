/// Width in pixels of the whole figure (both panels).
pub const FIGURE_WIDTH: u32 = 1280;

/// Height in pixels of the figure.
pub const FIGURE_HEIGHT: u32 = 560;

/// Number of uniform-width bins in the interarrival histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Capacity of the buffer used by the CSV reader.
pub const READER_BUFFER_CAPACITY: usize = 32 * 1024;

/// Title of the window the figure is shown in.
pub const WINDOW_TITLE: &str = "Arrival Time Distribution";

/// Where `gen_distribution` writes its sample unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "distribution/distribution.txt";
