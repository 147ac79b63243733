mod clean;
pub use clean::*;

mod output_step;
pub use output_step::*;

mod scan;
pub use scan::*;
