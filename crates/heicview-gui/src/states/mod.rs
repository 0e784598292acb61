mod print;
mod viewport;

pub use print::PrintDialogState;
pub use viewport::ViewportState;
