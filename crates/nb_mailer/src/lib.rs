pub mod report;
pub mod send;

pub use report::render_report;
pub use send::Mailer;
