use log::warn;

/// A user-visible alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: String::from("Error"),
            message: message.into(),
        }
    }
}

/// Surface for alerts raised by list controllers.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes alerts to the log. Used by the command line front end, where the
/// log's stdout sink is what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        warn!("{}: {}", notice.title, notice.message);
    }
}
