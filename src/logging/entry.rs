//! Event log entry types

/// Type of event log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Indicator changed state
    Indicator { channel: String, is_on: bool },
    /// Feed shown or hidden
    Feed { label: String, visible: bool },
    /// Message from the console itself
    System { message: String },
}

/// Event log entry
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub timestamp: String, // HH:MM:SS.mmm
    pub kind: EventKind,
}

impl EventEntry {
    /// Current timestamp as HH:MM:SS.mmm
    #[inline]
    fn now() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            timestamp: Self::now(),
            kind: EventKind::System {
                message: message.into(),
            },
        }
    }

    pub fn indicator(channel: impl Into<String>, is_on: bool) -> Self {
        Self {
            timestamp: Self::now(),
            kind: EventKind::Indicator {
                channel: channel.into(),
                is_on,
            },
        }
    }

    pub fn feed(label: impl Into<String>, visible: bool) -> Self {
        Self {
            timestamp: Self::now(),
            kind: EventKind::Feed {
                label: label.into(),
                visible,
            },
        }
    }

    /// Plain-text rendering, without the timestamp
    pub fn message(&self) -> String {
        match &self.kind {
            EventKind::Indicator { channel, is_on } => {
                format!("{} {}", channel, if *is_on { "ON" } else { "OFF" })
            }
            EventKind::Feed { label, visible } => {
                format!("{} {}", label, if *visible { "shown" } else { "hidden" })
            }
            EventKind::System { message } => message.clone(),
        }
    }
}
