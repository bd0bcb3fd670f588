use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Fire-and-forget notification sink backing the toast viewport.
#[derive(Clone, Copy)]
pub struct Notifier {
    entries: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn notify(&self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NotificationLevel::Success => log::info!("notify: {message}"),
            NotificationLevel::Error => log::warn!("notify: {message}"),
        }
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.entries.update(|entries| {
            entries.push(Notification { id, level, message });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|entry| entry.id != id));
    }

    pub fn entries(&self) -> ReadSignal<Vec<Notification>> {
        self.entries.read_only()
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(provide_notifier)
}
