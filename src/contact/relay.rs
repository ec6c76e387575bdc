use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::form::ContactPayload;

pub trait ContactRelay: Send + Sync {
    fn name(&self) -> &'static str;

    fn deliver(&self, payload: &ContactPayload) -> AppResult<()>;
}

/// Appends each message as one JSON line to a local file.
#[derive(Debug, Clone)]
pub struct OutboxRelay {
    path: PathBuf,
}

impl OutboxRelay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRelay for OutboxRelay {
    fn name(&self) -> &'static str {
        "outbox"
    }

    fn deliver(&self, payload: &ContactPayload) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| {
                AppError::relay(format!("create {}", parent.display()), source)
            })?;
        }

        let mut line = serde_json::to_string(payload)
            .map_err(|source| AppError::relay("encode payload", source))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AppError::relay(format!("open {}", self.path.display()), source))?;
        file.write_all(line.as_bytes())
            .map_err(|source| AppError::relay(format!("write {}", self.path.display()), source))?;
        tracing::info!(path = %self.path.display(), "contact message queued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ContactRelay, OutboxRelay};
    use crate::contact::ContactPayload;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_outbox_{}_{}", process::id(), nanos));
        path.push(suffix);
        path
    }

    fn payload(body: &str) -> ContactPayload {
        ContactPayload {
            recipient: "me@example.com".to_string(),
            sender_name: "Ada".to_string(),
            sender_email: "ada@example.com".to_string(),
            subject: "Portfolio Contact from Ada".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn appends_one_json_line_per_message() {
        let path = unique_temp_path("outbox.jsonl");
        let relay = OutboxRelay::new(&path);
        relay.deliver(&payload("first")).expect("first delivery");
        relay.deliver(&payload("second")).expect("second delivery");

        let raw = fs::read_to_string(relay.path()).expect("outbox should exist");
        let lines: Vec<ContactPayload> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("line should decode"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].body, "second");

        let dir = path.parent().expect("temp dir").to_path_buf();
        fs::remove_dir_all(dir).expect("cleanup");
    }
}
