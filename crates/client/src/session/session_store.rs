use std::{fs, path::PathBuf, sync::Mutex};

use log::warn;
use serde::{Deserialize, Serialize};

use urbanroof_core::errors::{Error, Result};

use super::{Session, SessionKind};

/// Persistence for signed-in sessions, one slot per `SessionKind`.
pub trait SessionStore: Send + Sync {
    fn load(&self, kind: SessionKind) -> Result<Option<Session>>;

    /// Stores `session` in the slot for its kind, replacing any previous one.
    fn save(&self, session: &Session) -> Result<()>;

    fn clear(&self, kind: SessionKind) -> Result<()>;
}

const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin: Option<Session>,
}

impl SessionSlots {
    fn slot(&self, kind: SessionKind) -> &Option<Session> {
        match kind {
            SessionKind::User => &self.user,
            SessionKind::Admin => &self.admin,
        }
    }

    fn slot_mut(&mut self, kind: SessionKind) -> &mut Option<Session> {
        match kind {
            SessionKind::User => &mut self.user,
            SessionKind::Admin => &mut self.admin,
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
struct SessionFile {
    version: u32,
    #[serde(default)]
    sessions: SessionSlots,
}

/// Session store backed by a JSON file.
///
/// The file holds credentials; it is written with the process umask and
/// should live in a directory only the current user can read.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn with_store<F>(&self, mut op: F) -> Result<()>
    where
        F: FnMut(&mut SessionSlots),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".into()))?;
        // An unreadable file is replaced on write.
        let mut store = match self.read_raw_locked()? {
            Some(raw) => parse_store(&raw).unwrap_or_else(|err| {
                warn!(
                    "Discarding unreadable session file {}: {}",
                    self.path.display(),
                    err
                );
                SessionSlots::default()
            }),
            None => SessionSlots::default(),
        };
        op(&mut store);
        self.persist_store_locked(&store)
    }

    fn read_store(&self) -> Result<SessionSlots> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".into()))?;
        match self.read_raw_locked()? {
            Some(raw) => parse_store(&raw),
            None => Ok(SessionSlots::default()),
        }
    }

    /// File contents, or `None` when the file is missing or empty.
    fn read_raw_locked(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(raw))
    }

    fn persist_store_locked(&self, store: &SessionSlots) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = SessionFile {
            version: CURRENT_VERSION,
            sessions: store.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn parse_store(raw: &[u8]) -> Result<SessionSlots> {
    let file: SessionFile = serde_json::from_slice(raw)
        .map_err(|e| Error::Session(format!("Corrupt session file: {}", e)))?;
    if file.version != CURRENT_VERSION {
        warn!(
            "Session file version {} differs from supported version {}",
            file.version, CURRENT_VERSION
        );
    }
    Ok(file.sessions)
}

impl SessionStore for FileSessionStore {
    fn load(&self, kind: SessionKind) -> Result<Option<Session>> {
        let store = self.read_store()?;
        Ok(store.slot(kind).clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        self.with_store(|store| {
            *store.slot_mut(session.kind()) = Some(session.clone());
        })
    }

    fn clear(&self, kind: SessionKind) -> Result<()> {
        self.with_store(|store| {
            *store.slot_mut(kind) = None;
        })
    }
}

/// In-process session store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: Mutex<SessionSlots>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, kind: SessionKind) -> Result<Option<Session>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".into()))?;
        Ok(slots.slot(kind).clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".into()))?;
        *slots.slot_mut(session.kind()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self, kind: SessionKind) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".into()))?;
        *slots.slot_mut(kind) = None;
        Ok(())
    }
}
