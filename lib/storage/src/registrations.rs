use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use schemematch_core::ApplicantProfile;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One submitted profile as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub profile: ApplicantProfile,
}

/// Append-only JSON-lines log of submitted profiles.
/// Records are never rewritten or removed.
pub struct RegistrationLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl RegistrationLog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening registration log {}", path.display()))?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a profile and flush it to the file
    pub fn append(&self, profile: &ApplicantProfile) -> Result<RegistrationRecord> {
        let record = RegistrationRecord {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            profile: profile.clone(),
        };
        let line = serde_json::to_vec(&record)?;

        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(record)
    }

    /// Read every stored record in append order. Blank lines are skipped.
    pub fn read_all(&self) -> Result<Vec<RegistrationRecord>> {
        // Hold the writer so a concurrent append cannot leave a half line
        let _guard = self.writer.lock();
        let file = File::open(&self.path)?;
        let mut records = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).with_context(|| {
                format!("corrupt record at {}:{}", self.path.display(), lineno + 1)
            })?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
