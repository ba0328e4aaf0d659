use super::{CategorySummary, NoteStore};
use crate::error::{JotError, Result};
use crate::model::{Note, StoreKey};
use crate::record;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    notes_file: PathBuf,
    categories_dir: PathBuf,
}

impl FileStore {
    pub fn new(notes_file: PathBuf, categories_dir: PathBuf) -> Self {
        Self {
            notes_file,
            categories_dir,
        }
    }

    fn store_path(&self, key: &StoreKey) -> PathBuf {
        match key {
            StoreKey::Notes => self.notes_file.clone(),
            StoreKey::Category(name) => self.categories_dir.join(name),
        }
    }

    /// Open the store for reading. A missing file is an empty store, not
    /// an error.
    fn open(&self, path: &Path) -> Result<Option<BufReader<File>>> {
        match File::open(path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JotError::Io(e)),
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn notes(&self, key: &StoreKey) -> Result<Vec<Note>> {
        let path = self.store_path(key);
        let Some(reader) = self.open(&path)? else {
            return Ok(Vec::new());
        };

        let schema = key.schema();
        let mut notes = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(note) = record::decode(&line, schema) {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn count(&self, key: &StoreKey) -> Result<Option<usize>> {
        let path = self.store_path(key);
        let Some(mut reader) = self.open(&path)? else {
            return Ok(None);
        };

        let mut newlines = 0usize;
        let mut buf = [0u8; 8192];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            newlines += buf[..n].iter().filter(|&&b| b == b'\n').count();
        }

        // Every record is newline-terminated, so a file without a single
        // newline holds no records at all.
        Ok(if newlines == 0 { None } else { Some(newlines) })
    }

    fn append(&mut self, key: &StoreKey, note: &Note) -> Result<()> {
        let path = self.store_path(key);
        self.ensure_parent(&path)?;

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            // category files are created owner-only
            if matches!(key, StoreKey::Category(_)) {
                options.mode(0o600);
            }
        }

        let mut file = options.open(&path)?;
        writeln!(file, "{}", record::encode(note))?;
        Ok(())
    }

    fn rewrite(
        &mut self,
        key: &StoreKey,
        transform: &mut dyn FnMut(Note) -> Option<Note>,
    ) -> Result<()> {
        let path = self.store_path(key);
        let Some(reader) = self.open(&path)? else {
            return Ok(());
        };
        let schema = key.schema();

        let tmp_path = tmp_path_for(&path);
        let written = (|| -> Result<()> {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            for line in reader.lines() {
                let line = line?;
                match record::decode(&line, schema) {
                    Some(note) => {
                        if let Some(kept) = transform(note) {
                            writeln!(writer, "{}", record::encode(&kept))?;
                        }
                    }
                    None => {
                        // A mutation must not amplify partial corruption:
                        // undecodable lines pass through verbatim. Reads
                        // skip them; a trailing blank line is dropped.
                        if !line.is_empty() {
                            writeln!(writer, "{}", line)?;
                        }
                    }
                }
            }
            writer.flush()?;
            Ok(())
        })();

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&mut self, key: &StoreKey) -> Result<()> {
        match fs::remove_file(self.store_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path(&self, key: &StoreKey) -> Result<PathBuf> {
        Ok(self.store_path(key))
    }

    fn categories(&self) -> Result<Vec<CategorySummary>> {
        if !self.categories_dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.categories_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            let count = self.count(&StoreKey::Category(name.clone()))?;
            summaries.push(CategorySummary { name, count });
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }
}

/// The rewrite target sits next to the store so the final rename never
/// crosses a filesystem boundary.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
