use crate::areas::commit_log::CommitLog;
use crate::areas::config::Config;
use crate::areas::index::Index;
use crate::areas::lockfile::Lockfile;
use crate::areas::snapshots::Snapshots;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::fs;
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    commit_log: CommitLog,
    snapshots: Snapshots,
    workspace: Workspace,
    config: Config,
    lockfile: Lockfile,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index.txt").into_boxed_path());
        let commit_log = CommitLog::new(repository_path.join("log.txt").into_boxed_path());
        let snapshots = Snapshots::new(repository_path.join("commits").into_boxed_path());
        let config = Config::new(repository_path.join("config.txt").into_boxed_path());
        let lockfile = Lockfile::new(repository_path.join(".lock").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            commit_log,
            snapshots,
            workspace,
            config,
            lockfile,
        })
    }

    /// Create the repository layout if it is missing; safe to call on every run
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.snapshots.path()).with_context(|| {
            format!(
                "Failed to create {} directory",
                self.snapshots.path().display()
            )
        })?;

        for file_path in [
            self.index().path(),
            self.commit_log.path(),
            self.config.path(),
        ] {
            if !file_path.exists() {
                fs::write(file_path, b"")
                    .with_context(|| format!("Failed to create {}", file_path.display()))?;
            }
        }

        Ok(())
    }

    /// Record commits under `name` instead of the stored author when it is non-blank
    pub fn with_author_override(mut self, name: Option<String>) -> Self {
        self.config = self.config.with_author_override(name);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn commit_log(&self) -> &CommitLog {
        &self.commit_log
    }

    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn lockfile(&self) -> &Lockfile {
        &self.lockfile
    }
}
