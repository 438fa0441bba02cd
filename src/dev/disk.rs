use std::collections::BTreeMap;
use std::io::{self, ErrorKind};
use std::path::Path;

/// ## Disk collaborator
///
/// Errors carry an `io::ErrorKind`: `NotFound`, `AlreadyExists` and
/// `PermissionDenied` are the ones the disk commands tell apart.
pub trait Filesystem {
    fn list_files(&self) -> Vec<String>;
    fn file_size(&self, name: &str) -> io::Result<usize>;
    fn load_file(&self, name: &str) -> io::Result<Vec<u8>>;
    fn save_file(&mut self, name: &str, data: &[u8]) -> io::Result<()>;
    fn delete_file(&mut self, name: &str) -> io::Result<()>;
    fn rename_file(&mut self, old: &str, new: &str) -> io::Result<()>;
    fn file_exists(&self, name: &str) -> bool;
}

/// An in-memory floppy. File names are case-insensitive and kept upper case
/// the way the FAT directory stores them.
#[derive(Debug, Default, Clone)]
pub struct VirtualDisk {
    files: BTreeMap<String, Vec<u8>>,
    read_only: bool,
}

fn key(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

fn not_found(name: &str) -> io::Error {
    io::Error::new(ErrorKind::NotFound, format!("File not found: {}", name))
}

impl VirtualDisk {
    pub fn new() -> VirtualDisk {
        VirtualDisk::default()
    }

    /// Copy every regular file of a host directory onto the disk.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> io::Result<VirtualDisk> {
        let mut disk = VirtualDisk::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            disk.files.insert(key(&name), std::fs::read(entry.path())?);
        }
        Ok(disk)
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn insert(&mut self, name: &str, data: &[u8]) {
        self.files.insert(key(name), data.to_vec());
    }

    fn writable(&self) -> io::Result<()> {
        if self.read_only {
            Err(io::Error::new(ErrorKind::PermissionDenied, "Disk is write protected"))
        } else {
            Ok(())
        }
    }
}

impl Filesystem for VirtualDisk {
    fn list_files(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn file_size(&self, name: &str) -> io::Result<usize> {
        match self.files.get(&key(name)) {
            Some(data) => Ok(data.len()),
            None => Err(not_found(name)),
        }
    }

    fn load_file(&self, name: &str) -> io::Result<Vec<u8>> {
        match self.files.get(&key(name)) {
            Some(data) => Ok(data.clone()),
            None => Err(not_found(name)),
        }
    }

    fn save_file(&mut self, name: &str, data: &[u8]) -> io::Result<()> {
        self.writable()?;
        self.files.insert(key(name), data.to_vec());
        Ok(())
    }

    fn delete_file(&mut self, name: &str) -> io::Result<()> {
        self.writable()?;
        match self.files.remove(&key(name)) {
            Some(_) => Ok(()),
            None => Err(not_found(name)),
        }
    }

    fn rename_file(&mut self, old: &str, new: &str) -> io::Result<()> {
        self.writable()?;
        if self.file_exists(new) {
            return Err(io::Error::new(ErrorKind::AlreadyExists, new.to_string()));
        }
        match self.files.remove(&key(old)) {
            Some(data) => {
                self.files.insert(key(new), data);
                Ok(())
            }
            None => Err(not_found(old)),
        }
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.contains_key(&key(name))
    }
}
