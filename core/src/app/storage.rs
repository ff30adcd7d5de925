use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Per-application directories, resolved from the platform conventions. Every accessor returns `None` when the
/// platform has no home directory.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Option<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "Oxide", application);
    Self { project_directories }
  }

  pub fn local_data_directory(&self) -> Option<&Path> {
    self.project_directories.as_ref().map(|d| d.data_local_dir())
  }
  pub fn cache_directory(&self) -> Option<&Path> {
    self.project_directories.as_ref().map(|d| d.cache_dir())
  }

  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.local_data_directory().map(|d| d.join(file_path))
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn files_live_in_local_data_directory() {
    let storage = Storage::new("oxide_storage_test");
    assert_eq!(
      storage.local_data_file("log.txt"),
      storage.local_data_directory().map(|d| d.join("log.txt"))
    );
  }

  #[test]
  fn default_storage_has_no_directories() {
    let storage = Storage::default();
    assert_eq!(storage.local_data_directory(), None);
    assert_eq!(storage.cache_directory(), None);
    assert_eq!(storage.local_data_file("log.txt"), None);
  }
}
