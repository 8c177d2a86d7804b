use std::path::{Path, PathBuf};
/// associating a extension with a enum
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FileType {
    Npy,
    Npz,
    Unknown,
}
impl FileType {
    pub fn value(&self) -> &'static [&'static str] {
        match self {
            Self::Npy => &["npy"],
            Self::Npz => &["npz"],
            Self::Unknown => &[""],
        }
    }
    /// Extensions are matched case sensitively, ``clip.NPY`` is not a npy file
    pub fn find_match(ext: &str) -> Self {
        Self::iter()
            .find(|filetype| filetype.value().contains(&ext))
            .unwrap_or(FileType::Unknown)
    }
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(FileType::Unknown, Self::find_match)
    }
}

/// Lists the files of a certain type directly inside ``dir``, sorted
/// lexicographically by path. Hidden files (name starting with ``.``) are
/// skipped
///
/// # Errors
/// Returns the io error if the directory cannot be read
pub fn list_files_of_type(dir: &Path, file_type: FileType) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path.file_name().and_then(|name| name.to_str()).map_or(true, |name| name.starts_with('.'));
        if !hidden && path.is_file() && FileType::from_path(&path) == file_type {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Name of a clip as used for its output file: the file name up to the first
/// ``.``, so ``dance_01.smplx.npy`` becomes ``dance_01``. ``None`` if that
/// name is empty
pub fn clip_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name.split('.').next().filter(|name| !name.is_empty()).map(str::to_string)
}
