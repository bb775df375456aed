use std::path::Path;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        log::debug!("creating directory {}", dirspath.to_string_lossy());
        std::fs::create_dir_all(dirspath)
    } else {
        Ok(())
    }
}

/// writes a file, creating its parent directories first
pub fn write_file<P, C>(path: P, contents: C) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dirs(parent)?;
        }
    }
    std::fs::write(path, contents)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let target = dir.path().join("static").join("details").join("a_b.json");
        write_file(&target, "{}").expect("should write file");
        let contents = std::fs::read_to_string(&target).expect("should read file back");
        assert_eq!(contents, "{}");
        create_dirs(dir.path().join("static")).expect("existing dir is fine");
    }
}
