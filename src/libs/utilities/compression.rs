// Pulls the single binary out of a `.tar.gz` release archive.

// Gzip decoder for the outer compression layer.
use flate2::read::GzDecoder;
// Our custom logging macros.
use crate::log_debug;
use crate::schemas::errors::GetGovcError;
use colored::Colorize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
// Reader for the inner tar stream.
use tar::Archive;

/// Extracts the entry whose base name is `binary_name` from the gzipped tarball at `src`
/// straight to `dest_dir/final_name`.
///
/// Only the first regular-file entry with that base name is used; directory layout
/// inside the archive is flattened. No other path in `dest_dir` is written.
///
/// # Arguments
/// * `src`: Path to the downloaded `.tar.gz`.
/// * `dest_dir`: Install directory. Created (with parents) if missing.
/// * `binary_name`: Base name of the entry to look for, e.g. `govc`.
/// * `final_name`: Filename of the installed binary inside `dest_dir`.
///
/// # Returns
/// * `Ok(PathBuf)` with the final path of the binary.
/// * `Err(GetGovcError::BinaryNotInArchive)` if no such entry exists. Nothing is written in that case.
/// * `Err(GetGovcError::Io)` on decompression or filesystem errors.
pub fn extract_binary(
    src: &Path,
    dest_dir: &Path,
    binary_name: &str,
    final_name: &str,
) -> Result<PathBuf, GetGovcError> {
    log_debug!(
        "[Extract] Extracting {} from {:?} into {:?}",
        binary_name.bold(),
        src.to_string_lossy().blue(),
        dest_dir.to_string_lossy().cyan()
    );

    fs::create_dir_all(dest_dir)?;

    let tar_gz = File::open(src)?;
    let mut archive = Archive::new(GzDecoder::new(tar_gz));

    let final_path = dest_dir.join(final_name);
    let mut found = false;

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let entry_path = entry.path()?.into_owned();
        let matches = entry_path
            .file_name()
            .is_some_and(|name| name == binary_name);
        if !matches {
            log_debug!("[Extract] Skipping archive member {:?}", entry_path);
            continue;
        }

        log_debug!("[Extract] Found {:?} in archive", entry_path);
        entry.unpack(&final_path)?;
        found = true;
        break;
    }

    if !found {
        return Err(GetGovcError::BinaryNotInArchive(binary_name.to_string()));
    }

    Ok(final_path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    /// Writes a `.tar.gz` at `path` holding `(entry path, contents)` text files with mode 0644.
    pub(crate) fn write_tarball(path: &Path, files: &[(&str, &str)]) -> anyhow::Result<()> {
        let encoder = GzEncoder::new(File::create(path)?, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, contents) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, contents.as_bytes())?;
        }
        builder.into_inner()?.finish()?;
        Ok(())
    }

    #[test]
    fn test_extracts_binary_under_final_name() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let tarball = tmp.path().join("govc.tar.gz");
        write_tarball(
            &tarball,
            &[
                ("LICENSE.txt", "license"),
                ("README.md", "readme"),
                ("govc", "binary-contents"),
            ],
        )?;
        let dest = tmp.path().join("nested").join("bin");

        let installed = extract_binary(&tarball, &dest, "govc", "govc-0.37")?;

        assert_eq!(installed, dest.join("govc-0.37"));
        assert_eq!(fs::read_to_string(&installed)?, "binary-contents");
        assert!(!dest.join("govc").exists());
        assert!(!dest.join("LICENSE.txt").exists());
        Ok(())
    }

    #[test]
    fn test_custom_name_leaves_existing_govc_alone() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let tarball = tmp.path().join("govc.tar.gz");
        write_tarball(&tarball, &[("govc", "new-binary")])?;
        let dest = tmp.path().join("bin");
        fs::create_dir_all(&dest)?;
        fs::write(dest.join("govc"), "someone-else's govc")?;

        let installed = extract_binary(&tarball, &dest, "govc", "govc-other")?;

        assert_eq!(installed, dest.join("govc-other"));
        assert_eq!(fs::read_to_string(&installed)?, "new-binary");
        assert_eq!(fs::read_to_string(dest.join("govc"))?, "someone-else's govc");
        Ok(())
    }

    #[test]
    fn test_finds_binary_in_subdirectory() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let tarball = tmp.path().join("govc.tar.gz");
        write_tarball(&tarball, &[("govc_Linux_x86_64/govc", "nested")])?;
        let dest = tmp.path().join("bin");

        let installed = extract_binary(&tarball, &dest, "govc", "govc")?;

        assert_eq!(installed, dest.join("govc"));
        assert_eq!(fs::read_to_string(&installed)?, "nested");
        Ok(())
    }

    #[test]
    fn test_missing_binary_leaves_destination_untouched() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let tarball = tmp.path().join("govc.tar.gz");
        write_tarball(&tarball, &[("README.md", "readme"), ("govc.1", "manpage")])?;
        let dest = tmp.path().join("bin");

        let err = extract_binary(&tarball, &dest, "govc", "govc").unwrap_err();

        assert!(matches!(err, GetGovcError::BinaryNotInArchive(_)));
        assert_eq!(fs::read_dir(&dest)?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_corrupt_archive_is_io_error() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let tarball = tmp.path().join("govc.tar.gz");
        fs::write(&tarball, b"definitely not gzip")?;

        let err = extract_binary(&tarball, &tmp.path().join("bin"), "govc", "govc").unwrap_err();
        assert!(matches!(err, GetGovcError::Io(_)));
        Ok(())
    }
}
