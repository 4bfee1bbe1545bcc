//! File create/write/read/remove round trip in the working directory.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

/// Scratch file name, relative to the current directory.
pub const TEST_FILE_NAME: &str = "test_file.txt";
/// Payload written and read back (22 bytes, no trailing newline).
pub const TEST_DATA: &[u8] = b"Hello from C file I/O!";
/// Upper bound on the read-back, mirroring a 256-byte buffer with a terminator.
pub const READ_LIMIT: u64 = 255;

/// Write [`TEST_DATA`] to `./test_file.txt`, read it back, compare, remove.
pub fn check_file_io() -> ProbeOutcome {
    round_trip(Path::new(TEST_FILE_NAME))
}

/// Run the round trip against an arbitrary path.
pub fn round_trip(path: &Path) -> ProbeOutcome {
    {
        let mut file = File::create(path).map_err(|_| ProbeFailure::FileCreate)?;
        let written = file.write(TEST_DATA).map_err(|_| ProbeFailure::FileWrite)?;
        check(written == TEST_DATA.len(), ProbeFailure::FileWrite)?;
        file.flush().map_err(|_| ProbeFailure::FileWrite)?;
    }

    let mut contents = Vec::with_capacity(READ_LIMIT as usize);
    {
        let file = File::open(path).map_err(|_| ProbeFailure::FileOpen)?;
        let read = file
            .take(READ_LIMIT)
            .read_to_end(&mut contents)
            .map_err(|_| ProbeFailure::FileRead)?;
        check(read > 0, ProbeFailure::FileRead)?;
    }

    check(contents == TEST_DATA, ProbeFailure::FileContentsMismatch)?;
    fs::remove_file(path).map_err(|_| ProbeFailure::FileRemove)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stdcheck_file_io_{label}_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn payload_is_twenty_two_bytes() {
        assert_eq!(TEST_DATA.len(), 22);
    }

    #[test]
    fn round_trip_removes_file() {
        let dir = scratch_dir("ok");
        let path = dir.join(TEST_FILE_NAME);
        assert_eq!(round_trip(&path), Ok(()));
        assert!(!path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn round_trip_truncates_existing_file() {
        let dir = scratch_dir("truncate");
        let path = dir.join(TEST_FILE_NAME);
        std::fs::write(&path, vec![b'x'; 400]).unwrap();
        assert_eq!(round_trip(&path), Ok(()));
        assert!(!path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_parent_directory_fails_at_creation() {
        let dir = scratch_dir("missing");
        let path = dir.join("no_such_dir").join(TEST_FILE_NAME);
        assert_eq!(round_trip(&path), Err(ProbeFailure::FileCreate));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
