//! Append-only username log over a local text file, one line per username.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Append one username plus newline, creating the file on first use.
pub fn append_username(path: &Path, name: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{name}")
}

/// Every stored line, in file order.
pub fn read_usernames(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Interactive flow: record a username, then optionally list them all.
///
/// A read failure while listing is reported together with its kind and the
/// flow still finishes normally; an append failure propagates.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, path: &Path) -> io::Result<()> {
    write!(output, "Enter your username: ")?;
    output.flush()?;
    let username = read_line(&mut input)?;
    if !username.is_empty() {
        append_username(path, &username)?;
    }

    write!(output, "Do you want to view all usernames (y/n): ")?;
    output.flush()?;
    if read_line(&mut input)? == "y" {
        match read_usernames(path) {
            Ok(lines) => {
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
            Err(e) => {
                writeln!(output, "{e} ({:?})", e.kind())?;
            }
        }
    }
    Ok(())
}

/// Read one line with the terminator stripped; empty at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(input: &str, path: &Path) -> (io::Result<()>, String) {
        let mut output = Vec::new();
        let result = run(Cursor::new(input), &mut output, path);
        (result, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn append_to_existing_log_and_list_everything() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("user_info.txt");
        fs::write(&path, "alice\nbob\n").expect("seed file");

        let (result, out) = drive("carol\ny\n", &path);
        result.expect("normal exit");

        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "alice\nbob\ncarol\n");
        assert!(out.contains("alice\nbob\ncarol\n"));
    }

    #[test]
    fn blank_username_is_not_recorded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("user_info.txt");

        let (result, _) = drive("\nn\n", &path);
        result.expect("normal exit");
        assert!(!path.exists());
    }

    #[test]
    fn declining_the_listing_prints_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("user_info.txt");

        let (result, out) = drive("dave\nn\n", &path);
        result.expect("normal exit");
        assert!(!out.contains("dave"));
        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "dave\n"
        );
    }

    #[test]
    fn read_failure_is_reported_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.txt");

        // blank username skips the append, so the listing hits a missing file
        let (result, out) = drive("\ny\n", &path);
        result.expect("normal exit despite read failure");
        assert!(out.contains("NotFound"));
    }

    #[test]
    fn read_usernames_surfaces_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_usernames(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
